//! Simulate command implementation
//!
//! Replays a JSON-lines stream of XP notifications through the merge
//! queue on a virtual clock and prints the resulting presentation
//! stream. Each line is an `XpNotification` plus an `at_ms` arrival
//! offset, e.g.:
//!
//! ```json
//! {"at_ms": 0, "gained": 10, "source": "output_submitted", "prev_xp": 1200, "new_xp": 1210}
//! {"at_ms": 200, "gained": 50, "source": "first_output", "prev_xp": 1210, "new_xp": 1260}
//! ```

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use xp_engine::level::level_ups_between;
use xp_engine::queue::{ManualClock, QueueConfig, QueuedXpEvent, XpQueue};

/// Virtual clock step size
const TICK_MS: u64 = 10;

/// Hard bound on drain ticks so a bad config can never hang the command
const MAX_DRAIN_TICKS: u64 = 100_000;

/// An XP notification with its arrival time, relative to simulation start
#[derive(Debug, Deserialize)]
struct TimedNotification {
    #[serde(default)]
    at_ms: u64,
    #[serde(flatten)]
    notification: xp_engine::queue::XpNotification,
}

/// Run the notification stream through the queue and print presentations
pub async fn simulate_command(config: QueueConfig, input: Option<&Path>) -> Result<()> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    let mut arrivals = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let timed: TimedNotification = serde_json::from_str(line)
            .with_context(|| format!("Invalid notification on line {}", number + 1))?;
        arrivals.push(timed);
    }
    arrivals.sort_by_key(|t| t.at_ms);

    let clock = ManualClock::new();
    let mut queue = XpQueue::with_clock(config, clock.clone());
    let mut elapsed_ms = 0u64;
    let mut presenting = false;
    let mut presented = 0u32;

    for arrival in arrivals {
        while elapsed_ms < arrival.at_ms {
            tick(&mut queue, &clock, &mut elapsed_ms, &mut presenting, &mut presented);
        }
        queue.enqueue(arrival.notification);
    }

    let mut guard = 0u64;
    while !queue.is_drained() && guard < MAX_DRAIN_TICKS {
        tick(&mut queue, &clock, &mut elapsed_ms, &mut presenting, &mut presented);
        guard += 1;
    }

    println!("-- {} event(s) presented over {}ms", presented, elapsed_ms);
    Ok(())
}

fn tick(
    queue: &mut XpQueue<ManualClock>,
    clock: &ManualClock,
    elapsed_ms: &mut u64,
    presenting: &mut bool,
    presented: &mut u32,
) {
    clock.advance(Duration::from_millis(TICK_MS));
    *elapsed_ms += TICK_MS;

    match queue.poll() {
        Some(event) => {
            if !*presenting {
                print_event(*elapsed_ms, event);
                *presenting = true;
                *presented += 1;
            }
        }
        None => *presenting = false,
    }
}

fn print_event(elapsed_ms: u64, event: &QueuedXpEvent) {
    let sources: Vec<&str> = event.sources.iter().map(String::as_str).collect();
    let sources = if sources.is_empty() {
        "no source".to_string()
    } else {
        sources.join(", ")
    };

    println!(
        "[{:>6}ms] {}{} XP ({}) from {} notification(s)",
        elapsed_ms,
        if event.gained >= 0 { "+" } else { "" },
        event.gained,
        sources,
        event.merged_count
    );

    // Snapshots are best-effort; only report level-ups when the sender
    // actually provided a before/after pair.
    if event.prev_xp != 0 || event.new_xp != 0 {
        let ups = level_ups_between(event.prev_xp, event.new_xp);
        if let (Some(first), Some(last)) = (ups.first(), ups.last()) {
            println!("           level up! {} -> {}", first - 1, last);
        }
    }
}
