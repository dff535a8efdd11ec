//! End-to-end tests for the progression engine
//!
//! Drives the merge queue with a manual clock and checks that the level
//! calculator and queue agree on what the rendering layer would show.

use std::time::Duration;

use xp_engine::level::{level_from_total_xp, level_ups_between, xp_for_level, xp_reward, UserAction};
use xp_engine::queue::{ManualClock, QueueConfig, QueueState, XpNotification, XpQueue};

fn notification(gained: i64, source: &str, prev_xp: i64, new_xp: i64) -> XpNotification {
    XpNotification {
        gained,
        source: Some(source.to_string()),
        ref_type: Some("task".to_string()),
        ref_id: Some("t-42".to_string()),
        prev_xp,
        new_xp,
    }
}

#[test]
fn burst_within_window_presents_once() {
    let clock = ManualClock::new();
    let mut queue = XpQueue::with_clock(QueueConfig::default(), clock.clone());

    // Submitting a first output trips two reward sources 200ms apart
    let first = xp_reward(UserAction::OutputSubmitted, None) as i64;
    let second = xp_reward(UserAction::FirstOutput, None) as i64;
    queue.enqueue(notification(first, "output_submitted", 1200, 1210));
    clock.advance(Duration::from_millis(200));
    queue.enqueue(notification(second, "first_output", 1210, 1260));

    // One merged presentation once the window closes
    clock.advance(Duration::from_millis(600));
    let event = queue.poll().expect("merged event");
    assert_eq!(event.gained, first + second);
    assert_eq!(event.merged_count, 2);
    assert!(event.sources.contains("output_submitted"));
    assert!(event.sources.contains("first_output"));
    assert_eq!(event.prev_xp, 1200);
    assert_eq!(event.new_xp, 1260);

    // Exactly once: the queue drains back to idle afterwards
    clock.advance(Duration::from_millis(2200));
    assert!(queue.poll().is_none());
    assert_eq!(queue.state(), QueueState::Idle);
}

#[test]
fn separated_arrivals_present_sequentially_never_concurrently() {
    let clock = ManualClock::new();
    let mut queue = XpQueue::with_clock(QueueConfig::default(), clock.clone());

    queue.enqueue(notification(10, "output_submitted", 0, 10));
    clock.advance(Duration::from_millis(1000));
    queue.enqueue(notification(15, "weekly_streak", 10, 25));

    let mut presented = Vec::new();
    let mut presenting = false;
    // Step the clock until both events have come and gone
    for _ in 0..600 {
        clock.advance(Duration::from_millis(10));
        match queue.poll() {
            Some(event) => {
                if !presenting {
                    presented.push(event.gained);
                    presenting = true;
                }
            }
            None => presenting = false,
        }
    }

    assert_eq!(presented, vec![10, 15]);
    assert_eq!(queue.state(), QueueState::Idle);
}

#[test]
fn rendering_layer_detects_level_up_from_snapshots() {
    let clock = ManualClock::new();
    let mut queue = XpQueue::with_clock(QueueConfig::default(), clock.clone());

    // 1249 XP is level 4; the grant crosses the level-5 boundary at 1250
    queue.enqueue(notification(51, "hire_task_completed", 1249, 1300));
    clock.advance(Duration::from_millis(800));
    let event = queue.poll().expect("presented");

    let ups = level_ups_between(event.prev_xp, event.new_xp);
    assert_eq!(ups, vec![5]);
    assert_eq!(level_from_total_xp(event.new_xp), 5);
    assert_eq!(xp_for_level(5), 1250);
}

#[test]
fn custom_timing_config_is_honored() {
    let clock = ManualClock::new();
    let config = QueueConfig {
        merge_window: Duration::from_millis(100),
        present_duration: Duration::from_millis(300),
        grace_gap: Duration::from_millis(0),
        max_buffered: 10,
    };
    let mut queue = XpQueue::with_clock(config, clock.clone());

    queue.enqueue(notification(10, "a", 0, 10));
    clock.advance(Duration::from_millis(150));
    // Outside the shortened window: separate event
    queue.enqueue(notification(5, "b", 10, 15));

    let first = queue.poll().expect("first presented");
    assert_eq!(first.gained, 10);

    clock.advance(Duration::from_millis(300));
    let second = queue.poll().expect("second presented immediately, no grace gap");
    assert_eq!(second.gained, 5);
}

#[test]
fn teardown_mid_buffer_drops_silently() {
    let clock = ManualClock::new();
    let mut queue = XpQueue::with_clock(QueueConfig::default(), clock.clone());

    queue.enqueue(notification(10, "a", 0, 10));
    clock.advance(Duration::from_millis(100));
    queue.clear();

    clock.advance(Duration::from_millis(5000));
    assert!(queue.poll().is_none());
    assert_eq!(queue.state(), QueueState::Idle);
}
