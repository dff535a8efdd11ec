//! Burst-merging XP event queue
//!
//! Absorbs rapid-fire XP-gain notifications and presents them to the UI
//! as a single rate-limited stream: one merged "current" event at a time,
//! never two toasts at once. A user whose one action trips several reward
//! sources sees one notification instead of three.
//!
//! The queue is poll-driven against an injected [`Clock`]: `enqueue`
//! records arrivals, `poll` advances the merge and presentation timers.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use super::event::{QueuedXpEvent, XpNotification};

/// Timing and capacity knobs for the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// How long after a buffering interval opens that later arrivals merge
    /// into it, measured from the interval's start (not a rolling window)
    pub merge_window: Duration,
    /// How long a merged event stays current
    pub present_duration: Duration,
    /// Pause between one presentation ending and the next beginning
    pub grace_gap: Duration,
    /// Cap on distinct buffered events; the oldest is dropped beyond this
    pub max_buffered: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            merge_window: Duration::from_millis(800),
            present_duration: Duration::from_millis(2200),
            grace_gap: Duration::from_millis(100),
            max_buffered: 10,
        }
    }
}

/// Observable queue state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    /// Nothing pending, nothing presented
    Idle,
    /// One or more merged events collected, none presented yet
    Buffering,
    /// A merged event is exposed to the UI
    Presenting,
}

/// A buffered event plus the bookkeeping for its merge window
#[derive(Debug)]
struct Buffered {
    event: QueuedXpEvent,
    /// Start of this event's buffering interval
    opened_at: Instant,
    /// Window closed early by an explicit flush
    closed: bool,
}

/// Per-session XP event queue.
///
/// Single-consumer and strictly sequential: at most one event is current
/// at a time, and the next buffered event begins presenting only after
/// the previous presentation plus a short grace gap. Dropping the queue
/// silently discards buffered events; the underlying XP grants are
/// already durable in the external ledger, so only notification UX is
/// affected.
pub struct XpQueue<C: Clock = SystemClock> {
    clock: C,
    config: QueueConfig,
    buffered: VecDeque<Buffered>,
    current: Option<QueuedXpEvent>,
    presented_at: Option<Instant>,
    /// No new presentation may start before this instant
    gap_until: Option<Instant>,
}

impl XpQueue<SystemClock> {
    pub fn new(config: QueueConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> XpQueue<C> {
    pub fn with_clock(config: QueueConfig, clock: C) -> Self {
        Self {
            clock,
            config,
            buffered: VecDeque::new(),
            current: None,
            presented_at: None,
            gap_until: None,
        }
    }

    /// Ingest a raw XP-gain notification.
    ///
    /// Merges into the newest buffered event when the arrival falls within
    /// that event's merge window; otherwise opens a new buffering
    /// interval. Never fails: malformed or defaulted notifications are
    /// accepted as-is.
    pub fn enqueue(&mut self, notification: XpNotification) {
        let now = self.clock.now();

        if let Some(back) = self.buffered.back_mut() {
            if !back.closed && now.duration_since(back.opened_at) < self.config.merge_window {
                back.event.absorb(notification);
                tracing::debug!(
                    gained = back.event.gained,
                    merged = back.event.merged_count,
                    "merged notification into open buffering interval"
                );
                return;
            }
        }

        self.buffered.push_back(Buffered {
            event: QueuedXpEvent::from_notification(notification, now),
            opened_at: now,
            closed: false,
        });
        tracing::debug!(pending = self.buffered.len(), "opened new buffering interval");

        if self.buffered.len() > self.config.max_buffered {
            self.buffered.pop_front();
            tracing::warn!(
                cap = self.config.max_buffered,
                "buffered event cap reached, dropped oldest"
            );
        }
    }

    /// Advance timers and return the event currently presented, if any.
    ///
    /// Drives all state transitions: retires an expired presentation,
    /// honors the grace gap, and promotes the oldest buffered event whose
    /// merge window has closed.
    pub fn poll(&mut self) -> Option<&QueuedXpEvent> {
        let now = self.clock.now();

        if let Some(since) = self.presented_at {
            if now.duration_since(since) >= self.config.present_duration {
                self.current = None;
                self.presented_at = None;
                self.gap_until = Some(now + self.config.grace_gap);
                tracing::debug!("presentation finished");
            }
        }

        if self.current.is_none() && self.gap_elapsed(now) {
            let window_closed = self.buffered.front().is_some_and(|front| {
                front.closed || now.duration_since(front.opened_at) >= self.config.merge_window
            });
            if window_closed {
                if let Some(next) = self.buffered.pop_front() {
                    tracing::debug!(
                        gained = next.event.gained,
                        merged = next.event.merged_count,
                        "presenting merged event"
                    );
                    self.current = Some(next.event);
                    self.presented_at = Some(now);
                    self.gap_until = None;
                }
            }
        }

        self.current.as_ref()
    }

    /// The event currently presented, without advancing timers
    pub fn current(&self) -> Option<&QueuedXpEvent> {
        self.current.as_ref()
    }

    /// Close all open buffering intervals immediately. Buffered events
    /// become eligible for presentation on the next `poll`.
    pub fn flush(&mut self) {
        for buffered in &mut self.buffered {
            buffered.closed = true;
        }
    }

    /// Drop all buffered and current events (host teardown)
    pub fn clear(&mut self) {
        self.buffered.clear();
        self.current = None;
        self.presented_at = None;
        self.gap_until = None;
    }

    pub fn state(&self) -> QueueState {
        if self.current.is_some() {
            QueueState::Presenting
        } else if !self.buffered.is_empty() {
            QueueState::Buffering
        } else {
            QueueState::Idle
        }
    }

    /// Number of buffered events not yet presented
    pub fn pending(&self) -> usize {
        self.buffered.len()
    }

    /// Whether nothing remains to buffer or present
    pub fn is_drained(&self) -> bool {
        self.state() == QueueState::Idle
    }

    fn gap_elapsed(&self, now: Instant) -> bool {
        self.gap_until.is_none_or(|until| now >= until)
    }
}
