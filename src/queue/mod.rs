//! Burst-merging notification queue for XP gains

mod clock;
mod event;
#[allow(clippy::module_inception)]
mod queue;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event::{QueuedXpEvent, XpNotification};
pub use queue::{QueueConfig, QueueState, XpQueue};
