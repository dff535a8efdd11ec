//! XP Engine - level progression and notification coalescing
//!
//! The progression core of an AI-work marketplace: users earn XP for
//! actions, levels are derived from total XP by a fixed piecewise
//! quadratic curve, and badges and features unlock at level and
//! profile-completion thresholds.
//!
//! Two cooperating pieces:
//!
//! 1. **Level calculator** ([`level`]): pure functions from total XP to
//!    level, progress, badges, rewards, and feature gates. Total and
//!    non-panicking; bad inputs clamp instead of erroring.
//!
//! 2. **XP event queue** ([`queue`]): buffers bursts of XP-gain
//!    notifications, merges those arriving within a short window, and
//!    presents them one at a time so the UI shows a single toast per
//!    user action.

pub mod config;
pub mod level;
pub mod profile;
pub mod queue;
pub mod streaks;

pub use config::EngineConfig;
pub use level::{
    can_access, level_from_total_xp, level_info, level_ups_between, unlocked_features,
    xp_for_level, xp_reward, Badge, BadgeCatalog, Feature, LevelInfo, UserAction, MAX_LEVEL,
};
pub use profile::ProfileSnapshot;
pub use queue::{QueueConfig, QueueState, QueuedXpEvent, XpNotification, XpQueue};
pub use streaks::StreakInfo;
