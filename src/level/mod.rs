//! Level calculator: curve, badges, rewards, and feature gates
//!
//! Everything here is pure and total: out-of-domain inputs are clamped
//! rather than erroring, so a bad upstream XP value can never break the
//! caller.

mod badges;
mod curve;
mod features;
mod rewards;

pub use badges::{Badge, BadgeCatalog, BadgeDef};
pub use curve::{
    level_from_total_xp, level_info, level_ups_between, xp_for_level, LevelInfo, MAX_LEVEL,
};
pub use features::{can_access, unlocked_features, Feature, UnknownFeature};
pub use rewards::{xp_reward, xp_reward_for_tag, UnknownAction, UserAction};
