//! Profile completion scoring
//!
//! Five equally weighted checks produce a 0-100 percentage. The score
//! feeds the feature gates: high-trust features require a filled-out
//! profile, not just levels.

use serde::{Deserialize, Serialize};

/// The profile fields that count toward completion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Count of portfolio items on the profile
    #[serde(default)]
    pub portfolio_items: u32,
}

impl ProfileSnapshot {
    /// Completion percentage, 0-100.
    ///
    /// Counts: non-blank display name, avatar set, bio of at least 20
    /// characters, at least one skill, at least one portfolio item.
    pub fn completion_percent(&self) -> u8 {
        let mut completed = 0u8;

        if self
            .display_name
            .as_deref()
            .is_some_and(|n| !n.trim().is_empty())
        {
            completed += 1;
        }
        if self.avatar_url.is_some() {
            completed += 1;
        }
        if self.bio.as_deref().is_some_and(|b| b.trim().len() >= 20) {
            completed += 1;
        }
        if !self.skills.is_empty() {
            completed += 1;
        }
        if self.portfolio_items > 0 {
            completed += 1;
        }

        completed * 20
    }
}
