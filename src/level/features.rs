//! Feature gating by level and profile completion
//!
//! Each feature requires BOTH a minimum level and a minimum profile
//! completion percentage. The dual gate keeps users from grinding levels
//! into high-trust features without giving counterparties enough profile
//! information to judge them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A gated marketplace feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    XpChallenges,
    OutputSubmission,
    MoneyBounties,
    HireApplications,
    HireTaskCreation,
}

/// Unknown feature tag
#[derive(Debug, thiserror::Error)]
#[error("unknown feature: {0}")]
pub struct UnknownFeature(String);

impl Feature {
    /// Minimum level and minimum profile completion percent, both required
    pub fn requirement(&self) -> (u32, u8) {
        match self {
            Self::XpChallenges => (1, 0),
            Self::OutputSubmission => (1, 0),
            Self::MoneyBounties => (2, 60),
            Self::HireApplications => (3, 70),
            Self::HireTaskCreation => (5, 80),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XpChallenges => "xp_challenges",
            Self::OutputSubmission => "output_submission",
            Self::MoneyBounties => "money_bounties",
            Self::HireApplications => "hire_applications",
            Self::HireTaskCreation => "hire_task_creation",
        }
    }

    /// All features, in unlock order
    pub fn all() -> &'static [Feature] {
        &[
            Self::XpChallenges,
            Self::OutputSubmission,
            Self::MoneyBounties,
            Self::HireApplications,
            Self::HireTaskCreation,
        ]
    }
}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::all()
            .iter()
            .find(|f| f.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All features unlocked at a level and profile completion percentage
pub fn unlocked_features(level: u32, profile_completion: u8) -> Vec<Feature> {
    Feature::all()
        .iter()
        .copied()
        .filter(|f| can_access(*f, level, profile_completion))
        .collect()
}

/// Whether a single feature is accessible
pub fn can_access(feature: Feature, level: u32, profile_completion: u8) -> bool {
    let (min_level, min_completion) = feature.requirement();
    level >= min_level && profile_completion >= min_completion
}
