//! XP rewards for user actions
//!
//! Fixed amounts per action, except output verification which is tiered
//! by the reviewer's quality score.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reward for a verification with quality score >= 8
const VERIFIED_HIGH_XP: u64 = 50;
/// Reward for a verification with quality score 5-7
const VERIFIED_MEDIUM_XP: u64 = 30;
/// Reward for a verification with quality score below 5
const VERIFIED_LOW_XP: u64 = 10;

/// An action that earns XP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    OnboardingComplete,
    OnboardingStep,
    OutputSubmitted,
    OutputVerifiedHigh,
    OutputVerifiedMedium,
    OutputVerifiedLow,
    HireTaskCompleted,
    HireTaskRatedPositive,
    PortfolioItemAdded,
    WeeklyStreak,
    FirstOutput,
    ProfileCompleted,
}

/// Unknown action tag on the wire
#[derive(Debug, thiserror::Error)]
#[error("unknown user action: {0}")]
pub struct UnknownAction(String);

impl UserAction {
    /// String tag used on the wire and in the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnboardingComplete => "onboarding_complete",
            Self::OnboardingStep => "onboarding_step",
            Self::OutputSubmitted => "output_submitted",
            Self::OutputVerifiedHigh => "output_verified_high",
            Self::OutputVerifiedMedium => "output_verified_medium",
            Self::OutputVerifiedLow => "output_verified_low",
            Self::HireTaskCompleted => "hire_task_completed",
            Self::HireTaskRatedPositive => "hire_task_rated_positive",
            Self::PortfolioItemAdded => "portfolio_item_added",
            Self::WeeklyStreak => "weekly_streak",
            Self::FirstOutput => "first_output",
            Self::ProfileCompleted => "profile_completed",
        }
    }

    /// Whether this action's reward is tiered by quality score
    pub fn is_verification(&self) -> bool {
        matches!(
            self,
            Self::OutputVerifiedHigh | Self::OutputVerifiedMedium | Self::OutputVerifiedLow
        )
    }

    /// All actions
    pub fn all() -> &'static [UserAction] {
        &[
            Self::OnboardingComplete,
            Self::OnboardingStep,
            Self::OutputSubmitted,
            Self::OutputVerifiedHigh,
            Self::OutputVerifiedMedium,
            Self::OutputVerifiedLow,
            Self::HireTaskCompleted,
            Self::HireTaskRatedPositive,
            Self::PortfolioItemAdded,
            Self::WeeklyStreak,
            Self::FirstOutput,
            Self::ProfileCompleted,
        ]
    }
}

impl FromStr for UserAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserAction::all()
            .iter()
            .find(|a| a.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl std::fmt::Display for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// XP awarded for an action.
///
/// Verification actions branch on the quality score when one is provided
/// (>= 8 high, >= 5 medium, else low); a missing score counts as 0.
pub fn xp_reward(action: UserAction, quality_score: Option<u8>) -> u64 {
    if action.is_verification() {
        return match quality_score.unwrap_or(0) {
            8.. => VERIFIED_HIGH_XP,
            5..=7 => VERIFIED_MEDIUM_XP,
            _ => VERIFIED_LOW_XP,
        };
    }

    match action {
        UserAction::OnboardingComplete => 100,
        UserAction::OnboardingStep => 25,
        UserAction::OutputSubmitted => 10,
        UserAction::HireTaskCompleted => 75,
        UserAction::HireTaskRatedPositive => 25,
        UserAction::PortfolioItemAdded => 20,
        UserAction::WeeklyStreak => 50,
        UserAction::FirstOutput => 50,
        UserAction::ProfileCompleted => 50,
        // Already handled above; unreachable tiers keep the match total
        UserAction::OutputVerifiedHigh => VERIFIED_HIGH_XP,
        UserAction::OutputVerifiedMedium => VERIFIED_MEDIUM_XP,
        UserAction::OutputVerifiedLow => VERIFIED_LOW_XP,
    }
}

/// XP awarded for a raw action tag. Unknown tags earn 0 rather than
/// erroring, so upstream data glitches never break the caller.
pub fn xp_reward_for_tag(tag: &str, quality_score: Option<u8>) -> u64 {
    match tag.parse::<UserAction>() {
        Ok(action) => xp_reward(action, quality_score),
        Err(_) => {
            tracing::debug!(tag, "unknown action tag, awarding 0 XP");
            0
        }
    }
}
