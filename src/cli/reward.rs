//! Reward command implementation

use anyhow::Result;

use xp_engine::level::{xp_reward, UserAction};

/// Print the XP reward for an action tag
pub async fn reward_command(action: &str, quality: Option<u8>) -> Result<()> {
    let action: UserAction = action.parse()?;
    let amount = xp_reward(action, quality);

    match quality {
        Some(score) if action.is_verification() => {
            println!("{} (quality {}): +{} XP", action, score, amount);
        }
        _ => println!("{}: +{} XP", action, amount),
    }

    Ok(())
}
