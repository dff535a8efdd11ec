//! Features command implementation

use anyhow::Result;

use xp_engine::level::{can_access, Feature};

/// Print each feature with its unlock state at the given level and
/// profile completion
pub async fn features_command(level: u32, profile: u8) -> Result<()> {
    for feature in Feature::all() {
        let (min_level, min_completion) = feature.requirement();
        let marker = if can_access(*feature, level, profile) {
            "x"
        } else {
            " "
        };
        if min_completion > 0 {
            println!(
                "[{}] {} (level {}, profile {}%)",
                marker, feature, min_level, min_completion
            );
        } else {
            println!("[{}] {} (level {})", marker, feature, min_level);
        }
    }

    Ok(())
}
