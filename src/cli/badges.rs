//! Badges command implementation

use anyhow::Result;

use xp_engine::level::BadgeCatalog;
use xp_engine::EngineConfig;

/// Print the badge catalog with unlock state at the given level
pub async fn badges_command(config: &EngineConfig, level: u32) -> Result<()> {
    let catalog = match &config.badges {
        Some(defs) => BadgeCatalog::new(defs.clone()),
        None => BadgeCatalog::default(),
    };

    for badge in catalog.badges_for_level(level) {
        let marker = if badge.unlocked { "x" } else { " " };
        println!(
            "[{}] {} {} (level {})",
            marker, badge.emoji, badge.name, badge.level
        );
    }

    Ok(())
}
