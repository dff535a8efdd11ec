//! Level command implementation

use anyhow::Result;

use xp_engine::level::{level_info, MAX_LEVEL};

/// Print the full level descriptor for a total XP count
pub async fn level_command(total_xp: i64) -> Result<()> {
    let info = level_info(total_xp);

    println!("Total XP:  {}", total_xp.max(0));
    println!("Level:     {} / {}", info.level, MAX_LEVEL);
    println!(
        "Threshold: {} -> {}",
        info.xp_for_current_level, info.xp_for_next_level
    );
    if info.level >= MAX_LEVEL {
        println!("Progress:  max level reached");
    } else {
        println!(
            "Progress:  {:.1}% ({} in level, {} to next)",
            info.progress * 100.0,
            info.xp_in_current_level,
            info.xp_to_next
        );
    }

    Ok(())
}
