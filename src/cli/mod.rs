//! CLI command implementations

pub mod badges;
pub mod features;
pub mod level;
pub mod reward;
pub mod simulate;
