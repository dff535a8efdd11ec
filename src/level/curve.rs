//! Level progression curve
//!
//! XP thresholds follow a piecewise quadratic: early levels are cheap,
//! late levels expensive, without needing a lookup table.
//! - Levels 1-5:   50 * level^2
//! - Levels 6-15:  100 * level^2
//! - Levels 16+:   150 * level^2

use serde::Serialize;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 100;

/// Total XP required to reach a level.
///
/// Levels <= 0 return 0; levels above [`MAX_LEVEL`] are clamped to the
/// level-100 threshold. Never panics.
pub fn xp_for_level(level: u32) -> u64 {
    if level == 0 {
        return 0;
    }
    let level = level.min(MAX_LEVEL) as u64;
    let sq = level * level;
    if level <= 5 {
        50 * sq
    } else if level <= 15 {
        100 * sq
    } else {
        150 * sq
    }
}

/// Calculate the level for a total XP count.
///
/// Binary search over 1..=100; `xp_for_level` is non-decreasing so the
/// search is valid. Negative XP (bad upstream data) is clamped to 0,
/// and the result is capped at [`MAX_LEVEL`].
pub fn level_from_total_xp(total_xp: i64) -> u32 {
    if total_xp < 0 {
        tracing::debug!(total_xp, "negative total XP clamped to 0");
    }
    let xp = total_xp.max(0) as u64;

    let mut low = 1u32;
    let mut high = MAX_LEVEL;

    while low <= high {
        let mid = (low + high) / 2;
        if xp >= xp_for_level(mid) {
            if mid == MAX_LEVEL || xp < xp_for_level(mid + 1) {
                return mid;
            }
            low = mid + 1;
        } else {
            if mid == 1 {
                break;
            }
            high = mid - 1;
        }
    }

    1
}

/// Complete level descriptor derived from a total XP count.
///
/// Computed on demand; never persisted. Recompute whenever the
/// authoritative XP total changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelInfo {
    pub level: u32,
    /// Total XP needed to reach the current level
    pub xp_for_current_level: u64,
    /// Total XP needed to reach the next level (equals current at the cap)
    pub xp_for_next_level: u64,
    pub xp_in_current_level: u64,
    /// XP remaining until the next level (0 at the cap)
    pub xp_to_next: u64,
    /// Progress through the current level, 0.0 to 1.0
    pub progress: f64,
}

/// Populate a full [`LevelInfo`] for a total XP count.
pub fn level_info(total_xp: i64) -> LevelInfo {
    let xp = total_xp.max(0) as u64;
    let level = level_from_total_xp(total_xp);
    let xp_for_current_level = xp_for_level(level);

    // At the cap there is no further threshold; report progress as done
    // instead of dividing by zero.
    if level >= MAX_LEVEL {
        return LevelInfo {
            level: MAX_LEVEL,
            xp_for_current_level,
            xp_for_next_level: xp_for_current_level,
            xp_in_current_level: xp.saturating_sub(xp_for_current_level),
            xp_to_next: 0,
            progress: 1.0,
        };
    }

    let xp_for_next_level = xp_for_level(level + 1);
    let xp_in_current_level = xp.saturating_sub(xp_for_current_level);
    let xp_to_next = xp_for_next_level.saturating_sub(xp);
    let range = xp_for_next_level - xp_for_current_level;
    let progress = if range > 0 {
        (xp_in_current_level as f64 / range as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };

    LevelInfo {
        level,
        xp_for_current_level,
        xp_for_next_level,
        xp_in_current_level,
        xp_to_next,
        progress,
    }
}

/// All level boundaries crossed between an old and a new XP total.
///
/// Returns the levels gained, in ascending order. Empty when no boundary
/// was crossed (including when XP decreased).
pub fn level_ups_between(prev_xp: i64, new_xp: i64) -> Vec<u32> {
    let old_level = level_from_total_xp(prev_xp);
    let new_level = level_from_total_xp(new_xp);
    if new_level <= old_level {
        return Vec::new();
    }
    (old_level + 1..=new_level).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_level_tiers() {
        assert_eq!(xp_for_level(5), 1250); // 50 * 25
        assert_eq!(xp_for_level(6), 3600); // 100 * 36
        assert_eq!(xp_for_level(16), 38400); // 150 * 256
    }

    #[test]
    fn test_xp_for_level_out_of_domain() {
        assert_eq!(xp_for_level(0), 0);
        // Clamped to the level-100 threshold
        assert_eq!(xp_for_level(101), xp_for_level(100));
        assert_eq!(xp_for_level(100), 1_500_000);
    }

    #[test]
    fn test_xp_for_level_monotonic() {
        for level in 1..MAX_LEVEL {
            assert!(
                xp_for_level(level) <= xp_for_level(level + 1),
                "curve not monotonic at level {}",
                level
            );
        }
    }

    #[test]
    fn test_level_from_total_xp_boundaries() {
        assert_eq!(level_from_total_xp(0), 1);
        assert_eq!(level_from_total_xp(1249), 4);
        assert_eq!(level_from_total_xp(1250), 5);
        assert_eq!(level_from_total_xp(-50), 1);
    }

    #[test]
    fn test_level_from_total_xp_cap() {
        assert_eq!(level_from_total_xp(1_500_000), 100);
        assert_eq!(level_from_total_xp(999_999_999), 100);
    }

    #[test]
    fn test_level_from_total_xp_consistent_with_curve() {
        // Greatest level whose threshold is <= the total, tight on both sides
        for total in [0i64, 49, 50, 199, 1250, 3599, 3600, 40000, 1_499_999] {
            let level = level_from_total_xp(total);
            assert!(xp_for_level(level) <= total.max(0) as u64 || level == 1);
            if level < MAX_LEVEL {
                assert!((total.max(0) as u64) < xp_for_level(level + 1));
            }
        }
    }

    #[test]
    fn test_level_info_mid_level() {
        // Level 4 spans 800..1250
        let info = level_info(1025);
        assert_eq!(info.level, 4);
        assert_eq!(info.xp_for_current_level, 800);
        assert_eq!(info.xp_for_next_level, 1250);
        assert_eq!(info.xp_in_current_level, 225);
        assert_eq!(info.xp_to_next, 225);
        assert!((info.progress - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_level_info_progress_in_range() {
        for total in (0i64..200_000).step_by(1337) {
            let info = level_info(total);
            assert!(
                (0.0..=1.0).contains(&info.progress),
                "progress out of range at {}",
                total
            );
        }
    }

    #[test]
    fn test_level_info_at_cap() {
        for total in [1_500_000i64, 2_000_000] {
            let info = level_info(total);
            assert_eq!(info.level, 100);
            assert_eq!(info.xp_for_next_level, info.xp_for_current_level);
            assert_eq!(info.xp_to_next, 0);
            assert_eq!(info.progress, 1.0);
        }
    }

    #[test]
    fn test_level_ups_between() {
        // 1249 XP is level 4, 3600 is level 6
        assert_eq!(level_ups_between(1249, 3600), vec![5, 6]);
        assert_eq!(level_ups_between(100, 150), Vec::<u32>::new());
        assert_eq!(level_ups_between(3600, 1249), Vec::<u32>::new());
    }
}
