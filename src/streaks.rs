//! Weekly activity streak tracking
//!
//! Streaks are keyed by ISO week (stored as the Monday of the week) so a
//! user who is active in consecutive weeks keeps the streak alive. The
//! caller grants the weekly-streak XP reward when a streak extends.

use chrono::{Datelike, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Weekly streak state for one user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakInfo {
    pub current: u32,
    pub best: u32,
    /// Monday of the most recent active week, "YYYY-MM-DD"
    pub last_activity_week: Option<String>,
}

impl StreakInfo {
    /// Whether the streak is still alive (activity this week or last week)
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match self.weeks_since(today) {
            Some(weeks) => weeks <= 1,
            None => false,
        }
    }

    /// Whether activity today would extend the streak (not yet counted
    /// this week)
    pub fn can_extend(&self, today: NaiveDate) -> bool {
        match self.weeks_since(today) {
            Some(weeks) => weeks >= 1,
            None => true,
        }
    }

    /// Record activity for today's week.
    ///
    /// Returns the new streak length, or None when this week was already
    /// counted. A gap of more than one week resets the streak to 1.
    pub fn extend(&mut self, today: NaiveDate) -> Option<u32> {
        if !self.can_extend(today) {
            return None;
        }

        self.current = match self.weeks_since(today) {
            Some(1) => self.current + 1,
            _ => 1,
        };
        self.best = self.best.max(self.current);
        self.last_activity_week = Some(week_start(today).format(DATE_FORMAT).to_string());
        Some(self.current)
    }

    /// Whole weeks between the last active week and today's week.
    /// None when there is no recorded activity or the stored date is
    /// unparseable (treated as no activity).
    fn weeks_since(&self, today: NaiveDate) -> Option<i64> {
        let last = self.last_activity_week.as_deref()?;
        let last_date = NaiveDate::parse_from_str(last, DATE_FORMAT).ok()?;
        let days = (week_start(today) - week_start(last_date)).num_days();
        Some(days / 7)
    }
}

/// Monday of the week containing the given date
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_activity_starts_streak() {
        let mut streak = StreakInfo::default();
        assert!(streak.can_extend(date(2025, 3, 12)));
        assert_eq!(streak.extend(date(2025, 3, 12)), Some(1));
        assert_eq!(streak.last_activity_week.as_deref(), Some("2025-03-10"));
    }

    #[test]
    fn test_same_week_counts_once() {
        let mut streak = StreakInfo::default();
        streak.extend(date(2025, 3, 12));
        // Friday of the same ISO week
        assert_eq!(streak.extend(date(2025, 3, 14)), None);
        assert_eq!(streak.current, 1);
    }

    #[test]
    fn test_consecutive_weeks_extend() {
        let mut streak = StreakInfo::default();
        streak.extend(date(2025, 3, 12));
        assert_eq!(streak.extend(date(2025, 3, 17)), Some(2));
        assert_eq!(streak.extend(date(2025, 3, 28)), Some(3));
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn test_gap_resets_to_one() {
        let mut streak = StreakInfo::default();
        streak.extend(date(2025, 3, 12));
        streak.extend(date(2025, 3, 17));
        // Two weeks of silence
        assert_eq!(streak.extend(date(2025, 4, 7)), Some(1));
        assert_eq!(streak.best, 2);
    }

    #[test]
    fn test_is_active_window() {
        let mut streak = StreakInfo::default();
        streak.extend(date(2025, 3, 12));
        assert!(streak.is_active(date(2025, 3, 14)));
        assert!(streak.is_active(date(2025, 3, 19))); // next week
        assert!(!streak.is_active(date(2025, 3, 26))); // two weeks on
    }
}
