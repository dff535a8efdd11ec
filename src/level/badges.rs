//! Badge catalog and unlock state
//!
//! The catalog is an immutable table injected at construction so tests can
//! substitute alternate catalogs; it is not a runtime-mutable global.

use serde::{Deserialize, Serialize};

/// A badge definition: what it is and the level that unlocks it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDef {
    pub id: String,
    pub name: String,
    /// Level at which the badge unlocks
    pub level: u32,
    pub emoji: String,
}

/// A badge with its unlock state resolved against a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub emoji: String,
    pub unlocked: bool,
}

/// Immutable badge catalog, ordered by unlock level
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    entries: Vec<BadgeDef>,
}

impl BadgeCatalog {
    /// Build a catalog from explicit definitions
    pub fn new(entries: Vec<BadgeDef>) -> Self {
        Self { entries }
    }

    /// Badge definitions in catalog order
    pub fn entries(&self) -> &[BadgeDef] {
        &self.entries
    }

    /// The full catalog with each badge's unlock state computed against
    /// the given level. No side effects; safe to call repeatedly.
    pub fn badges_for_level(&self, level: u32) -> Vec<Badge> {
        self.entries
            .iter()
            .map(|def| Badge {
                id: def.id.clone(),
                name: def.name.clone(),
                level: def.level,
                emoji: def.emoji.clone(),
                unlocked: level >= def.level,
            })
            .collect()
    }
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        fn def(id: &str, name: &str, level: u32, emoji: &str) -> BadgeDef {
            BadgeDef {
                id: id.to_string(),
                name: name.to_string(),
                level,
                emoji: emoji.to_string(),
            }
        }

        Self::new(vec![
            def("novice", "Novice", 1, "\u{1F95A}"),
            def("beginner", "Beginner Tester", 5, "\u{1F331}"),
            def("intermediate", "Intermediate Tester", 10, "\u{2B50}"),
            def("advanced", "Advanced Tester", 15, "\u{1F525}"),
            def("expert", "Expert Tester", 20, "\u{1F48E}"),
            def("master", "Master Tester", 50, "\u{1F451}"),
            def("legend", "Legendary Tester", 100, "\u{1F3C6}"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_unlock_state() {
        let catalog = BadgeCatalog::default();
        let badges = catalog.badges_for_level(20);
        assert_eq!(badges.len(), 7);
        for badge in &badges {
            assert_eq!(
                badge.unlocked,
                badge.level <= 20,
                "wrong unlock state for {}",
                badge.id
            );
        }
        let unlocked: Vec<_> = badges.iter().filter(|b| b.unlocked).collect();
        assert_eq!(unlocked.len(), 5);
    }

    #[test]
    fn test_level_one_unlocks_first_badge_only() {
        let badges = BadgeCatalog::default().badges_for_level(1);
        assert!(badges[0].unlocked);
        assert!(badges[1..].iter().all(|b| !b.unlocked));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = BadgeCatalog::new(vec![BadgeDef {
            id: "solo".to_string(),
            name: "Solo".to_string(),
            level: 3,
            emoji: "\u{1F3AF}".to_string(),
        }]);
        assert!(!catalog.badges_for_level(2)[0].unlocked);
        assert!(catalog.badges_for_level(3)[0].unlocked);
    }
}
