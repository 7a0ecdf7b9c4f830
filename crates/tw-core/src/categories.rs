//! # Category Registry
//!
//! The fixed, ordered list of topic categories. Order matters: the first
//! entries are shown as featured cards, and the very first one doubles as
//! the fallback for names that are not in the registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Topic;

/// A named classification bucket with its display hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub style: &'static str,
}

pub static CATEGORIES: [Category; 7] = [
    Category { name: "Helper", icon: "Shield", style: "blue" },
    Category { name: "YouTuber", icon: "Video", style: "red" },
    Category { name: "TikToker", icon: "Music", style: "purple" },
    Category { name: "Жалоба на персонал", icon: "AlertTriangle", style: "orange" },
    Category { name: "Жалоба на игроков", icon: "UserX", style: "yellow" },
    Category { name: "Баги", icon: "Bug", style: "green" },
    Category { name: "Идеи", icon: "Lightbulb", style: "cyan" },
];

/// Exact-match lookup.
pub fn find(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Looks a category up by name, falling back to the first registry entry.
pub fn resolve(name: &str) -> &'static Category {
    find(name).unwrap_or_else(|| {
        log::debug!("unknown category {:?}, using default", name);
        &CATEGORIES[0]
    })
}

/// The first `n` categories (the featured group).
pub fn featured(n: usize) -> &'static [Category] {
    &CATEGORIES[..n.min(CATEGORIES.len())]
}

/// Everything after the featured group.
pub fn remaining(n: usize) -> &'static [Category] {
    &CATEGORIES[n.min(CATEGORIES.len())..]
}

/// Topic list filter: everything, or a single category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn only(name: impl Into<String>) -> Self {
        CategoryFilter::Only(name.into())
    }

    pub fn matches(&self, topic: &Topic) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => topic.category == *name,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == Self::ALL {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL),
            CategoryFilter::Only(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unknown_falls_back_to_first() {
        assert_eq!(resolve("NonexistentCategory"), resolve(CATEGORIES[0].name));
        assert_eq!(resolve("Баги").icon, "Bug");
    }

    #[test]
    fn test_display_groups_partition_registry() {
        let head = featured(4);
        let rest = remaining(4);
        assert_eq!(head.len(), 4);
        assert_eq!(rest.len(), 3);
        assert_eq!(rest[0].name, "Жалоба на игроков");
        assert!(remaining(99).is_empty());
        assert_eq!(featured(99).len(), CATEGORIES.len());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(" ".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Идеи".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::only("Идеи")
        );
        assert_eq!(CategoryFilter::only("Баги").to_string(), "Баги");
    }
}
