use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Career area suggested by the quiz.
///
/// The variant order is the declared category order. Tallies are indexed by
/// it and ties are broken by it, so reordering variants changes results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CareerCategory {
    #[serde(rename = "software")]
    Software,
    #[serde(rename = "ux")]
    UxDesign,
    #[serde(rename = "data")]
    DataScience,
    #[serde(rename = "gestao")]
    ProjectManagement,
}

impl CareerCategory {
    pub const COUNT: usize = 4;

    /// All categories in declared order
    pub const ALL: [CareerCategory; Self::COUNT] = [
        CareerCategory::Software,
        CareerCategory::UxDesign,
        CareerCategory::DataScience,
        CareerCategory::ProjectManagement,
    ];

    /// Position in the declared order
    pub fn index(self) -> usize {
        match self {
            CareerCategory::Software => 0,
            CareerCategory::UxDesign => 1,
            CareerCategory::DataScience => 2,
            CareerCategory::ProjectManagement => 3,
        }
    }

    /// Short key used in option keys (`q1_software`) and config files
    pub fn key(self) -> &'static str {
        match self {
            CareerCategory::Software => "software",
            CareerCategory::UxDesign => "ux",
            CareerCategory::DataScience => "data",
            CareerCategory::ProjectManagement => "gestao",
        }
    }

    /// Human label, also the form persisted as the career result
    pub fn label(self) -> &'static str {
        match self {
            CareerCategory::Software => "Engenharia de Software",
            CareerCategory::UxDesign => "UX/UI Design",
            CareerCategory::DataScience => "Data Science",
            CareerCategory::ProjectManagement => "Gestão de Projetos",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == label.to_lowercase())
    }
}

impl fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CareerCategory {
    type Err = String;

    /// Accepts either the key or the label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
            .or_else(|| Self::from_label(s))
            .ok_or_else(|| {
                let keys: Vec<&str> = Self::ALL.iter().map(|c| c.key()).collect();
                format!("unknown category '{}' (expected one of: {})", s, keys.join(", "))
            })
    }
}
