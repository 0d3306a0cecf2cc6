use super::category::CareerCategory;
use super::config::ScoringConfig;
use crate::quiz::questions::{Question, QUESTIONS};
use std::collections::HashMap;

/// Static mapping from option key to the category it votes for.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTable {
    entries: HashMap<String, CareerCategory>,
}

impl ScoringTable {
    /// Empty table; every key is unmapped
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Table for the built-in question catalogue
    pub fn default_catalogue() -> Self {
        Self::from_questions(QUESTIONS)
    }

    /// Build the table from the categories declared on each question option
    pub fn from_questions(questions: &[Question]) -> Self {
        let entries = questions
            .iter()
            .flat_map(|q| q.options.iter())
            .map(|opt| (opt.key.to_string(), opt.category))
            .collect();
        Self { entries }
    }

    /// Catalogue table with config overrides applied.
    ///
    /// Overrides whose category does not parse are skipped; `validate_scoring`
    /// reports them at startup.
    pub fn with_overrides(config: &ScoringConfig) -> Self {
        let mut table = Self::default_catalogue();
        for (key, category) in &config.overrides {
            if let Ok(category) = category.parse::<CareerCategory>() {
                table.insert(key.trim(), category);
            }
        }
        table
    }

    /// Map `key` to `category`, returning the previous mapping if any
    pub fn insert(&mut self, key: &str, category: CareerCategory) -> Option<CareerCategory> {
        self.entries.insert(key.to_string(), category)
    }

    pub fn category_for(&self, key: &str) -> Option<CareerCategory> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_catalogue_table_covers_every_option() {
        let table = ScoringTable::from_questions(QUESTIONS);
        assert_eq!(table.len(), 32);
        assert_eq!(table.category_for("q1_software"), Some(CareerCategory::Software));
        assert_eq!(table.category_for("q8_gestao"), Some(CareerCategory::ProjectManagement));
        assert_eq!(table.category_for("q4_ux"), Some(CareerCategory::UxDesign));
        assert_eq!(table.category_for("q5_data"), Some(CareerCategory::DataScience));
        assert_eq!(table.category_for("q9_software"), None);
    }

    #[test]
    fn test_overrides_add_and_remap() {
        let mut overrides = BTreeMap::new();
        overrides.insert("q1_software".to_string(), "data".to_string());
        overrides.insert("bonus".to_string(), "UX/UI Design".to_string());
        overrides.insert("broken".to_string(), "nope".to_string());

        let table = ScoringTable::with_overrides(&ScoringConfig { overrides });

        assert_eq!(table.category_for("q1_software"), Some(CareerCategory::DataScience));
        assert_eq!(table.category_for("bonus"), Some(CareerCategory::UxDesign));
        assert_eq!(table.category_for("broken"), None);
        assert_eq!(table.len(), 33);
    }

    #[test]
    fn test_empty_table() {
        let table = ScoringTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.category_for("q1_software"), None);
    }
}
