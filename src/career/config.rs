use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scoring configuration.
///
/// The scoring table normally comes straight from the question catalogue.
/// `overrides` adds option keys or remaps existing ones to another category.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   overrides:
///     q7_data: software
///     q9_extra: gestao
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Option key -> category key or label
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config_is_empty() {
        let config = ScoringConfig::default();
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_scoring_config_parse() {
        let yaml = r#"
overrides:
  q7_data: software
  q9_extra: "Gestão de Projetos"
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.overrides["q7_data"], "software");
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "weights: 3\n";
        assert!(serde_saphyr::from_str::<ScoringConfig>(yaml).is_err());
    }
}
