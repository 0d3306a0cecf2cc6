use super::category::CareerCategory;
use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (key, category) in &config.overrides {
        if key.trim().is_empty() {
            errors.push("scoring.overrides: option key must not be empty".to_string());
        }
        if let Err(e) = category.parse::<CareerCategory>() {
            errors.push(format!("scoring.overrides.{}: {}", key, e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
