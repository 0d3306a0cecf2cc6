use crate::career::ScoringConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding store.json (defaults to the config directory)
    #[serde(default)]
    pub data_dir: Option<String>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
