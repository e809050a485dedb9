//! JSON configuration for the CLI.
//!
//! Configuration is glue around the core: the engine itself never touches
//! the filesystem. The CLI loads a [`Config`] once at startup and passes
//! its values into the command constructors explicitly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::PrattleError;

/// Parameters the CLI needs to assemble its dispatcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Links handed to the new-hires command. Absent means the command
    /// replies that no information is available.
    #[serde(default)]
    pub new_hire_links: Option<Vec<String>>,
    /// Overrides the dispatcher's fallback reply.
    #[serde(default)]
    pub fallback: Option<String>,
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PrattleError> {
        let raw = fs::read_to_string(path).map_err(|cause| PrattleError::Config {
            path: path.display().to_string(),
            cause: Box::new(cause),
        })?;

        serde_json::from_str(&raw).map_err(|cause| PrattleError::Config {
            path: path.display().to_string(),
            cause: Box::new(cause),
        })
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn deserializes_a_full_config() {
        let config: Config = serde_json::from_str(
            r#"{
                "new_hire_links": ["https://example.com/handbook"],
                "fallback": "sorry, what?"
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.new_hire_links,
            Some(vec!["https://example.com/handbook".to_string()])
        );
        assert_eq!(config.fallback.as_deref(), Some("sorry, what?"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.new_hire_links.is_none());
        assert!(config.fallback.is_none());
    }

    #[test]
    fn load_reports_a_config_error_for_a_missing_file() {
        let err = Config::load(Path::new("does/not/exist.json")).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }
}
