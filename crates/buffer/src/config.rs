// Chunk: docs/chunks/area_config - Host configuration flags

//! Host-supplied configuration flags.
//!
//! Neither flag changes how edits are applied. `editable` tells the host
//! whether to route user input to the area (API calls always apply);
//! `wrap_text` is a rendering hint passed through untouched.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    /// Whether the host should route user input to the area.
    pub editable: bool,
    /// Whether long paragraphs should wrap when rendered.
    pub wrap_text: bool,
}

impl AreaConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use codearea_buffer::AreaConfig;
    ///
    /// let config = AreaConfig::from_json(r#"{ "wrap_text": true }"#).unwrap();
    /// assert!(config.editable);
    /// assert!(config.wrap_text);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            editable: true,
            wrap_text: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AreaConfig::default();
        assert!(config.editable);
        assert!(!config.wrap_text);
    }

    #[test]
    fn test_from_empty_object_uses_defaults() {
        assert_eq!(AreaConfig::from_json("{}").unwrap(), AreaConfig::default());
    }

    #[test]
    fn test_from_json_full() {
        let config = AreaConfig::from_json(r#"{"editable": false, "wrap_text": true}"#).unwrap();
        assert_eq!(
            config,
            AreaConfig {
                editable: false,
                wrap_text: true
            }
        );
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            AreaConfig::from_json(r#"{"editable": "yes"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = AreaConfig {
            editable: false,
            wrap_text: true,
        };
        let json = config.to_json().unwrap();
        assert_eq!(AreaConfig::from_json(&json).unwrap(), config);
    }
}
