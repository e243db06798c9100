use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Runtime switches for the top bar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Development builds navigate client-side after logout so stored
    /// state survives for debugging. Production does a full page load.
    pub dev: bool,
    pub sort_search_by_distance: bool,
    pub max_mobile_screen_width: u32,
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dev: cfg!(debug_assertions),
            sort_search_by_distance: false,
            max_mobile_screen_width: 768,
            api_base_url: "/api".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the `TOPBAR_CONFIG` JSON baked in at build time, falling back to
    /// defaults when it is missing or broken.
    pub fn load() -> Self {
        match option_env!("TOPBAR_CONFIG") {
            Some(json) => Self::from_json(json).unwrap_or_else(|err| {
                tracing::warn!("falling back to default config: {}", err);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_mobile_screen_width == 0 {
            return Err(ConfigError::Invalid {
                field: "maxMobileScreenWidth",
                reason: "must be positive",
            });
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "apiBaseUrl",
                reason: "must not be empty",
            });
        }
        Ok(())
    }

    pub fn is_mobile_layout(&self, viewport_width: u32) -> bool {
        viewport_width < self.max_mobile_screen_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"sortSearchByDistance": true}"#).expect("Failed to parse config");
        assert!(config.sort_search_by_distance);
        assert_eq!(config.max_mobile_screen_width, 768);
        assert_eq!(config.api_base_url, "/api");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            Config::from_json(r#"{"maxMobileScreenWidth": 0}"#),
            Err(ConfigError::Invalid { field: "maxMobileScreenWidth", .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{"apiBaseUrl": " "}"#),
            Err(ConfigError::Invalid { field: "apiBaseUrl", .. })
        ));
        assert!(matches!(Config::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_mobile_breakpoint_is_exclusive() {
        let config = Config::default();
        assert!(config.is_mobile_layout(767));
        assert!(!config.is_mobile_layout(768));
    }
}
