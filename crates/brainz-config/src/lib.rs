// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// Settings for reaching the MusicBrainz XML web service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicBrainzConfig {
    /// Service root; request paths are appended to it.
    pub base_url: String,
    /// Overrides the built-in User-Agent when set.
    pub user_agent: Option<String>,
    pub timeout_secs: u64,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub musicbrainz: MusicBrainzConfig,
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: BRAINZ_).
pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("BRAINZ_").split("__"));

    let config: AppConfig = figment.extract()?;
    info!(target: "config", base_url = %config.musicbrainz.base_url, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = load(None).map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.musicbrainz.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.musicbrainz.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "brainz.toml",
                r#"
                [musicbrainz]
                base_url = "http://localhost:5000/ws/2"
                user_agent = "tester/1.0 ( tester@example.org )"
                "#,
            )?;

            let config = load(Some(Path::new("brainz.toml")))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config.musicbrainz.base_url, "http://localhost:5000/ws/2");
            assert_eq!(
                config.musicbrainz.user_agent.as_deref(),
                Some("tester/1.0 ( tester@example.org )")
            );
            assert_eq!(config.musicbrainz.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "brainz.toml",
                r#"
                [musicbrainz]
                timeout_secs = 10
                "#,
            )?;
            jail.set_env("BRAINZ_MUSICBRAINZ__TIMEOUT_SECS", "5");

            let config = load(Some(Path::new("brainz.toml")))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config.musicbrainz.timeout_secs, 5);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("BRAINZ_MUSICBRAINZ__TIMEOUT_SECS", "soon");
            assert!(load(None).is_err());
            Ok(())
        });
    }
}
