use std::path::{Path, PathBuf};

use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

use crate::presentation::config::keybindings;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Environment variable that overrides `bearer_token`
pub const BEARER_TOKEN_ENV: &str = "VOICES_BEARER_TOKEN";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub timeline_url: String,
    #[serde(default = "empty_secret", deserialize_with = "deserialize_secret")]
    pub bearer_token: SecretString,
    #[serde(default = "default_avatar_fetch_concurrency")]
    pub avatar_fetch_concurrency: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

fn default_avatar_fetch_concurrency() -> usize {
    4
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            keybindings: keybindings::KeyBindings::default(),
            timeline_url: String::new(),
            bearer_token: empty_secret(),
            avatar_fetch_concurrency: default_avatar_fetch_concurrency(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads the configuration from the platform config directory
    pub fn new() -> Result<Self, ConfigError> {
        let cfg = Self::load(&utils::get_config_dir(), &utils::get_data_dir())?;
        Ok(cfg.with_bearer_token_override(std::env::var(BEARER_TOKEN_ENV).ok()))
    }

    /// Layers user files found in `config_dir` over the embedded defaults.
    /// Missing user files are fine.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }

        if cfg.timeline_url.is_empty() {
            cfg.timeline_url.clone_from(&default_config.timeline_url);
        }
        cfg.avatar_fetch_concurrency = cfg.avatar_fetch_concurrency.max(1);

        Ok(cfg)
    }

    /// Replaces the bearer token when `token` is a non-empty value
    pub fn with_bearer_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            log::debug!("Using bearer token from {BEARER_TOKEN_ENV}");
            self.bearer_token = SecretString::from(token);
        }
        self
    }

    pub fn has_bearer_token(&self) -> bool {
        !self.bearer_token.expose_secret().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::config::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "{}-config-test-{name}-{}",
            env!("CARGO_PKG_NAME"),
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_user_file() {
        let dir = scratch_dir("defaults");

        let cfg = Config::load(&dir, &dir).unwrap();

        assert_eq!(
            cfg.timeline_url,
            "https://api.twitter.com/1.1/statuses/home_timeline.json"
        );
        assert!(!cfg.has_bearer_token());
        assert_eq!(cfg.avatar_fetch_concurrency, 4);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.config._config_dir, dir);
        assert_eq!(
            cfg.keybindings
                .action(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = scratch_dir("user");
        std::fs::write(
            dir.join("config.json5"),
            r#"{
                "bearer_token": "secret",
                "avatar_fetch_concurrency": 0,
                "keybindings": { "<x>": "Quit" },
            }"#,
        )
        .unwrap();

        let cfg = Config::load(&dir, &dir).unwrap();

        assert_eq!(cfg.bearer_token.expose_secret(), "secret");
        assert_eq!(cfg.avatar_fetch_concurrency, 1);
        assert_eq!(
            cfg.keybindings
                .action(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            cfg.keybindings
                .action(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Open)
        );
    }

    #[test]
    fn test_bearer_token_override() {
        let cfg = Config::default();

        let cfg = cfg.with_bearer_token_override(Some("   ".to_string()));
        assert!(!cfg.has_bearer_token());

        let cfg = cfg.with_bearer_token_override(Some("from-env".to_string()));
        assert_eq!(cfg.bearer_token.expose_secret(), "from-env");
    }
}
