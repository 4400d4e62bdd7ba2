//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.menuboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::StartScreen;
use crate::core::price::CurrencyLocale;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub currency_locale: Option<String>,
    pub start_screen: Option<StartScreen>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

pub const ENV_BASE_URL: &str = "MENUBOARD_BASE_URL";
pub const ENV_CURRENCY_LOCALE: &str = "MENUBOARD_CURRENCY_LOCALE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub currency_locale: CurrencyLocale,
    pub start_screen: StartScreen,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub currency_locale: Option<String>,
    pub start_screen: Option<StartScreen>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menuboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menuboard").join("config.toml"))
}

/// Load config from `~/.menuboard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MenuboardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MenuboardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenuboardConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<MenuboardConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(MenuboardConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MenuboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Menuboard Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:3333"   # Or set MENUBOARD_BASE_URL env var

# [display]
# currency_locale = "en-US"            # "en-US", "pt-BR", "en-GB", "de-DE"
# start_screen = "dashboard"           # "dashboard" or "orders"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MenuboardConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup supplied by the caller.
pub fn resolve_with_env(
    config: &MenuboardConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env(ENV_BASE_URL))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Locale: CLI → env → config → default, unknown tags fall back
    let currency_locale = cli
        .currency_locale
        .clone()
        .or_else(|| env(ENV_CURRENCY_LOCALE))
        .or_else(|| config.display.currency_locale.clone())
        .map(|tag| match CurrencyLocale::parse(&tag) {
            Some(locale) => locale,
            None => {
                warn!(
                    "Unknown currency locale '{}', falling back to {}",
                    tag,
                    CurrencyLocale::default().tag()
                );
                CurrencyLocale::default()
            }
        })
        .unwrap_or_default();

    let start_screen = cli
        .start_screen
        .or(config.display.start_screen)
        .unwrap_or_default();

    ResolvedConfig {
        base_url,
        currency_locale,
        start_screen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = MenuboardConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.display.currency_locale.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&MenuboardConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.currency_locale, CurrencyLocale::EnUs);
        assert_eq!(resolved.start_screen, StartScreen::Dashboard);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MenuboardConfig {
            api: ApiConfig {
                base_url: Some("http://10.0.2.2:3333".to_string()),
            },
            display: DisplayConfig {
                currency_locale: Some("pt-BR".to_string()),
                start_screen: Some(StartScreen::Orders),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, "http://10.0.2.2:3333");
        assert_eq!(resolved.currency_locale, CurrencyLocale::PtBr);
        assert_eq!(resolved.start_screen, StartScreen::Orders);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = MenuboardConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_BASE_URL, "http://from-env"),
            (ENV_CURRENCY_LOCALE, "de_DE"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.currency_locale, CurrencyLocale::DeDe);

        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            currency_locale: Some("en-GB".to_string()),
            start_screen: None,
        };
        let resolved = resolve_with_env(&config, &cli, lookup);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.currency_locale, CurrencyLocale::EnGb);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        let cli = CliOverrides {
            currency_locale: Some("xx-YY".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&MenuboardConfig::default(), &cli, no_env);
        assert_eq!(resolved.currency_locale, CurrencyLocale::default());
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[api]
base_url = "http://192.168.1.100:3333"

[display]
currency_locale = "pt-BR"
start_screen = "orders"
"#;
        let config: MenuboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://192.168.1.100:3333")
        );
        assert_eq!(config.display.currency_locale.as_deref(), Some("pt-BR"));
        assert_eq!(config.display.start_screen, Some(StartScreen::Orders));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
currency_locale = "en-GB"
"#;
        let config: MenuboardConfig = toml::from_str(toml_str).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.display.start_screen.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("menuboard-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.api.base_url.is_none());

        // The generated file is all comments, so it loads back as defaults.
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# base_url"));
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.display.currency_locale.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("menuboard-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
