//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory when
//! present, then applies `GREET_GREETING` and `GREET_LOG_LEVEL` env overrides.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::{error::AppError, greeting::Greeting};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Fully-resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Greeting used when the command line does not pick one.
    pub greeting: Greeting,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: Greeting::default(),
            log_level: default_log_level(),
        }
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    greet: RawGreet,
}

#[derive(Deserialize)]
struct RawGreet {
    #[serde(default)]
    greeting: Greeting,
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawGreet {
    fn default() -> Self {
        Self {
            greeting: Greeting::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Load config from `config/default.toml` (if it exists), then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let greeting_override = env::var("GREET_GREETING").ok();
    let log_level_override = env::var("GREET_LOG_LEVEL").ok();
    let path = Path::new(DEFAULT_CONFIG_PATH);

    if path.exists() {
        load_from(path, greeting_override.as_deref(), log_level_override.as_deref())
    } else {
        resolve(RawConfig::default(), greeting_override.as_deref(), log_level_override.as_deref())
    }
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    greeting_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    resolve(parsed, greeting_override, log_level_override)
}

fn resolve(
    parsed: RawConfig,
    greeting_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let g = parsed.greet;

    let greeting = match greeting_override {
        Some(s) => s
            .parse::<Greeting>()
            .map_err(|e| AppError::Config(format!("GREET_GREETING: {e}")))?,
        None => g.greeting,
    };
    let log_level = log_level_override.unwrap_or(&g.log_level).to_string();

    Ok(Config { greeting, log_level })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_TOML: &str = r#"
[greet]
greeting = "goodbye"
log_level = "debug"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_full_config() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.greeting, Greeting::Goodbye);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn empty_file_uses_defaults() {
        let f = write_toml("");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.greeting, Greeting::Hello);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn partial_section_fills_defaults() {
        let f = write_toml("[greet]\nlog_level = \"info\"\n");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.greeting, Greeting::Hello);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn unknown_greeting_in_file_errors() {
        let f = write_toml("[greet]\ngreeting = \"howdy\"\n");
        let msg = load_from(f.path(), None, None).unwrap_err().to_string();
        assert!(msg.contains("config error"));
        assert!(msg.contains("parse error"));
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None, None);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
        assert!(msg.contains("cannot read"));
    }

    #[test]
    fn env_greeting_override() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), Some("HELLO"), None).unwrap();
        assert_eq!(cfg.greeting, Greeting::Hello);
    }

    #[test]
    fn bad_greeting_override_errors() {
        let f = write_toml(FULL_TOML);
        let err = load_from(f.path(), Some("howdy"), None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("GREET_GREETING"));
    }

    #[test]
    fn env_log_level_override() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), None, Some("trace")).unwrap();
        assert_eq!(cfg.log_level, "trace");
    }
}
