use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Output format for rank/compare: "text" or "json"
    pub format: String,
    /// Default JSONL file evaluation records are written to
    pub log: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub format: ValueSource,
    pub log: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            format: ValueSource::Default,
            log: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: "text".into(),
            log: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    format: Option<String>,
    log: Option<String>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration with per-key source tracking. Precedence:
/// defaults, then the TOML file named by `SHOWDOWN_CONFIG`, then the
/// `SHOWDOWN_FORMAT`/`SHOWDOWN_LOG` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SHOWDOWN_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.log {
            cfg.log = Some(v);
            sources.log = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("SHOWDOWN_FORMAT")
        && !v.is_empty()
    {
        cfg.format = v;
        sources.format = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("SHOWDOWN_LOG")
        && !v.is_empty()
    {
        cfg.log = Some(v);
        sources.log = ValueSource::Env;
    }

    if cfg.format != "text" && cfg.format != "json" {
        return Err(ConfigError::Invalid(format!(
            "unknown output format: {}",
            cfg.format
        )));
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}
