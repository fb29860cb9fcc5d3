use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_SCHEME: &str = "http";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DIRECTORY: &str = "podcasts";
const DEFAULT_LOGLEVEL: &str = "INFO";

/// Prefix for environment overrides, e.g. `RSS_SERVER_PORT=9000`.
pub const ENV_PREFIX: &str = "RSS_SERVER_";

/// One partial source of settings: the config file, the environment, or the CLI.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct ConfigLayer {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub directory: Option<PathBuf>,
    pub subfolder: Option<String>,
    pub loglevel: Option<String>,
}

impl ConfigLayer {
    /// Build a layer from `RSS_SERVER_*` variables. Keys are matched case-insensitively
    /// after the prefix; unknown keys are ignored.
    pub fn from_env_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut layer = ConfigLayer::default();
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name.to_ascii_lowercase().as_str() {
                "scheme" => layer.scheme = Some(value),
                "host" => layer.host = Some(value),
                "port" => {
                    let port = value.parse().map_err(|_| ConfigError::InvalidEnv {
                        key: key.clone(),
                        value: value.clone(),
                    })?;
                    layer.port = Some(port);
                }
                "directory" => layer.directory = Some(PathBuf::from(value)),
                "subfolder" => layer.subfolder = Some(value),
                "loglevel" => layer.loglevel = Some(value),
                other => tracing::debug!("Ignoring unknown environment setting {}", other),
            }
        }
        Ok(layer)
    }

    pub fn from_process_env() -> Result<Self, ConfigError> {
        Self::from_env_vars(std::env::vars())
    }

    pub fn from_args(args: &crate::cli::Args) -> Self {
        ConfigLayer {
            scheme: args.scheme.clone(),
            host: args.host.clone(),
            port: args.port,
            directory: args.directory.clone(),
            subfolder: args.subfolder.clone(),
            loglevel: args.loglevel.clone(),
        }
    }

    /// Overlay `self` on top of `lower`: any value set here wins.
    fn over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            scheme: self.scheme.or(lower.scheme),
            host: self.host.or(lower.host),
            port: self.port.or(lower.port),
            directory: self.directory.or(lower.directory),
            subfolder: self.subfolder.or(lower.subfolder),
            loglevel: self.loglevel.or(lower.loglevel),
        }
    }
}

/// Fully resolved settings. Converted into a `ServerIdentity` once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub directory: PathBuf,
    /// Normalised: no leading or trailing `/`. Empty means "mounted at the root".
    pub subfolder: String,
    pub loglevel: String,
}

impl Config {
    /// Merge sources with precedence CLI > environment > file > defaults.
    pub fn resolve(
        file: Option<ConfigLayer>,
        env: ConfigLayer,
        args: &crate::cli::Args,
    ) -> Result<Self, ConfigError> {
        let merged = ConfigLayer::from_args(args)
            .over(env)
            .over(file.unwrap_or_default());

        let scheme = merged
            .scheme
            .unwrap_or_else(|| DEFAULT_SCHEME.to_string())
            .to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::UnsupportedScheme(scheme));
        }

        Ok(Config {
            scheme,
            host: merged.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: merged.port.unwrap_or(DEFAULT_PORT),
            directory: merged
                .directory
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY)),
            subfolder: normalize_subfolder(merged.subfolder.as_deref().unwrap_or("")),
            loglevel: merged
                .loglevel
                .unwrap_or_else(|| DEFAULT_LOGLEVEL.to_string()),
        })
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`, e.g. `INFO` -> `info`.
    pub fn log_directive(&self) -> String {
        self.loglevel.trim().to_ascii_lowercase()
    }
}

pub fn normalize_subfolder(raw: &str) -> String {
    raw.trim().trim_matches('/').to_string()
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("folder2rss.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("folder2rss").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: String, value: String },
    #[error("unsupported scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
    #[error("media directory {path} is not usable: {reason}")]
    MediaRoot { path: PathBuf, reason: String },
    #[error("cannot build a base URL from host {host:?} and port {port}")]
    BaseUrl { host: String, port: u16 },
}

pub fn load_config(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let layer: ConfigLayer = toml::from_str(&content)?;
    Ok(layer)
}
