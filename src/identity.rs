use url::Url;

use crate::config::{Config, ConfigError};
use crate::sandbox::MediaRoot;

/// Everything a request needs to know about where this server lives: the advertised
/// scheme/host/port, the URL prefix it is mounted under, and the media root.
///
/// Built once at startup from `Config` and shared read-only (behind `Arc`) with every
/// request handler. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ServerIdentity {
    scheme: String,
    host: String,
    port: u16,
    subfolder: String,
    media_root: MediaRoot,
    website_root: Url,
}

impl ServerIdentity {
    pub fn new(
        scheme: &str,
        host: &str,
        port: u16,
        subfolder: &str,
        media_root: MediaRoot,
    ) -> Result<Self, ConfigError> {
        let subfolder = crate::config::normalize_subfolder(subfolder);
        let website_root = build_website_root(scheme, host, port, &subfolder)?;
        Ok(ServerIdentity {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port,
            subfolder,
            media_root,
            website_root,
        })
    }

    /// Canonicalise the configured media directory and derive the identity from `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let media_root =
            MediaRoot::open(&config.directory).map_err(|e| ConfigError::MediaRoot {
                path: config.directory.clone(),
                reason: e.to_string(),
            })?;
        Self::new(
            &config.scheme,
            &config.host,
            config.port,
            &config.subfolder,
            media_root,
        )
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn subfolder(&self) -> &str {
        &self.subfolder
    }

    pub fn media_root(&self) -> &MediaRoot {
        &self.media_root
    }

    /// Base URL every link is joined onto. Always ends with `/`.
    pub fn website_root(&self) -> &Url {
        &self.website_root
    }

    /// Percent-encoded path prefix incoming requests carry, e.g. `/feeds`.
    /// Empty when the server is mounted at the root.
    pub fn path_prefix(&self) -> &str {
        self.website_root.path().trim_end_matches('/')
    }
}

fn build_website_root(
    scheme: &str,
    host: &str,
    port: u16,
    subfolder: &str,
) -> Result<Url, ConfigError> {
    let bad_url = || ConfigError::BaseUrl {
        host: host.to_string(),
        port,
    };

    // Bare IPv6 literals need brackets in the authority.
    let authority = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    };
    let mut url = Url::parse(&format!("{scheme}://{authority}/")).map_err(|_| bad_url())?;
    {
        let mut path = url.path_segments_mut().map_err(|_| bad_url())?;
        path.pop_if_empty();
        path.extend(subfolder.split('/').filter(|s| !s.is_empty()));
        path.push("");
    }
    Ok(url)
}
