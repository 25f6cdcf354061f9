//! # Client configuration: `clubs.toml`
//!
//! The web crate bundles a `clubs.toml` next to its manifest and parses it at
//! startup. It decides where the API lives and which backend the UI talks to.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # empty = same origin as the page
//!
//! [backend]
//! mode = "http"                         # "memory" runs against demo data
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ApiConfig`] | Top-level config with TOML (de)serialisation, the filename constant and base URL resolution. |
//! | [`EndpointConfig`] | `[api]` section: the base URL every path is joined onto. |
//! | [`BackendConfig`] | `[backend]` section: [`BackendMode`], defaulting to HTTP. |
//!
//! All structs derive `Default`, so a missing or empty file is the default
//! configuration: same-origin HTTP.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Top-level configuration stored in `clubs.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub api: EndpointConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Absolute URL, a path such as `/backend`, or empty for the page origin.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub mode: BackendMode,
}

/// Which [`ClubBackend`](crate::ClubBackend) the UI is wired to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    #[default]
    Http,
    Memory,
}

impl ApiConfig {
    /// Create an HTTP config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: EndpointConfig {
                base_url: base_url.into(),
            },
            backend: BackendConfig::default(),
        }
    }

    /// Builder method to pick the backend.
    pub fn with_mode(mut self, mode: BackendMode) -> Self {
        self.backend.mode = mode;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "clubs.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Replace the base URL when `base_url` is set and non-blank.
    pub fn override_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Resolve the configured base against the page origin.
    ///
    /// Absolute URLs are used as-is; an empty or relative base is joined onto
    /// `origin`. The result always ends in `/` so paths extend it.
    pub fn resolve_base(&self, origin: Option<&str>) -> Result<Url, ApiError> {
        let raw = self.api.base_url.trim();
        let invalid = || ApiError::InvalidBaseUrl(raw.to_string());

        let mut url = match Url::parse(raw) {
            Ok(url) => url,
            Err(_) => {
                let origin = origin.ok_or_else(invalid)?;
                Url::parse(origin)
                    .and_then(|o| o.join(raw))
                    .map_err(|_| invalid())?
            }
        };
        if url.cannot_be_a_base() {
            return Err(invalid());
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        Ok(url)
    }
}
