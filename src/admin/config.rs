//! Admin client configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header carrying the requested API version
pub const API_VERSION_HEADER: &str = "X-Api-Version";

/// Default `User-Agent` value
pub const DEFAULT_USER_AGENT: &str = concat!("ndpack/", env!("CARGO_PKG_VERSION"));

/// Settings shared by every request the client sends.
///
/// Deserializable so it can be embedded in a larger configuration file; only
/// `base_url` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the admin API, e.g. `https://api.example.com`
    pub base_url: String,
    /// Sent as `X-Api-Version` when set
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Extra headers added to every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: None,
            user_agent: default_user_agent(),
            headers: BTreeMap::new(),
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// `base_url` without trailing slashes
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
