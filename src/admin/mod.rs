//! Typed client for the administrative REST API
//!
//! The client never opens a connection itself. Requests are handed to an
//! injected [`Transport`], and bearer tokens come from an injected
//! [`TokenSource`], so tests and callers choose the HTTP stack and the
//! authentication flow.
//!
//! ```rust
//! use ndpack::BoxError;
//! use ndpack::admin::{
//!     AdminClient, ClientConfig, HttpRequest, HttpResponse, StaticToken, Transport,
//! };
//!
//! struct Canned;
//!
//! impl Transport for Canned {
//!     fn send(&self, _request: HttpRequest) -> Result<HttpResponse, BoxError> {
//!         Ok(HttpResponse::new(200, r#"{"data": []}"#))
//!     }
//! }
//!
//! let client = AdminClient::new(
//!     ClientConfig::new("https://api.example.com"),
//!     Canned,
//!     StaticToken::new("token"),
//! )
//! .unwrap();
//! assert!(client.list_projects().unwrap().is_empty());
//! ```

mod api_keys;
mod config;
mod models;
mod organizations;
mod projects;
mod transport;

pub use config::{API_VERSION_HEADER, ClientConfig, DEFAULT_USER_AGENT};
pub use models::{
    ApiKey, ApiKeyRole, ApiKeyWithSecret, CreateApiKeyRequest, CreateProjectRequest,
    Organization, Page, Pagination, Project, UpdateApiKeyRequest, UpdateOrganizationRequest,
    UpdateProjectRequest,
};
pub use transport::{HttpRequest, HttpResponse, Method, StaticToken, TokenSource, Transport};

use crate::error::ClientError;
use log::{debug, trace, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Query parameter carrying the pagination token
const PAGINATION_TOKEN_PARAM: &str = "pagination_token";

/// Admin API client over an injected transport and token source
#[derive(Debug, Clone)]
pub struct AdminClient<T, K> {
    config: ClientConfig,
    transport: T,
    tokens: K,
}

impl<T: Transport, K: TokenSource> AdminClient<T, K> {
    /// Create a client; `config.base_url` must be an `http` or `https` URL.
    pub fn new(config: ClientConfig, transport: T, tokens: K) -> Result<Self, ClientError> {
        let base = config.base();
        let host = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"));
        if host.is_none_or(str::is_empty) {
            return Err(ClientError::InvalidArgument(format!(
                "base_url must be an http(s) URL, got {:?}",
                config.base_url
            )));
        }
        Ok(Self {
            config,
            transport,
            tokens,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and return the body of a successful response
    fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<(&str, &str)>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ClientError> {
        let token = self.tokens.token().map_err(ClientError::Token)?;

        let mut url = format!("{}{}", self.config.base(), path);
        if let Some((name, value)) = query {
            url.push('?');
            url.push_str(name);
            url.push('=');
            url.push_str(&encode_query_value(value));
        }

        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {}", token)),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.config.user_agent.clone()),
        ];
        if let Some(version) = &self.config.api_version {
            headers.push((API_VERSION_HEADER.to_string(), version.clone()));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers.extend(
            self.config
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        debug!("{} {}", method, path);
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .map_err(ClientError::Transport)?;
        trace!("{} {} -> {}", method, path, response.status);

        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                message: error_message(&response.body),
            });
        }
        Ok(response.body)
    }

    fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let body = self.send(Method::Get, path, None, None)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<R, ClientError> {
        let body = serde_json::to_vec(payload)?;
        let response = self.send(method, path, None, Some(body))?;
        Ok(serde_json::from_slice(&response)?)
    }

    fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(Method::Delete, path, None, None)?;
        Ok(())
    }

    /// Follow pagination tokens until the last page and concatenate the items
    fn list_all<I: DeserializeOwned>(&self, path: &str) -> Result<Vec<I>, ClientError> {
        let mut items = Vec::new();
        let mut token: Option<String> = None;
        let mut seen = HashSet::new();

        loop {
            let query = token.as_deref().map(|t| (PAGINATION_TOKEN_PARAM, t));
            let body = self.send(Method::Get, path, query, None)?;
            let page: Page<I> = serde_json::from_slice(&body)?;

            let next = page.next_token().map(str::to_string);
            trace!("{}: page of {} items", path, page.data.len());
            items.extend(page.data);

            match next {
                Some(next) if !seen.insert(next.clone()) => {
                    warn!("{}: server repeated pagination token {:?}, stopping", path, next);
                    break;
                }
                Some(next) => token = Some(next),
                None => break,
            }
        }

        Ok(items)
    }
}

/// Reject identifiers that would change the request path
fn check_id(kind: &str, id: &str) -> Result<(), ClientError> {
    if id.is_empty() {
        return Err(ClientError::InvalidArgument(format!("{} must not be empty", kind)));
    }
    if id.contains(['/', '?', '#']) {
        return Err(ClientError::InvalidArgument(format!(
            "{} contains a reserved character: {:?}",
            kind, id
        )));
    }
    Ok(())
}

fn check_name(kind: &str, name: &str) -> Result<(), ClientError> {
    if name.trim().is_empty() {
        return Err(ClientError::InvalidArgument(format!(
            "{} name must not be empty",
            kind
        )));
    }
    Ok(())
}

/// Human-readable message from an error response body
fn error_message(body: &[u8]) -> String {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) {
        let message = json
            .pointer("/error/message")
            .or_else(|| json.get("message"))
            .or_else(|| json.get("error"))
            .and_then(|m| m.as_str());
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        "empty response body".to_string()
    } else {
        text.to_string()
    }
}

/// Percent-encode everything outside the unreserved set
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
