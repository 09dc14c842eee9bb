//! Collaborators injected into the admin client

use crate::error::BoxError;
use std::fmt;
use std::sync::Arc;

/// HTTP method used by the admin API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully built request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// First header value with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one request/response round trip.
///
/// Any status code is a successful round trip; only failures to reach the
/// server or read its answer are errors.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// Produces the bearer token attached to every request
pub trait TokenSource {
    fn token(&self) -> Result<String, BoxError>;
}

/// Token source returning a fixed token
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&"<redacted>").finish()
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Result<String, BoxError> {
        Ok(self.0.clone())
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        (**self).send(request)
    }
}

impl<K: TokenSource + ?Sized> TokenSource for &K {
    fn token(&self) -> Result<String, BoxError> {
        (**self).token()
    }
}

impl<K: TokenSource + ?Sized> TokenSource for Box<K> {
    fn token(&self) -> Result<String, BoxError> {
        (**self).token()
    }
}

impl<K: TokenSource + ?Sized> TokenSource for Arc<K> {
    fn token(&self) -> Result<String, BoxError> {
        (**self).token()
    }
}
