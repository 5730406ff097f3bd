//! The seam between the API client and the network.
//!
//! Requests and responses are plain data; a [`Transport`] turns one into the
//! other. The shipped binary uses [`ReqwestTransport`], tests script their own.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::ApiError;

pub mod live;

pub use live::ReqwestTransport;

/// A GET request: absolute URL plus ordered query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into(), query: Vec::new() }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// First value for `key`, if the request carries it.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Only a plain 200 counts as success.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}
