//! Client layer for the remote link management API
//!
//! Front ends (CLI/TUI) never talk HTTP directly: they go through
//! [`LinkApi`], implemented by [`HttpLinkApi`] for the real service.
//!
//! # Endpoints
//!
//! ```text
//! GET    /links?page=&limit=          → LinkPage
//! GET    /links/search?q=&page=&limit= → LinkPage
//! GET    /links/{code}                → Link
//! GET    /stats                       → Stats
//! POST   /links   {url,title,code?}   → CreatedLink | {error}
//! DELETE /links/{code}                → {success} | {error}
//! ```
//!
//! Every request carries `Authorization: Bearer <token>`.

mod http;
mod types;

pub use http::HttpLinkApi;
pub use types::{ApiErrorBody, CreateLinkRequest, CreatedAt, CreatedLink, Link, LinkPage, Stats};

use std::fmt;

use async_trait::async_trait;

// ============ ClientError ============

/// Errors from a single API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Non-success HTTP status; `message` is the server's `error` field if any
    RequestFailed { status: u16, message: Option<String> },
    /// Transport failure or a body that could not be decoded
    NetworkOrParse(String),
}

impl ClientError {
    pub fn request_failed(status: u16, message: Option<String>) -> Self {
        ClientError::RequestFailed { status, message }
    }

    pub fn network_or_parse<T: Into<String>>(msg: T) -> Self {
        ClientError::NetworkOrParse(msg.into())
    }

    /// HTTP status if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            ClientError::NetworkOrParse(_) => None,
        }
    }

    /// Server-provided error text, if the body carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::RequestFailed { message, .. } => message.as_deref(),
            ClientError::NetworkOrParse(_) => None,
        }
    }

    /// Message that ignores whatever the server said
    pub fn generic_message(&self) -> String {
        match self {
            ClientError::RequestFailed { status, .. } => {
                format!("request failed (HTTP {})", status)
            }
            ClientError::NetworkOrParse(msg) => format!("network or parse error: {}", msg),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.server_message() {
            Some(msg) => write!(f, "{}", msg),
            None => write!(f, "{}", self.generic_message()),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::NetworkOrParse(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::NetworkOrParse(format!("invalid response body: {}", err))
    }
}

// ============ LinkApi ============

/// Operations offered by the remote service.
///
/// The bearer token is passed per call; it belongs to the session, not to the
/// transport.
#[async_trait]
pub trait LinkApi: Send + Sync {
    async fn list_links(&self, token: &str, page: u32, limit: u32)
    -> Result<LinkPage, ClientError>;

    async fn search_links(
        &self,
        token: &str,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<LinkPage, ClientError>;

    async fn get_link(&self, token: &str, code: &str) -> Result<Link, ClientError>;

    async fn stats(&self, token: &str) -> Result<Stats, ClientError>;

    async fn create_link(
        &self,
        token: &str,
        request: &CreateLinkRequest,
    ) -> Result<CreatedLink, ClientError>;

    async fn delete_link(&self, token: &str, code: &str) -> Result<(), ClientError>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefers_server_message() {
        let err = ClientError::request_failed(400, Some("invalid url".into()));
        assert_eq!(err.to_string(), "invalid url");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_display_falls_back_to_status() {
        let err = ClientError::request_failed(502, None);
        assert_eq!(err.to_string(), "request failed (HTTP 502)");
        assert!(err.server_message().is_none());
    }

    #[test]
    fn test_generic_message_ignores_server_text() {
        let err = ClientError::request_failed(500, Some("db down".into()));
        assert_eq!(err.generic_message(), "request failed (HTTP 500)");
    }

    #[test]
    fn test_network_error_display() {
        let err = ClientError::network_or_parse("connection refused");
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<Stats>("not json").unwrap_err();
        let err: ClientError = parse_err.into();
        assert!(matches!(err, ClientError::NetworkOrParse(ref m) if m.contains("invalid response body")));
    }

    #[test]
    fn test_client_error_is_std_error() {
        let err = ClientError::network_or_parse("x");
        let _: &dyn std::error::Error = &err;
    }
}
