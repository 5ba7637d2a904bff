//! Platform Capabilities
//!
//! Everything the app needs from the browser, behind traits so view models
//! can run against in-memory fakes.

mod browser;
mod fetch;

use futures::future::LocalBoxFuture;

use crate::error::{PlatformError, TransportError};

pub use browser::BrowserPlatform;
pub use fetch::FetchTransport;

/// Ambient browser state and side effects
pub trait Platform {
    /// Raw `document.cookie`
    fn cookie_string(&self) -> String;

    /// `location.origin`, e.g. `https://example.com`
    fn origin(&self) -> String;

    /// `location.pathname`
    fn pathname(&self) -> String;

    fn navigate(&self, url: &str);

    fn open_in_new_tab(&self, url: &str);

    fn alert(&self, message: &str);

    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;

    /// Async clipboard API (`navigator.clipboard.writeText`)
    fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PlatformError>>;

    /// Hidden textarea + `execCommand("copy")`
    fn copy_with_textarea(&self, text: &str) -> Result<(), PlatformError>;

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;

    /// Run a task on the local executor without awaiting it
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

// ========================
// HTTP
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Requests that change server state need the CSRF header
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request; only transport-level failures are errors
pub trait HttpTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>>;
}
