//! API Client
//!
//! Frontend bindings to the backend REST API, organized by resource.
//! Every request carries `Content-Type: application/json`; non-GET requests
//! also carry `X-CSRFToken` when the `csrftoken` cookie is set.

mod elephants;
mod gifts;
mod orders;
mod tariffs;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::cookies::{read_cookie, CSRF_COOKIE};
use crate::error::ApiError;
use crate::platform::{HttpRequest, HttpResponse, HttpTransport, Method, Platform};

pub use elephants::ElephantsApi;
pub use gifts::GiftsApi;
pub use orders::OrdersApi;
pub use tariffs::TariffsApi;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Shared handle to the backend; cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    base: Rc<str>,
    transport: Rc<dyn HttpTransport>,
    platform: Rc<dyn Platform>,
}

impl ApiClient {
    /// `base` is prepended to every `/api/...` path; empty means same origin
    pub fn new(base: &str, transport: Rc<dyn HttpTransport>, platform: Rc<dyn Platform>) -> Self {
        Self {
            base: Rc::from(base.trim_end_matches('/')),
            transport,
            platform,
        }
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    pub fn elephants(&self) -> ElephantsApi<'_> {
        ElephantsApi::new(self)
    }

    pub fn gifts(&self) -> GiftsApi<'_> {
        GiftsApi::new(self)
    }

    pub fn tariffs(&self) -> TariffsApi<'_> {
        TariffsApi::new(self)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::Get, path, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.send(Method::Post, path, body).await
    }

    async fn send<T: DeserializeOwned>(&self, method: Method, path: &str, body: Option<String>) -> Result<T, ApiError> {
        let request = self.build_request(method, path, body);
        log::debug!("[API] {} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("[API] {} {} failed: {}", method.as_str(), path, e);
            ApiError::from(e)
        })?;

        if !response.is_success() {
            return Err(http_error(&response));
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        if method.is_mutating() {
            let token = read_cookie(&self.platform.cookie_string(), CSRF_COOKIE);
            if let Some(token) = token.filter(|t| !t.is_empty()) {
                headers.push((CSRF_HEADER.to_string(), token));
            }
        }

        HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        }
    }
}

/// Maps a non-2xx response to `ApiError::Http`.
///
/// Message precedence: `message`, then `detail` (string values only), then
/// `HTTP {status}`. An unparsable body is ignored.
pub(crate) fn http_error(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| {
            ["message", "detail"].iter().find_map(|key| {
                body.get(*key)
                    .and_then(Value::as_str)
                    .filter(|text| !text.is_empty())
                    .map(str::to_owned)
            })
        })
        .unwrap_or_else(|| format!("HTTP {}", response.status));

    ApiError::Http {
        status: response.status,
        message,
    }
}
