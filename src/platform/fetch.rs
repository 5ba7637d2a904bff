//! Fetch Transport
//!
//! `HttpTransport` over `gloo_net::http`.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::{Request, RequestBuilder};

use super::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::error::TransportError;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn transport_error(err: gloo_net::Error) -> TransportError {
    TransportError(err.to_string())
}

fn builder(request: &HttpRequest) -> RequestBuilder {
    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };
    request
        .headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name, value))
}

async fn fetch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let builder = builder(&request);
    let prepared = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(transport_error)?;

    let response = prepared.send().await.map_err(transport_error)?;

    let status = response.status();
    // An unreadable body is treated as empty; callers fall back on the status
    let body = response.text().await.unwrap_or_default();

    Ok(HttpResponse { status, body })
}

impl HttpTransport for FetchTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        fetch(request).boxed_local()
    }
}
