//! Test Fakes
//!
//! In-memory `Platform` and `HttpTransport` plus JSON fixtures.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

use crate::error::{PlatformError, TransportError};
use crate::platform::{HttpRequest, HttpResponse, HttpTransport, Method, Platform};

pub use futures::executor::block_on;

pub const TEST_ORIGIN: &str = "https://kupi-slona.test";

// ========================
// Transport
// ========================

type TransportResult = Result<HttpResponse, TransportError>;

/// Canned responses keyed by method and URL; unknown routes get a 404.
/// While held, responses wait until `release` is called for their URL.
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<HashMap<(Method, String), TransportResult>>,
    requests: RefCell<Vec<HttpRequest>>,
    held: Cell<bool>,
    pending: RefCell<Vec<(String, TransportResult, oneshot::Sender<TransportResult>)>>,
}

impl FakeTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, method: Method, url: &str, status: u16, body: &str) {
        self.routes.borrow_mut().insert(
            (method, url.to_string()),
            Ok(HttpResponse { status, body: body.to_string() }),
        );
    }

    pub fn fail(&self, method: Method, url: &str, message: &str) {
        self.routes
            .borrow_mut()
            .insert((method, url.to_string()), Err(TransportError(message.to_string())));
    }

    pub fn hold(&self) {
        self.held.set(true);
    }

    /// URLs of held requests, in the order they were sent
    pub fn pending_urls(&self) -> Vec<String> {
        self.pending.borrow().iter().map(|(url, _, _)| url.clone()).collect()
    }

    /// Deliver the held response for `url`
    pub fn release(&self, url: &str) {
        let mut pending = self.pending.borrow_mut();
        if let Some(index) = pending.iter().position(|(u, _, _)| u == url) {
            let (_, result, sender) = pending.remove(index);
            let _ = sender.send(result);
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

impl HttpTransport for FakeTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        let result = self
            .routes
            .borrow()
            .get(&(request.method, request.url.clone()))
            .cloned()
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 404,
                    body: r#"{"detail":"Not Found"}"#.to_string(),
                })
            });
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);

        if !self.held.get() {
            return future::ready(result).boxed_local();
        }
        let (sender, receiver) = oneshot::channel();
        self.pending.borrow_mut().push((url, result, sender));
        async move {
            receiver
                .await
                .unwrap_or_else(|_| Err(TransportError("request dropped".to_string())))
        }
        .boxed_local()
    }
}

// ========================
// Platform
// ========================

pub struct FakePlatform {
    cookies: RefCell<String>,
    pathname: RefCell<String>,
    confirm_answer: Cell<bool>,
    clipboard_api: Cell<bool>,
    textarea_copy: Cell<bool>,
    pub clipboard: RefCell<Option<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<String>>,
    pub opened_tabs: RefCell<Vec<String>>,
    pub sleeps: RefCell<Vec<u32>>,
    spawned: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl FakePlatform {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            cookies: RefCell::new(String::new()),
            pathname: RefCell::new("/".to_string()),
            confirm_answer: Cell::new(true),
            clipboard_api: Cell::new(true),
            textarea_copy: Cell::new(true),
            clipboard: RefCell::new(None),
            alerts: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
            opened_tabs: RefCell::new(Vec::new()),
            sleeps: RefCell::new(Vec::new()),
            spawned: RefCell::new(Vec::new()),
        })
    }

    pub fn set_cookies(&self, cookies: &str) {
        *self.cookies.borrow_mut() = cookies.to_string();
    }

    pub fn set_pathname(&self, pathname: &str) {
        *self.pathname.borrow_mut() = pathname.to_string();
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn set_clipboard_api(&self, available: bool) {
        self.clipboard_api.set(available);
    }

    pub fn set_textarea_copy(&self, works: bool) {
        self.textarea_copy.set(works);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn spawned_count(&self) -> usize {
        self.spawned.borrow().len()
    }

    /// Drive every spawned task (and anything they spawn) to completion
    pub fn run_spawned(&self) {
        loop {
            let tasks: Vec<_> = self.spawned.borrow_mut().drain(..).collect();
            if tasks.is_empty() {
                break;
            }
            for task in tasks {
                block_on(task);
            }
        }
    }
}

impl Platform for FakePlatform {
    fn cookie_string(&self) -> String {
        self.cookies.borrow().clone()
    }

    fn origin(&self) -> String {
        TEST_ORIGIN.to_string()
    }

    fn pathname(&self) -> String {
        self.pathname.borrow().clone()
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }

    fn open_in_new_tab(&self, url: &str) {
        self.opened_tabs.borrow_mut().push(url.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), PlatformError>> {
        let result = if self.clipboard_api.get() {
            *self.clipboard.borrow_mut() = Some(text.to_string());
            Ok(())
        } else {
            Err(PlatformError::ClipboardUnavailable)
        };
        future::ready(result).boxed_local()
    }

    fn copy_with_textarea(&self, text: &str) -> Result<(), PlatformError> {
        if self.textarea_copy.get() {
            *self.clipboard.borrow_mut() = Some(text.to_string());
            Ok(())
        } else {
            Err(PlatformError::ClipboardWrite("execCommand(\"copy\") was rejected".into()))
        }
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        self.sleeps.borrow_mut().push(ms);
        future::ready(()).boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawned.borrow_mut().push(task);
    }
}

// ========================
// Fixtures
// ========================

pub fn order_json(id: u32, desired_color: &str) -> String {
    format!(
        r#"{{"id":{id},"status":"paid","desired_color":"{desired_color}","created_at":"2025-03-01T10:00:00Z","paid_at":null}}"#
    )
}

pub fn elephant_json(id: u32) -> String {
    format!(
        r##"{{"id":{id},"name":"Слон {id}","color_hex":"#FF0000","color_r":255,"color_g":0,"color_b":0,"color_display":"Красный","image_url":null,"is_gifted":false,"is_owned_by_user":true,"created_at":"2025-03-01T10:00:00Z"}}"##
    )
}

pub fn gift_json(id: u32, uuid: &str) -> String {
    format!(
        r##"{{"id":{id},"uuid":"{uuid}","sender_name":"","recipient_name":"","message":"","is_claimed":false,"created_at":"2025-03-01T10:00:00Z","claimed_at":null,"public_url":"/gift/{uuid}/","elephant_color":"#FF0000"}}"##
    )
}

pub fn list_json(items: &[String]) -> String {
    format!("[{}]", items.join(","))
}
