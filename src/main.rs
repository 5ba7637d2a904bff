#![allow(warnings)]
//! Kupi Slona Frontend Entry Point

mod api;
mod app;
mod clipboard;
mod components;
mod config;
mod context;
mod cookies;
mod error;
mod hue;
mod logger;
mod models;
mod platform;
mod viewmodels;

#[cfg(test)]
mod testing;

use std::rc::Rc;

use app::App;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::context::{provide_services, AppServices};
use crate::platform::{BrowserPlatform, FetchTransport, Platform};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logger::init(config.level_filter());

    let platform: Rc<dyn Platform> = Rc::new(BrowserPlatform);
    let api = ApiClient::new(&config.api_base, Rc::new(FetchTransport), platform.clone());
    log::info!("[APP] Starting for user {:?}, api base {:?}", config.username, config.api_base);

    let services = AppServices { api, platform, config: Rc::new(config) };
    mount_to_body(move || {
        provide_services(services.clone());
        view! { <App /> }
    });
}
