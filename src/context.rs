//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::platform::Platform;

/// Backend client, browser capabilities and config for every page
#[derive(Clone)]
pub struct AppServices {
    pub api: ApiClient,
    pub platform: Rc<dyn Platform>,
    pub config: Rc<AppConfig>,
}

/// Context handle; the services themselves are not `Send`
pub type ServicesHandle = StoredValue<AppServices, LocalStorage>;

pub fn provide_services(services: AppServices) {
    provide_context::<ServicesHandle>(StoredValue::new_local(services));
}

pub fn use_services() -> AppServices {
    expect_context::<ServicesHandle>().get_value()
}
