//! App Configuration
//!
//! Read from an inline `<script id="app-config" type="application/json">`
//! element rendered by the backend template. Every field is optional.

use log::LevelFilter;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// What the tariff page does after an order is created.
///
/// The stock backend pays orders on creation and returns no `payment_url`;
/// `payment_redirect` needs a backend that starts an external checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutFlow {
    /// Go straight to the payment page returned by the backend
    PaymentRedirect,
    /// Show a success banner, then go to the dashboard
    #[default]
    DashboardRedirect,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logged-in user; prefills the gift sender name
    pub username: String,
    /// Prefix for API paths, empty for same origin
    pub api_base: String,
    pub checkout_flow: CheckoutFlow,
    /// Dashboard: delay before clearing the order banner and re-polling elephants
    pub order_refresh_delay_ms: u32,
    /// Tariff page: delay before the dashboard redirect
    pub dashboard_redirect_delay_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            api_base: String::new(),
            checkout_flow: CheckoutFlow::default(),
            order_refresh_delay_ms: 3000,
            dashboard_redirect_delay_ms: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the page, falling back to defaults
    pub fn load() -> Self {
        let raw = gloo_utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match raw {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("[Config] Invalid #{}: {}, using defaults", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
