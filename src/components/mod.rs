//! UI Components
//!
//! Pages and reusable Leptos components.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

mod dashboard_page;
mod gift_modal;
mod gift_page;
mod hue_picker;
mod message_banner;
mod tariff_page;

pub use dashboard_page::DashboardPage;
pub use gift_modal::GiftModal;
pub use gift_page::GiftPage;
pub use hue_picker::HuePicker;
pub use message_banner::MessageBanner;
pub use tariff_page::TariffPage;

/// View model held by a page; models share `Rc` state and are not `Send`
pub type ModelHandle<M> = StoredValue<M, LocalStorage>;
