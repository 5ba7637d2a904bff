//! Kupi Slona Frontend App
//!
//! Picks the page to render from the current location.

use leptos::prelude::*;

use crate::components::{DashboardPage, GiftPage, TariffPage};
use crate::context::use_services;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Gift,
    Tariffs,
}

/// Server-rendered routes: `/dashboard/`, `/gift/{uuid}/`, everything else is the landing page
pub fn page_for_path(pathname: &str) -> Page {
    if pathname.starts_with("/dashboard") {
        Page::Dashboard
    } else if pathname.starts_with("/gift/") {
        Page::Gift
    } else {
        Page::Tariffs
    }
}

#[component]
pub fn App() -> impl IntoView {
    let page = page_for_path(&use_services().platform.pathname());
    log::info!("[APP] Mounting {:?} page", page);

    match page {
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Gift => view! { <GiftPage /> }.into_any(),
        Page::Tariffs => view! { <TariffPage /> }.into_any(),
    }
}
