//! Tariff Page
//!
//! Landing page: pick a tariff and a color, then checkout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::{HuePicker, MessageBanner};
use crate::context::use_services;
use crate::models::TariffKind;
use crate::viewmodels::{TariffModel, TariffState, TariffStateStoreFields};

/// Price label for a tier, empty until the catalogue arrives
fn price_label(state: &TariffState, kind: TariffKind) -> String {
    state
        .tariff(kind)
        .map(|t| format!("{} ₽", t.price))
        .unwrap_or_default()
}

/// Backend description, or the built-in one when missing
fn description_label(state: &TariffState, kind: TariffKind) -> String {
    match state.tariff(kind).map(|t| t.description.trim()) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => match kind {
            TariffKind::Basic => "Слон случайного цвета".to_string(),
            TariffKind::Advanced => "Выберите цвет своего слона".to_string(),
        },
    }
}

#[component]
pub fn TariffPage() -> impl IntoView {
    let services = use_services();
    let model = TariffModel::new(services.api, services.platform, &services.config);

    let state = Store::new(model.snapshot());
    let _subscription = StoredValue::new_local(model.subscribe(move |s| state.set(s.clone())));
    let model = StoredValue::new_local(model);

    Effect::new(move |_| {
        let model = model.get_value();
        spawn_local(async move { model.load_tariffs().await });
    });

    let buy_basic = move |_| {
        let model = model.get_value();
        spawn_local(async move { model.buy_basic().await });
    };
    let buy_advanced = move |_| {
        let model = model.get_value();
        spawn_local(async move { model.buy_advanced().await });
    };

    view! {
        <div class="tariffs">
            <MessageBanner
                notice=Signal::derive(move || state.notice().get())
                on_dismiss=Callback::new(move |_| model.with_value(|m| m.dismiss_message()))
            />

            <div class="tariff-grid">
                <div class="tariff-card">
                    <h2>"Базовый"</h2>
                    <p class="tariff-price">{move || state.with(|s| price_label(s, TariffKind::Basic))}</p>
                    <p class="tariff-description">{move || state.with(|s| description_label(s, TariffKind::Basic))}</p>
                    <button type="button" class="btn primary" disabled=move || state.loading().get() on:click=buy_basic>
                        {move || if state.loading().get() { "Оформляем..." } else { "Купить слона" }}
                    </button>
                </div>

                <div class="tariff-card featured">
                    <h2>"Продвинутый"</h2>
                    <p class="tariff-price">{move || state.with(|s| price_label(s, TariffKind::Advanced))}</p>
                    <p class="tariff-description">{move || state.with(|s| description_label(s, TariffKind::Advanced))}</p>
                    <HuePicker
                        selected=Signal::derive(move || state.selected_hue().get())
                        on_select=Callback::new(move |hue| model.with_value(|m| m.select_hue(hue)))
                    />
                    <button type="button" class="btn primary" disabled=move || state.loading().get() on:click=buy_advanced>
                        {move || if state.loading().get() { "Оформляем..." } else { "Купить слона" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
