//! Gift Page
//!
//! Public page a gift link points to.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::use_services;
use crate::models::PublicGift;
use crate::viewmodels::{GiftClaimModel, GiftClaimStateStoreFields};

fn sender_label(gift: &PublicGift) -> String {
    if gift.sender_name.trim().is_empty() {
        "Аноним".to_string()
    } else {
        gift.sender_name.clone()
    }
}

#[component]
pub fn GiftPage() -> impl IntoView {
    let services = use_services();
    let model = GiftClaimModel::new(services.api, services.platform);

    let state = Store::new(model.snapshot());
    let _subscription = StoredValue::new_local(model.subscribe(move |s| state.set(s.clone())));
    let model = StoredValue::new_local(model);

    Effect::new(move |_| {
        let model = model.get_value();
        spawn_local(async move { model.load().await });
    });

    let claim = move |_| {
        let model = model.get_value();
        spawn_local(async move { model.claim_gift().await });
    };

    let gift_card = move |gift: PublicGift| {
        let color = gift.elephant_color.clone().unwrap_or_else(|| "#999999".to_string());
        view! {
            <div class="gift-card">
                <h1>"Вам подарок!"</h1>
                <p class="gift-from">"От: " {sender_label(&gift)}</p>
                {(!gift.message.is_empty()).then(|| view! { <blockquote class="gift-message">{gift.message.clone()}</blockquote> })}
                {gift.elephant_image_url.clone().map(|src| view! { <img class="gift-image" src=src /> })}
                <p class="gift-elephant" style=format!("color: {};", color)>
                    {gift.elephant_name.clone().unwrap_or_default()}
                </p>
                {if gift.is_claimed {
                    view! {
                        <p class="gift-claimed">
                            "Подарок уже принят"
                            {gift.claimed_by_username.clone().map(|name| format!(": {}", name))}
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <button type="button" class="btn primary" disabled=move || state.claiming().get() on:click=claim>
                            {move || if state.claiming().get() { "Принимаем..." } else { "Принять подарок" }}
                        </button>
                    }.into_any()
                }}
            </div>
        }
    };

    view! {
        <div class="gift-page">
            {move || match (state.gift().get(), state.load_error().get()) {
                (Some(gift), _) => gift_card(gift).into_any(),
                (None, Some(error)) => view! { <p class="message error">{error}</p> }.into_any(),
                (None, None) => view! { <p class="loading">"Загрузка..."</p> }.into_any(),
            }}
        </div>
    }
}
