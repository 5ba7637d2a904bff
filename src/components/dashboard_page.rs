//! Dashboard Page
//!
//! The user's elephants, orders and sent gifts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::{GiftModal, HuePicker, MessageBanner};
use crate::context::use_services;
use crate::hue::hue_name;
use crate::models::{DesiredColor, Order};
use crate::viewmodels::{DashboardModel, DashboardStateStoreFields};

const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

fn order_color_label(order: &Order) -> String {
    match order.color() {
        Some(DesiredColor::Hue(hue)) => hue_name(Some(hue)).to_string(),
        Some(DesiredColor::Hex(hex)) => hex,
        None => hue_name(None).to_string(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = use_services();
    let model = DashboardModel::new(services.api, services.platform, &services.config);

    let state = Store::new(model.snapshot());
    let _subscription = StoredValue::new_local(model.subscribe(move |s| state.set(s.clone())));
    let model = StoredValue::new_local(model);

    // Initial load
    Effect::new(move |_| {
        let model = model.get_value();
        spawn_local(async move { model.load_data().await });
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
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Мои слоны"</h1>
                <button type="button" class="btn primary" on:click=move |_| model.with_value(|m| m.toggle_purchase())>
                    {move || if state.show_purchase().get() { "Скрыть" } else { "Купить слона" }}
                </button>
            </header>

            <MessageBanner notice=Signal::derive(move || state.purchase_notice().get()) />

            <Show when=move || state.show_purchase().get()>
                <section class="purchase-panel">
                    <div class="tariff-card">
                        <h3>"Базовый"</h3>
                        <p>"Слон случайного цвета"</p>
                        <button type="button" class="btn" disabled=move || state.purchase_loading().get() on:click=buy_basic>
                            "Купить"
                        </button>
                    </div>
                    <div class="tariff-card">
                        <h3>"Продвинутый"</h3>
                        <HuePicker
                            selected=Signal::derive(move || state.selected_hue().get())
                            on_select=Callback::new(move |hue| model.with_value(|m| m.select_hue(hue)))
                        />
                        <button type="button" class="btn" disabled=move || state.purchase_loading().get() on:click=buy_advanced>
                            "Купить"
                        </button>
                    </div>
                </section>
            </Show>

            <Show
                when=move || !state.loading().get()
                fallback=|| view! { <p class="loading">"Загрузка..."</p> }
            >
                <section class="elephants">
                    <h2>"Слоны"</h2>
                    <Show
                        when=move || !state.elephants().get().is_empty()
                        fallback=|| view! { <p class="empty">"У вас пока нет слонов"</p> }
                    >
                        <div class="elephant-grid">
                            <For
                                each=move || state.elephants().get()
                                key=|elephant| (elephant.id, elephant.is_gifted)
                                children=move |elephant| {
                                    let id = elephant.id;
                                    let gift_uuid = elephant.gift_uuid.clone();
                                    let gift_target = elephant.clone();
                                    view! {
                                        <div class="elephant-card">
                                            {elephant.image_url.clone().map(|src| view! { <img src=src alt=elephant.name.clone() /> })}
                                            <h3 style=format!("color: {};", elephant.color_hex)>{elephant.name.clone()}</h3>
                                            <p class="elephant-color">{elephant.color_display.clone()}</p>
                                            <button type="button" class="btn" on:click=move |_| model.with_value(|m| m.download_elephant(id))>
                                                "Скачать"
                                            </button>
                                            {match gift_uuid {
                                                Some(uuid) => view! {
                                                    <div class="gifted">
                                                        <span>"Подарен: " {elephant.gift_recipient.clone().unwrap_or_default()}</span>
                                                        <button type="button" class="btn" on:click=move |_| {
                                                            let model = model.get_value();
                                                            let uuid = uuid.clone();
                                                            spawn_local(async move { model.copy_gift_link(&uuid).await });
                                                        }>
                                                            "Ссылка"
                                                        </button>
                                                    </div>
                                                }.into_any(),
                                                None => view! {
                                                    <button type="button" class="btn primary" on:click=move |_| {
                                                        model.with_value(|m| m.open_gift_modal(gift_target.clone()))
                                                    }>
                                                        "Подарить"
                                                    </button>
                                                }.into_any(),
                                            }}
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </section>

                <section class="orders">
                    <h2>"Заказы"</h2>
                    <ul class="order-list">
                        <For
                            each=move || state.orders().get()
                            key=|order| (order.id, order.status.clone())
                            children=|order| {
                                let tariff = order.tariff.as_ref().map(|t| t.name.clone()).unwrap_or_default();
                                view! {
                                    <li class="order-row">
                                        <span class="order-id">"#" {order.id}</span>
                                        <span class="order-tariff">{tariff}</span>
                                        <span class="order-color">{order_color_label(&order)}</span>
                                        <span class=format!("order-status status-{}", order.status)>{order.status.clone()}</span>
                                        <span class="order-date">{order.created_at.format(DATE_FORMAT).to_string()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>

                <section class="sent-gifts">
                    <h2>"Отправленные подарки"</h2>
                    <ul class="gift-list">
                        <For
                            each=move || state.sent_gifts().get()
                            key=|gift| (gift.id, gift.is_claimed)
                            children=move |gift| {
                                let uuid = gift.uuid.clone();
                                let recipient = if gift.recipient_name.is_empty() { "Без имени".to_string() } else { gift.recipient_name.clone() };
                                view! {
                                    <li class="gift-row">
                                        <span class="gift-recipient">{recipient}</span>
                                        <span class="gift-status">
                                            {if gift.is_claimed { "Принят" } else { "Ожидает" }}
                                        </span>
                                        <span class="gift-date">{gift.created_at.format(DATE_FORMAT).to_string()}</span>
                                        <button type="button" class="btn" on:click=move |_| {
                                            let model = model.get_value();
                                            let uuid = uuid.clone();
                                            spawn_local(async move { model.copy_gift_link(&uuid).await });
                                        }>
                                            "Скопировать ссылку"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>
            </Show>

            <GiftModal state=state model=model />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::order_json;

    #[test]
    fn test_order_color_label() {
        let order: Order = serde_json::from_str(&order_json(1, "HUE:180")).unwrap();
        assert_eq!(order_color_label(&order), "Голубой");

        let order: Order = serde_json::from_str(&order_json(2, "#12AB34")).unwrap();
        assert_eq!(order_color_label(&order), "#12AB34");

        let mut order = order;
        order.desired_color = None;
        assert_eq!(order_color_label(&order), "Не выбран");
    }
}
