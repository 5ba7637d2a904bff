//! Gift Modal Component
//!
//! Form for gifting the selected elephant; switches to the shareable link
//! once the gift is created.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModelHandle;
use crate::viewmodels::{DashboardModel, DashboardState, DashboardStateStoreFields};
use reactive_stores::Store;

#[component]
pub fn GiftModal(state: Store<DashboardState>, model: ModelHandle<DashboardModel>) -> impl IntoView {
    let create_gift = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let model = model.get_value();
        spawn_local(async move { model.create_gift().await });
    };

    let copy_link = move |_| {
        let model = model.get_value();
        spawn_local(async move { model.copy_gift_link_from_modal().await });
    };

    let close = move |_| model.with_value(|m| m.close_gift_modal());

    let form = move || view! {
        <form class="gift-form" on:submit=create_gift>
            <label>
                "От кого"
                <input
                    type="text"
                    placeholder="Ваше имя"
                    prop:value=move || state.gift_form().get().sender_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.with_value(|m| m.edit_gift_form(|f| f.sender_name = value));
                    }
                />
            </label>
            <label>
                "Кому"
                <input
                    type="text"
                    placeholder="Имя получателя"
                    prop:value=move || state.gift_form().get().recipient_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.with_value(|m| m.edit_gift_form(|f| f.recipient_name = value));
                    }
                />
            </label>
            <label>
                "Сообщение"
                <textarea
                    rows="3"
                    prop:value=move || state.gift_form().get().message
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        model.with_value(|m| m.edit_gift_form(|f| f.message = value));
                    }
                ></textarea>
            </label>
            <button type="submit" class="btn primary" disabled=move || state.gift_loading().get()>
                {move || if state.gift_loading().get() { "Создаём..." } else { "Создать ссылку" }}
            </button>
        </form>
    };

    view! {
        <Show when=move || state.show_gift_modal().get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Подарить слона"</h2>
                    <p class="modal-subtitle">
                        {move || state.selected_elephant().get().map(|e| e.name).unwrap_or_default()}
                    </p>
                    {move || match state.gift_link().get() {
                        Some(link) => view! {
                            <div class="gift-link">
                                <p>"Подарок создан! Отправьте ссылку получателю:"</p>
                                <input type="text" readonly=true prop:value=link />
                                <button type="button" class="btn" on:click=copy_link>"Скопировать"</button>
                            </div>
                        }.into_any(),
                        None => form().into_any(),
                    }}
                    <button type="button" class="modal-close" on:click=close>"Закрыть"</button>
                </div>
            </div>
        </Show>
    }
}
