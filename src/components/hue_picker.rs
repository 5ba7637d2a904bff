//! Hue Picker Component
//!
//! Color swatches for the advanced tariff.

use leptos::prelude::*;

use crate::hue::{hue_name, HUE_OPTIONS};

/// Swatch buttons, one per palette hue
#[component]
pub fn HuePicker(
    #[prop(into)] selected: Signal<u16>,
    #[prop(into)] on_select: Callback<u16>,
) -> impl IntoView {
    view! {
        <div class="hue-picker">
            <div class="hue-swatches">
                {HUE_OPTIONS.iter().map(|(hue, label)| {
                    let hue = *hue;
                    let is_selected = move || selected.get() == hue;
                    view! {
                        <button
                            type="button"
                            title=*label
                            class=move || if is_selected() { "hue-swatch active" } else { "hue-swatch" }
                            style=format!("background-color: hsl({}, 80%, 50%);", hue)
                            on:click=move |_| on_select.run(hue)
                        ></button>
                    }
                }).collect_view()}
            </div>
            <p class="hue-label">"Цвет: " {move || hue_name(Some(selected.get()))}</p>
        </div>
    }
}
