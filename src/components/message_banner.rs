//! Message Banner Component
//!
//! Success/error banner with an optional dismiss button.

use leptos::prelude::*;

use crate::viewmodels::Notice;

#[component]
pub fn MessageBanner(
    #[prop(into)] notice: Signal<Option<Notice>>,
    #[prop(optional, into)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = notice.css_class();
            view! {
                <div class=class role="alert">
                    <span class="message-text">{notice.text}</span>
                    {on_dismiss.map(|dismiss| view! {
                        <button type="button" class="message-close" on:click=move |_| dismiss.run(())>
                            "×"
                        </button>
                    })}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_class_follows_kind() {
        assert_eq!(Notice::success("ok").css_class(), "message success");
        assert_eq!(Notice::error("fail").css_class(), "message error");
    }
}
