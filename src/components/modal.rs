use dioxus::prelude::*;
use dioxus::core::use_drop;

use crate::i18n::Message;

fn scroll_lock_script(id: &str, disabled: bool) -> String {
    format!(
        "document.body.classList.toggle('modal-open-{}', {});",
        id, disabled
    )
}

/// Locks page scrolling while any modal with `id` is open.
fn set_scrolling_disabled(id: &str, disabled: bool) {
    let _ = document::eval(&scroll_lock_script(id, disabled));
}

#[component]
pub fn Modal(
    id: String,
    is_open: bool,
    on_close: EventHandler<()>,
    container_class: Option<String>,
    close_button_message: Option<String>,
    children: Element,
) -> Element {
    let scroll_id = id.clone();
    use_effect(use_reactive((&is_open,), move |(is_open,)| {
        set_scrolling_disabled(&scroll_id, is_open);
    }));
    // Unmounting with the modal open must not leave the body locked.
    let drop_id = id.clone();
    use_drop(move || set_scrolling_disabled(&drop_id, false));

    if !is_open {
        return rsx! {};
    }

    let container_class = container_class.unwrap_or_else(|| "modal-container".to_string());
    let close_label = close_button_message.unwrap_or_else(|| Message::Close.text().to_string());

    rsx! {
        div {
            id: "{id}",
            class: "modal-overlay animate-fade-in",
            onclick: move |_| on_close.call(()),
            div {
                class: "{container_class}",
                onclick: move |e| e.stop_propagation(),
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    span { class: "modal-close-text", "{close_label}" }
                    span { class: "modal-close-icon", "✕" }
                }
                div { class: "modal-content", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_lock_release_removes_class() {
        assert_eq!(
            scroll_lock_script("TopbarMobileMenu", false),
            "document.body.classList.toggle('modal-open-TopbarMobileMenu', false);"
        );
        assert_eq!(
            scroll_lock_script("TopbarMobileMenu", true),
            "document.body.classList.toggle('modal-open-TopbarMobileMenu', true);"
        );
    }
}
