use dioxus::prelude::*;

use crate::backend::search::{LocationValue, SearchFormValues};
use crate::components::common::SearchIcon;
use crate::i18n::Message;

/// Location search field used by both the desktop bar and the mobile modal.
///
/// The selected place from the URL is kept as long as the text still matches
/// it; once the user edits the text the submission carries only the address.
#[component]
pub fn TopbarSearchForm(
    initial_values: SearchFormValues,
    is_mobile: bool,
    on_submit: EventHandler<LocationValue>,
) -> Element {
    let initial_location = initial_values.location.clone();
    let mut search = use_signal(|| {
        initial_location
            .as_ref()
            .map(|l| l.search.clone())
            .unwrap_or_default()
    });

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let text = search().trim().to_string();
        if text.is_empty() {
            return;
        }
        let selected_place = initial_values
            .location
            .as_ref()
            .filter(|l| l.search == text)
            .and_then(|l| l.selected_place.clone());
        on_submit.call(LocationValue {
            search: text,
            selected_place,
        });
    };

    let form_class = if is_mobile { "search-form search-form-mobile" } else { "search-form" };

    rsx! {
        form { class: "{form_class}", onsubmit: submit,
            SearchIcon { class: "search-form-icon" }
            input {
                class: "input search-form-input",
                r#type: "search",
                autofocus: is_mobile,
                placeholder: Message::SearchPlaceholder.text(),
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }
        }
    }
}
