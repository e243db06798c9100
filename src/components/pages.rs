use dioxus::prelude::*;

use crate::backend::search::initial_search_form_values;
use crate::backend::url_state::QueryParams;

/// Body shared by the pages that only exist so the top bar has somewhere to
/// link to.
#[component]
fn PagePlaceholder(title: String, text: String) -> Element {
    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header",
                h1 { class: "page-title", "{title}" }
                p { class: "text-[var(--text-secondary)] mt-1", "{text}" }
            }
        }
    }
}

#[component]
pub fn LandingPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Marketplace", text: "Find a place to stay or list your own." } }
}

#[component]
pub fn SearchPage(query: String) -> Element {
    let params = QueryParams::parse(&query);
    let values = initial_search_form_values(&params);
    let address = params
        .get("address")
        .unwrap_or_default()
        .to_string();
    let text = match values.location {
        Some(location) => format!("Listings near {}", location.search),
        None if !address.is_empty() => format!("Listings matching \"{address}\""),
        None => "All listings".to_string(),
    };
    rsx! { PagePlaceholder { title: "Search", text } }
}

#[component]
pub fn LoginPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Log in", text: "Welcome back." } }
}

#[component]
pub fn SignupPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Sign up", text: "Create an account to start booking." } }
}

#[component]
pub fn InboxPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Inbox", text: "Your orders and sales." } }
}

#[component]
pub fn ManageListingsPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Your listings", text: "Listings you have published." } }
}

#[component]
pub fn NewListingPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "New listing", text: "Describe what you are offering." } }
}

#[component]
pub fn ContactDetailsPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Contact details", text: "Email address and phone number." } }
}

#[component]
pub fn EmailVerificationPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Verify email", text: "Confirming your email address." } }
}

#[component]
pub fn PasswordResetPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Reset password", text: "Choose a new password." } }
}

#[component]
pub fn PayoutPreferencesPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Payout preferences", text: "Where we send your earnings." } }
}

#[component]
pub fn ProfileSettingsPage(query: String) -> Element {
    rsx! { PagePlaceholder { title: "Profile settings", text: "How other users see you." } }
}

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { PagePlaceholder { title: "Page not found", text: "Nothing lives at /{path}." } }
}
