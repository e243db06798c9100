mod backend;
mod components;
mod config;
mod i18n;

use backend::routes::{RouteName, RouteTable};
use components::pages::*;
use components::shell::PageLayout;
use components::AppState;
use config::Config;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(PageLayout)]
    #[route("/?:..query")]
    LandingPage { query: String },
    #[route("/s?:..query")]
    SearchPage { query: String },
    #[route("/login?:..query")]
    LoginPage { query: String },
    #[route("/signup?:..query")]
    SignupPage { query: String },
    #[route("/inbox?:..query")]
    InboxPage { query: String },
    #[route("/listings?:..query")]
    ManageListingsPage { query: String },
    #[route("/l/new?:..query")]
    NewListingPage { query: String },
    #[route("/account/contact-details?:..query")]
    ContactDetailsPage { query: String },
    #[route("/verify-email?:..query")]
    EmailVerificationPage { query: String },
    #[route("/reset-password?:..query")]
    PasswordResetPage { query: String },
    #[route("/account/payments?:..query")]
    PayoutPreferencesPage { query: String },
    #[route("/profile-settings?:..query")]
    ProfileSettingsPage { query: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl Route {
    /// Logical page name, used to highlight the active link. Unknown paths
    /// fall back to the landing page.
    fn name(&self) -> RouteName {
        match self {
            Route::LandingPage { .. } | Route::NotFoundPage { .. } => RouteName::LandingPage,
            Route::SearchPage { .. } => RouteName::SearchPage,
            Route::LoginPage { .. } => RouteName::LoginPage,
            Route::SignupPage { .. } => RouteName::SignupPage,
            Route::InboxPage { .. } => RouteName::InboxPage,
            Route::ManageListingsPage { .. } => RouteName::ManageListingsPage,
            Route::NewListingPage { .. } => RouteName::NewListingPage,
            Route::ContactDetailsPage { .. } => RouteName::ContactDetailsPage,
            Route::EmailVerificationPage { .. } => RouteName::EmailVerificationPage,
            Route::PasswordResetPage { .. } => RouteName::PasswordResetPage,
            Route::PayoutPreferencesPage { .. } => RouteName::PayoutPreferencesPage,
            Route::ProfileSettingsPage { .. } => RouteName::ProfileSettingsPage,
        }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt::init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);
    use_context_provider(Config::load);
    use_context_provider(RouteTable::default);

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}
