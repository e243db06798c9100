use dioxus::prelude::*;
use tokio::sync::mpsc;

use crate::backend::client::ApiClient;
use crate::backend::navigate::{Navigate, NavigationMode};
use crate::backend::routes::{RouteName, RouteTable};
use crate::backend::search::current_search_params;
use crate::backend::url_state::{Location, QueryParams};
use crate::backend::{AppCmd, AppEvent, Backend};
use crate::components::topbar::Topbar;
use crate::components::AppState;
use crate::config::Config;
use crate::Route;

/// Page layout: owns the backend task, feeds its events into `AppState` and
/// renders the top bar above the routed page.
#[component]
pub fn PageLayout() -> Element {
    let app_state = use_context::<AppState>();
    let config = use_context::<Config>();
    let routes = use_context::<RouteTable>();

    let cmd_tx = use_hook(|| {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let api = ApiClient::new(config.api_base_url.clone());
        spawn(async move {
            Backend::new(api, cmd_rx, event_tx).run().await;
        });

        let navigate = NavigationMode::from_config(&config).navigator();
        let landing = routes.path_by_route_name(RouteName::LandingPage).to_string();
        spawn(handle_events(event_rx, app_state, navigate, landing));

        let _ = cmd_tx.send(AppCmd::FetchSession);
        cmd_tx
    });
    use_context_provider(|| cmd_tx);

    let route = use_route::<Route>();
    let location = Location::from_url(&route.to_string());
    let current_page = route.name();
    let search_params = if current_page == RouteName::SearchPage {
        current_search_params(&location.query())
    } else {
        QueryParams::new()
    };

    rsx! {
        div { class: "min-h-screen flex flex-col",
            Topbar {
                location,
                current_page: Some(current_page),
                current_search_params: search_params,
            }
            div { class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}

async fn handle_events(
    mut event_rx: mpsc::UnboundedReceiver<AppEvent>,
    mut app_state: AppState,
    navigate: Box<dyn Navigate>,
    landing: String,
) {
    while let Some(event) = event_rx.recv().await {
        match event {
            AppEvent::SessionFetched(session) => {
                app_state.show_generic_error.set(false);
                app_state.apply_session(session);
            }
            AppEvent::SessionFetchFailed => {
                app_state.auth_in_progress.set(false);
                app_state.show_generic_error.set(true);
            }
            AppEvent::LoggedOut => {
                app_state.clear_session();
                navigate.navigate(&landing);
            }
            AppEvent::VerificationEmailSending => {
                app_state.send_verification_email_in_progress.set(true);
                app_state.send_verification_email_error.set(None);
            }
            AppEvent::VerificationEmailSent => {
                app_state.send_verification_email_in_progress.set(false);
            }
            AppEvent::VerificationEmailFailed(e) => {
                app_state.send_verification_email_in_progress.set(false);
                app_state.send_verification_email_error.set(Some(e));
            }
        }
    }
}
