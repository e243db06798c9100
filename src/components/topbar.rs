use dioxus::prelude::*;

use crate::backend::reminder::ReminderGate;
use crate::backend::routes::{RouteName, RouteTable};
use crate::backend::search::{initial_search_form_values, search_params, LocationValue};
use crate::backend::session::{ensure_current_user, SessionSnapshot};
use crate::backend::url_state::{is_modal_open, Location, QueryParams, MOBILE_MENU, MOBILE_SEARCH};
use crate::backend::AppCmd;
use crate::components::common::{Logo, MenuIcon, NotificationBadge, SearchIcon};
use crate::components::modal::Modal;
use crate::components::reminder_modal::{GenericError, ReminderModalContent};
use crate::components::search_form::TopbarSearchForm;
use crate::components::topbar_desktop::TopbarDesktop;
use crate::components::topbar_mobile_menu::TopbarMobileMenu;
use crate::components::viewport::use_viewport_width;
use crate::components::AppState;
use crate::config::Config;
use crate::i18n::Message;

/// The marketplace top bar: mobile bar, desktop bar, the mobile menu and
/// search modals, and the missing-information reminder.
///
/// Modal state for the mobile menu and search lives in the URL so the back
/// button closes them.
#[component]
pub fn Topbar(
    location: Location,
    current_page: Option<RouteName>,
    current_search_params: QueryParams,
) -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<AppCmd>>();
    let config = use_context::<Config>();
    let routes = use_context::<RouteTable>();
    let viewport_width = use_viewport_width();
    let mut gate = use_signal(ReminderGate::new);

    let current_user = app_state.current_user.read().clone();
    let has_listings = *app_state.current_user_has_listings.read();
    let has_orders = *app_state.current_user_has_orders.read();
    let is_authenticated = *app_state.is_authenticated.read();
    let auth_in_progress = *app_state.auth_in_progress.read();
    let notification_count = *app_state.notification_count.read();
    let send_in_progress = *app_state.send_verification_email_in_progress.read();
    let send_error = app_state.send_verification_email_error.read().clone();
    let show_generic_error = *app_state.show_generic_error.read();

    let snapshot = SessionSnapshot::new(
        &ensure_current_user(current_user.as_ref()),
        has_listings,
        has_orders,
        location.pathname.clone(),
    );
    let allowlist = routes.reminder_allowlist();
    use_effect(use_reactive((&snapshot,), move |(snapshot,)| {
        gate.write().observe(&snapshot, &allowlist);
    }));

    let query = location.query();
    let is_mobile_layout = config.is_mobile_layout(viewport_width());
    let is_mobile_menu_open = is_mobile_layout && is_modal_open(&query, MOBILE_MENU);
    let is_mobile_search_open = is_mobile_layout && is_modal_open(&query, MOBILE_SEARCH);
    let initial_search_values = initial_search_form_values(&query);

    let nav = navigator();
    let open_modal = {
        let location = location.clone();
        move |key: &'static str| {
            let _ = nav.push(location.with_modal_open(key).to_string());
        }
    };
    let close_modal = {
        let location = location.clone();
        move |key: &'static str| {
            let _ = nav.push(location.without_modal_open(key).to_string());
        }
    };
    let open_menu = open_modal.clone();
    let open_search = open_modal;
    let close_menu = close_modal.clone();
    let close_search = close_modal;

    let on_search_submit = {
        let config = config.clone();
        let routes = routes.clone();
        move |values: LocationValue| {
            let params = search_params(&current_search_params, &values, &config);
            let target = routes.resource_locator(RouteName::SearchPage, &params);
            tracing::debug!(%target, "search submitted");
            let _ = nav.push(target);
        }
    };

    let logout_tx = cmd_tx.clone();
    let on_logout = move |_: ()| {
        let _ = logout_tx.send(AppCmd::Logout);
    };
    let resend_tx = cmd_tx.clone();
    let on_resend = move |_: ()| {
        let _ = resend_tx.send(AppCmd::ResendVerificationEmail);
    };

    rsx! {
        div { class: "topbar",
            div { class: "topbar-mobile",
                button {
                    class: "topbar-menu",
                    title: Message::MenuIcon.text(),
                    onclick: move |_| open_menu(MOBILE_MENU),
                    MenuIcon { class: "topbar-menu-icon" }
                    NotificationBadge { count: notification_count, compact: true }
                }
                Link {
                    to: routes.path_by_route_name(RouteName::LandingPage).to_string(),
                    class: "topbar-home",
                    title: Message::LogoIcon.text(),
                    Logo { mobile: true }
                }
                button {
                    class: "topbar-search-menu",
                    title: Message::SearchIcon.text(),
                    onclick: move |_| open_search(MOBILE_SEARCH),
                    SearchIcon { class: "topbar-search-menu-icon" }
                }
            }
            div { class: "topbar-desktop-container",
                TopbarDesktop {
                    current_user: current_user.clone(),
                    current_user_has_listings: has_listings,
                    current_page,
                    initial_search_values: initial_search_values.clone(),
                    is_authenticated,
                    notification_count,
                    on_logout: on_logout.clone(),
                    on_search_submit: on_search_submit.clone(),
                }
            }
            Modal {
                id: "TopbarMobileMenu",
                is_open: is_mobile_menu_open,
                on_close: move |_| close_menu(MOBILE_MENU),
                if !auth_in_progress {
                    TopbarMobileMenu {
                        is_authenticated,
                        current_user_has_listings: has_listings,
                        current_user: current_user.clone(),
                        current_page,
                        notification_count,
                        on_logout,
                    }
                }
            }
            Modal {
                id: "TopbarMobileSearch",
                container_class: "modal-container search-modal",
                is_open: is_mobile_search_open,
                on_close: move |_| close_search(MOBILE_SEARCH),
                div { class: "search-container",
                    TopbarSearchForm {
                        initial_values: initial_search_values,
                        is_mobile: true,
                        on_submit: on_search_submit,
                    }
                    p { class: "mobile-help", "{Message::MobileSearchHelp.text()}" }
                }
            }
            Modal {
                id: "MissingInformationReminder",
                container_class: "modal-container missing-information-modal",
                is_open: gate.read().is_showing(),
                on_close: move |_| gate.write().dismiss(),
                close_button_message: Message::CloseVerifyEmailReminder.text().to_string(),
                ReminderModalContent {
                    current_user: current_user.clone(),
                    send_verification_email_in_progress: send_in_progress,
                    send_verification_email_error: send_error,
                    on_resend_verification_email: on_resend,
                }
            }
            GenericError { show: show_generic_error }
        }
    }
}
