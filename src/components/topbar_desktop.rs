use dioxus::prelude::*;

use crate::backend::routes::{RouteName, RouteTable};
use crate::backend::search::{LocationValue, SearchFormValues};
use crate::backend::session::CurrentUser;
use crate::components::common::{Logo, NotificationBadge};
use crate::components::search_form::TopbarSearchForm;
use crate::i18n::Message;

#[component]
pub fn TopbarDesktop(
    current_user: Option<CurrentUser>,
    current_user_has_listings: bool,
    current_page: Option<RouteName>,
    initial_search_values: SearchFormValues,
    is_authenticated: bool,
    notification_count: usize,
    on_logout: EventHandler<()>,
    on_search_submit: EventHandler<LocationValue>,
) -> Element {
    let routes = use_context::<RouteTable>();
    let mut profile_menu_open = use_signal(|| false);

    let link_class = move |name: RouteName| {
        if current_page == Some(name) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let initials = current_user
        .as_ref()
        .map(|u| u.attributes.abbreviated_name.clone())
        .unwrap_or_default();

    rsx! {
        nav { class: "topbar-desktop",
            Link {
                to: routes.path_by_route_name(RouteName::LandingPage).to_string(),
                class: "topbar-desktop-logo",
                title: Message::LogoIcon.text(),
                Logo { mobile: false }
            }
            div { class: "topbar-desktop-search",
                TopbarSearchForm {
                    initial_values: initial_search_values,
                    is_mobile: false,
                    on_submit: on_search_submit,
                }
            }
            Link {
                to: routes.path_by_route_name(RouteName::NewListingPage).to_string(),
                class: link_class(RouteName::NewListingPage),
                "{Message::CreateListing.text()}"
            }
            if is_authenticated {
                Link {
                    to: routes.path_by_route_name(RouteName::InboxPage).to_string(),
                    class: link_class(RouteName::InboxPage),
                    "{Message::Inbox.text()}"
                    NotificationBadge { count: notification_count, compact: false }
                }
                div { class: "profile-menu",
                    button {
                        class: "avatar",
                        onclick: move |_| profile_menu_open.set(!profile_menu_open()),
                        "{initials}"
                    }
                    if profile_menu_open() {
                        div { class: "profile-menu-content panel",
                            if current_user_has_listings {
                                Link {
                                    to: routes.path_by_route_name(RouteName::ManageListingsPage).to_string(),
                                    class: link_class(RouteName::ManageListingsPage),
                                    "{Message::YourListings.text()}"
                                }
                            }
                            Link {
                                to: routes.path_by_route_name(RouteName::ProfileSettingsPage).to_string(),
                                class: link_class(RouteName::ProfileSettingsPage),
                                "{Message::ProfileSettings.text()}"
                            }
                            Link {
                                to: routes.path_by_route_name(RouteName::ContactDetailsPage).to_string(),
                                class: link_class(RouteName::ContactDetailsPage),
                                "{Message::AccountSettings.text()}"
                            }
                            button {
                                class: "btn btn-secondary btn-sm w-full",
                                onclick: move |_| {
                                    profile_menu_open.set(false);
                                    on_logout.call(());
                                },
                                "{Message::Logout.text()}"
                            }
                        }
                    }
                }
            } else {
                Link {
                    to: routes.path_by_route_name(RouteName::SignupPage).to_string(),
                    class: link_class(RouteName::SignupPage),
                    "{Message::Signup.text()}"
                }
                Link {
                    to: routes.path_by_route_name(RouteName::LoginPage).to_string(),
                    class: link_class(RouteName::LoginPage),
                    "{Message::Login.text()}"
                }
            }
        }
    }
}
