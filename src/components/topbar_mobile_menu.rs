use dioxus::prelude::*;

use crate::backend::routes::{RouteName, RouteTable};
use crate::backend::session::CurrentUser;
use crate::components::common::NotificationBadge;
use crate::i18n::Message;

/// Contents of the mobile menu modal.
#[component]
pub fn TopbarMobileMenu(
    is_authenticated: bool,
    current_user_has_listings: bool,
    current_user: Option<CurrentUser>,
    current_page: Option<RouteName>,
    notification_count: usize,
    on_logout: EventHandler<()>,
) -> Element {
    let routes = use_context::<RouteTable>();
    let item_class = move |name: RouteName| {
        if current_page == Some(name) {
            "mobile-menu-link active"
        } else {
            "mobile-menu-link"
        }
    };

    if !is_authenticated {
        return rsx! {
            div { class: "mobile-menu",
                Link {
                    to: routes.path_by_route_name(RouteName::SignupPage).to_string(),
                    class: item_class(RouteName::SignupPage),
                    "{Message::Signup.text()}"
                }
                Link {
                    to: routes.path_by_route_name(RouteName::LoginPage).to_string(),
                    class: item_class(RouteName::LoginPage),
                    "{Message::Login.text()}"
                }
            }
        };
    }

    let display_name = current_user
        .map(|u| u.attributes.display_name)
        .unwrap_or_default();

    rsx! {
        div { class: "mobile-menu",
            p { class: "mobile-menu-greeting",
                "{Message::Greeting.format(\"displayName\", &display_name)}"
            }
            button {
                class: "btn btn-secondary btn-sm",
                onclick: move |_| on_logout.call(()),
                "{Message::Logout.text()}"
            }
            Link {
                to: routes.path_by_route_name(RouteName::InboxPage).to_string(),
                class: item_class(RouteName::InboxPage),
                "{Message::Inbox.text()}"
                NotificationBadge { count: notification_count, compact: false }
            }
            if current_user_has_listings {
                Link {
                    to: routes.path_by_route_name(RouteName::ManageListingsPage).to_string(),
                    class: item_class(RouteName::ManageListingsPage),
                    "{Message::YourListings.text()}"
                }
            }
            Link {
                to: routes.path_by_route_name(RouteName::ProfileSettingsPage).to_string(),
                class: item_class(RouteName::ProfileSettingsPage),
                "{Message::ProfileSettings.text()}"
            }
            Link {
                to: routes.path_by_route_name(RouteName::ContactDetailsPage).to_string(),
                class: item_class(RouteName::ContactDetailsPage),
                "{Message::AccountSettings.text()}"
            }
            Link {
                to: routes.path_by_route_name(RouteName::NewListingPage).to_string(),
                class: "btn btn-primary w-full",
                "{Message::CreateListing.text()}"
            }
        }
    }
}
