pub mod common;
pub mod modal;
pub mod pages;
pub mod reminder_modal;
pub mod search_form;
pub mod shell;
pub mod topbar;
pub mod topbar_desktop;
pub mod topbar_mobile_menu;
pub mod viewport;

use dioxus::prelude::*;
use crate::backend::client::{ResendError, SessionInfo};
use crate::backend::session::CurrentUser;

#[derive(Clone, Copy)]
pub struct AppState {
    pub current_user: Signal<Option<CurrentUser>>,
    pub is_authenticated: Signal<bool>,
    pub auth_in_progress: Signal<bool>,
    pub current_user_has_listings: Signal<bool>,
    pub current_user_has_orders: Signal<Option<bool>>,
    pub notification_count: Signal<usize>,
    pub send_verification_email_in_progress: Signal<bool>,
    pub send_verification_email_error: Signal<Option<ResendError>>,
    pub show_generic_error: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_user: use_signal(|| None),
            is_authenticated: use_signal(|| false),
            auth_in_progress: use_signal(|| true),
            current_user_has_listings: use_signal(|| false),
            current_user_has_orders: use_signal(|| None),
            notification_count: use_signal(|| 0),
            send_verification_email_in_progress: use_signal(|| false),
            send_verification_email_error: use_signal(|| None),
            show_generic_error: use_signal(|| false),
        }
    }

    pub fn apply_session(&mut self, session: Option<SessionInfo>) {
        let session = session.unwrap_or_default();
        self.is_authenticated.set(session.current_user.is_some());
        self.current_user.set(session.current_user);
        self.current_user_has_listings.set(session.has_listings);
        self.current_user_has_orders.set(session.has_orders);
        self.notification_count.set(session.notification_count);
        self.auth_in_progress.set(false);
    }

    pub fn clear_session(&mut self) {
        self.apply_session(None);
    }
}
