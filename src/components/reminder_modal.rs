use dioxus::prelude::*;

use crate::backend::client::ResendError;
use crate::backend::reminder::ReminderContent;
use crate::backend::routes::{RouteName, RouteTable};
use crate::backend::session::CurrentUser;
use crate::components::common::IconEmailAttention;
use crate::i18n::Message;

pub fn resend_error_message(error: &ResendError) -> Message {
    match error {
        ResendError::TooManyRequests => Message::ResendFailedTooManyRequests,
        ResendError::Generic(_) => Message::ResendFailed,
    }
}

#[component]
pub fn ReminderModalContent(
    current_user: Option<CurrentUser>,
    send_verification_email_in_progress: bool,
    send_verification_email_error: Option<ResendError>,
    on_resend_verification_email: EventHandler<()>,
) -> Element {
    let routes = use_context::<RouteTable>();
    let user = current_user.unwrap_or_default();

    match ReminderContent::for_user(&user) {
        Some(ReminderContent::VerifyEmail) => {
            let (inbox_before, inbox_after) = Message::CheckInbox.split("email");
            let (resend_before, resend_after) = Message::ResendEmail.split("resendEmailLink");
            let (fix_before, fix_after) = Message::FixEmail.split("fixEmailLink");
            let email = user.attributes.email.clone();
            let error_text = send_verification_email_error
                .as_ref()
                .map(|e| resend_error_message(e).text());

            rsx! {
                div {
                    IconEmailAttention { class: "modal-icon" }
                    p { class: "modal-title", "{Message::VerifyEmailTitle.text()}" }
                    p { class: "modal-message", "{Message::VerifyEmailText.text()}" }
                    p { class: "modal-message",
                        "{inbox_before}"
                        span { class: "email", "{email}" }
                        "{inbox_after}"
                    }
                    if let Some(text) = error_text {
                        p { class: "error", "{text}" }
                    }
                    div { class: "bottom-wrapper",
                        p { class: "helper-text",
                            if send_verification_email_in_progress {
                                "{Message::SendingEmail.text()}"
                            } else {
                                "{resend_before}"
                                button {
                                    class: "helper-link",
                                    onclick: move |_| on_resend_verification_email.call(()),
                                    "{Message::ResendEmailLinkText.text()}"
                                }
                                "{resend_after}"
                            }
                        }
                        p { class: "helper-text",
                            "{fix_before}"
                            Link {
                                to: routes.path_by_route_name(RouteName::ContactDetailsPage).to_string(),
                                class: "helper-link",
                                "{Message::FixEmailLinkText.text()}"
                            }
                            "{fix_after}"
                        }
                    }
                }
            }
        }
        Some(ReminderContent::ConnectPayout) => rsx! {
            div {
                p { class: "modal-title", "{Message::MissingStripeAccountTitle.text()}" }
                p { class: "modal-message", "{Message::MissingStripeAccountText.text()}" }
                div { class: "bottom-wrapper",
                    Link {
                        to: routes.path_by_route_name(RouteName::PayoutPreferencesPage).to_string(),
                        class: "btn btn-primary",
                        "{Message::GotoPaymentSettings.text()}"
                    }
                }
            }
        },
        None => rsx! {},
    }
}

/// Banner for failures the page cannot recover from. It has no close
/// button and stays while `show` is set.
#[component]
pub fn GenericError(show: bool) -> Element {
    let class = if show { "generic-error generic-error-visible" } else { "generic-error" };
    rsx! {
        div { class: "{class}",
            div { class: "generic-error-content",
                p { class: "generic-error-text", "{Message::GenericError.text()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resend_errors_map_to_distinct_messages() {
        assert_eq!(
            resend_error_message(&ResendError::TooManyRequests),
            Message::ResendFailedTooManyRequests
        );
        assert_eq!(
            resend_error_message(&ResendError::Generic("timeout".into())),
            Message::ResendFailed
        );
    }
}
