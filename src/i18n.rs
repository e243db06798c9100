/// Every user-visible string of the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    GenericError,
    MenuIcon,
    LogoIcon,
    SearchIcon,
    MobileSearchHelp,
    SearchPlaceholder,
    VerifyEmailTitle,
    VerifyEmailText,
    CheckInbox,
    SendingEmail,
    ResendEmail,
    ResendEmailLinkText,
    FixEmail,
    FixEmailLinkText,
    ResendFailed,
    ResendFailedTooManyRequests,
    CloseVerifyEmailReminder,
    MissingStripeAccountTitle,
    MissingStripeAccountText,
    GotoPaymentSettings,
    Inbox,
    CreateListing,
    YourListings,
    ProfileSettings,
    AccountSettings,
    Logout,
    Login,
    Signup,
    Greeting,
    Close,
}

impl Message {
    pub fn text(self) -> &'static str {
        match self {
            Message::GenericError => "Oh no, something went wrong. Please check your network connection and try again.",
            Message::MenuIcon => "Open menu",
            Message::LogoIcon => "Go to homepage",
            Message::SearchIcon => "Open search",
            Message::MobileSearchHelp => "Search for listings by location.",
            Message::SearchPlaceholder => "Search locations…",
            Message::VerifyEmailTitle => "Please verify your email address",
            Message::VerifyEmailText => "Before you can continue we need to verify your email address.",
            Message::CheckInbox => "Check your inbox at {email} and follow the link in the verification email.",
            Message::SendingEmail => "Sending verification email…",
            Message::ResendEmail => "Didn't get the email? {resendEmailLink}",
            Message::ResendEmailLinkText => "Send another email.",
            Message::FixEmail => "Typo in your email? {fixEmailLink}",
            Message::FixEmailLinkText => "Fix it.",
            Message::ResendFailed => "Sending the verification email failed. Please try again.",
            Message::ResendFailedTooManyRequests => "You have already requested a new email. Please wait a moment before trying again.",
            Message::CloseVerifyEmailReminder => "Later",
            Message::MissingStripeAccountTitle => "Add your payout details",
            Message::MissingStripeAccountText => "You need to add your payout details before customers can book your listings.",
            Message::GotoPaymentSettings => "Go to payout preferences",
            Message::Inbox => "Inbox",
            Message::CreateListing => "+ Add your listing",
            Message::YourListings => "Your listings",
            Message::ProfileSettings => "Profile settings",
            Message::AccountSettings => "Account settings",
            Message::Logout => "Log out",
            Message::Login => "Log in",
            Message::Signup => "Sign up",
            Message::Greeting => "Hello {displayName}",
            Message::Close => "Close",
        }
    }

    /// Text around the `{name}` placeholder, so a link or highlighted value
    /// can be rendered in its place. Messages without the placeholder come
    /// back whole as the prefix.
    pub fn split(self, name: &str) -> (&'static str, &'static str) {
        let text = self.text();
        let placeholder = format!("{{{name}}}");
        match text.find(&placeholder) {
            Some(start) => (&text[..start], &text[start + placeholder.len()..]),
            None => (text, ""),
        }
    }

    /// Text with `{name}` replaced by `value`.
    pub fn format(self, name: &str, value: &str) -> String {
        let (before, after) = self.split(name);
        if before.len() == self.text().len() {
            return before.to_string();
        }
        format!("{before}{value}{after}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_around_link() {
        assert_eq!(
            Message::ResendEmail.split("resendEmailLink"),
            ("Didn't get the email? ", "")
        );
        let (before, after) = Message::CheckInbox.split("email");
        assert_eq!(before, "Check your inbox at ");
        assert!(after.starts_with(" and follow"));
    }

    #[test]
    fn test_split_without_placeholder() {
        assert_eq!(Message::Logout.split("email"), ("Log out", ""));
        assert_eq!(Message::Logout.format("email", "x"), "Log out");
    }

    #[test]
    fn test_format() {
        assert_eq!(Message::Greeting.format("displayName", "Ann"), "Hello Ann");
    }

    #[test]
    fn test_resend_failures_have_distinct_text() {
        assert_ne!(
            Message::ResendFailed.text(),
            Message::ResendFailedTooManyRequests.text()
        );
    }
}
