use std::collections::{HashMap, HashSet};

use super::url_state::QueryParams;

/// Logical page names used by links and redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    LandingPage,
    SearchPage,
    LoginPage,
    SignupPage,
    InboxPage,
    ManageListingsPage,
    NewListingPage,
    ContactDetailsPage,
    EmailVerificationPage,
    PasswordResetPage,
    PayoutPreferencesPage,
    ProfileSettingsPage,
}

impl RouteName {
    pub const ALL: [RouteName; 12] = [
        RouteName::LandingPage,
        RouteName::SearchPage,
        RouteName::LoginPage,
        RouteName::SignupPage,
        RouteName::InboxPage,
        RouteName::ManageListingsPage,
        RouteName::NewListingPage,
        RouteName::ContactDetailsPage,
        RouteName::EmailVerificationPage,
        RouteName::PasswordResetPage,
        RouteName::PayoutPreferencesPage,
        RouteName::ProfileSettingsPage,
    ];

    fn default_path(self) -> &'static str {
        match self {
            RouteName::LandingPage => "/",
            RouteName::SearchPage => "/s",
            RouteName::LoginPage => "/login",
            RouteName::SignupPage => "/signup",
            RouteName::InboxPage => "/inbox",
            RouteName::ManageListingsPage => "/listings",
            RouteName::NewListingPage => "/l/new",
            RouteName::ContactDetailsPage => "/account/contact-details",
            RouteName::EmailVerificationPage => "/verify-email",
            RouteName::PasswordResetPage => "/reset-password",
            RouteName::PayoutPreferencesPage => "/account/payments",
            RouteName::ProfileSettingsPage => "/profile-settings",
        }
    }
}

/// Pages where the missing-information reminder never opens.
pub const REMINDER_ALLOWLIST: [RouteName; 6] = [
    RouteName::LoginPage,
    RouteName::SignupPage,
    RouteName::ContactDetailsPage,
    RouteName::EmailVerificationPage,
    RouteName::PasswordResetPage,
    RouteName::PayoutPreferencesPage,
];

/// Route name to path mapping, passed to whoever needs to resolve a page.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    paths: HashMap<RouteName, String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            paths: RouteName::ALL
                .iter()
                .map(|name| (*name, name.default_path().to_string()))
                .collect(),
        }
    }
}

impl RouteTable {
    pub fn with_path(mut self, name: RouteName, path: impl Into<String>) -> Self {
        self.paths.insert(name, path.into());
        self
    }

    pub fn path_by_route_name(&self, name: RouteName) -> &str {
        self.paths
            .get(&name)
            .map(String::as_str)
            .unwrap_or_else(|| name.default_path())
    }

    pub fn reminder_allowlist(&self) -> HashSet<String> {
        REMINDER_ALLOWLIST
            .iter()
            .map(|name| self.path_by_route_name(*name).to_string())
            .collect()
    }

    /// Path of `name` with `params` appended as a query string.
    pub fn resource_locator(&self, name: RouteName, params: &QueryParams) -> String {
        format!("{}{}", self.path_by_route_name(name), params.to_search())
    }
}
