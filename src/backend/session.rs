use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct UserId(pub String);

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserAttributes {
    pub email: String,
    pub email_verified: bool,
    pub stripe_connected: bool,
    pub display_name: String,
    pub abbreviated_name: String,
}

/// The signed in user as delivered by the API. A user without an id is a
/// placeholder for "not loaded yet" and behaves like an anonymous visitor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub id: Option<UserId>,
    #[serde(default)]
    pub attributes: UserAttributes,
}

impl CurrentUser {
    pub fn is_loaded(&self) -> bool {
        self.id.is_some()
    }

    pub fn email_unverified(&self) -> bool {
        self.is_loaded() && !self.attributes.email_verified
    }

    pub fn payout_missing(&self) -> bool {
        self.is_loaded() && !self.attributes.stripe_connected
    }
}

/// Fills in an empty user so callers never branch on `Option<CurrentUser>`.
pub fn ensure_current_user(user: Option<&CurrentUser>) -> CurrentUser {
    user.cloned().unwrap_or_default()
}

/// Session and navigation facts at one instant, rebuilt on every navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user_id: Option<UserId>,
    pub email_verified: bool,
    pub payment_setup_complete: bool,
    pub has_listings: bool,
    pub has_orders: Option<bool>,
    pub current_path: String,
}

impl SessionSnapshot {
    pub fn new(
        user: &CurrentUser,
        has_listings: bool,
        has_orders: Option<bool>,
        current_path: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user.id.clone(),
            email_verified: user.attributes.email_verified,
            payment_setup_complete: user.attributes.stripe_connected,
            has_listings,
            has_orders,
            current_path: current_path.into(),
        }
    }
}
