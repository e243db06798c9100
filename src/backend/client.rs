use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::session::CurrentUser;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
}

/// Why a verification email could not be resent. Each kind has its own
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResendError {
    #[error("too many verification email requests")]
    TooManyRequests,
    #[error("sending verification email failed: {0}")]
    Generic(String),
}

impl From<ClientError> for ResendError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status(status) if status == StatusCode::TOO_MANY_REQUESTS => {
                ResendError::TooManyRequests
            }
            other => ResendError::Generic(other.to_string()),
        }
    }
}

/// What the API knows about the visitor's session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionInfo {
    pub current_user: Option<CurrentUser>,
    pub has_listings: bool,
    pub has_orders: Option<bool>,
    pub notification_count: usize,
}

/// Session calls the top bar triggers.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `None` when nobody is signed in.
    async fn session(&self) -> Result<Option<SessionInfo>, ClientError>;
    async fn logout(&self) -> Result<(), ClientError>;
    async fn resend_verification_email(&self) -> Result<(), ResendError>;
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post(&self, path: &str) -> Result<(), ClientError> {
        let resp = self.http.post(self.endpoint(path)).send().await?;
        check_status(resp.status())
    }
}

fn check_status(status: StatusCode) -> Result<(), ClientError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Status(status))
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn session(&self) -> Result<Option<SessionInfo>, ClientError> {
        let resp = self.http.get(self.endpoint("session")).send().await?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        check_status(resp.status())?;
        Ok(Some(resp.json::<SessionInfo>().await?))
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.post("logout").await
    }

    async fn resend_verification_email(&self) -> Result<(), ResendError> {
        Ok(self.post("verification-email").await?)
    }
}
