pub mod client;
pub mod navigate;
pub mod reminder;
pub mod routes;
pub mod search;
pub mod session;
pub mod url_state;

use client::{AuthApi, ResendError, SessionInfo};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppCmd {
    FetchSession,
    Logout,
    ResendVerificationEmail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SessionFetched(Option<SessionInfo>),
    SessionFetchFailed,
    LoggedOut,
    VerificationEmailSending,
    VerificationEmailSent,
    VerificationEmailFailed(ResendError),
}

/// Runs session commands issued by the top bar and reports their outcome.
pub struct Backend<A> {
    api: A,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl<A: AuthApi> Backend<A> {
    pub fn new(
        api: A,
        cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self { api, cmd_rx, event_tx }
    }

    /// Handles commands until every sender is dropped.
    pub async fn run(&mut self) {
        while let Some(cmd) = self.cmd_rx.recv().await {
            self.handle_command(cmd).await;
        }
        tracing::debug!("command channel closed, backend stopping");
    }

    async fn handle_command(&mut self, cmd: AppCmd) {
        tracing::debug!(?cmd, "handling command");
        match cmd {
            AppCmd::FetchSession => match self.api.session().await {
                Ok(session) => self.emit(AppEvent::SessionFetched(session)),
                Err(e) => {
                    tracing::error!("fetching session failed: {}", e);
                    self.emit(AppEvent::SessionFetchFailed);
                }
            },
            AppCmd::Logout => match self.api.logout().await {
                Ok(()) => {
                    tracing::info!("logged out");
                    self.emit(AppEvent::LoggedOut);
                }
                // The server session is still alive, so the local one stays too.
                Err(e) => tracing::warn!("logout request failed: {}", e),
            },
            AppCmd::ResendVerificationEmail => {
                self.emit(AppEvent::VerificationEmailSending);
                match self.api.resend_verification_email().await {
                    Ok(()) => {
                        tracing::info!("verification email sent");
                        self.emit(AppEvent::VerificationEmailSent);
                    }
                    Err(e) => {
                        tracing::warn!("resending verification email failed: {}", e);
                        self.emit(AppEvent::VerificationEmailFailed(e));
                    }
                }
            }
        }
    }

    fn emit(&self, event: AppEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::debug!("event receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use super::client::ClientError;
    use std::cell::Cell;

    struct FakeApi {
        logout_calls: Cell<usize>,
        logout_fails: bool,
        resend_result: Result<(), ResendError>,
        session: Option<SessionInfo>,
        session_fails: bool,
    }

    impl FakeApi {
        fn new(resend_result: Result<(), ResendError>) -> Self {
            Self {
                logout_calls: Cell::new(0),
                logout_fails: false,
                resend_result,
                session: None,
                session_fails: false,
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeApi {
        async fn session(&self) -> Result<Option<SessionInfo>, ClientError> {
            if self.session_fails {
                return Err(ClientError::Status(reqwest::StatusCode::BAD_GATEWAY));
            }
            Ok(self.session.clone())
        }

        async fn logout(&self) -> Result<(), ClientError> {
            self.logout_calls.set(self.logout_calls.get() + 1);
            if self.logout_fails {
                return Err(ClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
            }
            Ok(())
        }

        async fn resend_verification_email(&self) -> Result<(), ResendError> {
            self.resend_result.clone()
        }
    }

    async fn run_commands(api: FakeApi, cmds: Vec<AppCmd>) -> (Vec<AppEvent>, FakeApi) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut backend = Backend::new(api, cmd_rx, event_tx);

        for cmd in cmds {
            cmd_tx.send(cmd).unwrap();
        }
        drop(cmd_tx);
        backend.run().await;

        let mut events = Vec::new();
        while let Ok(event) = event_rx.try_recv() {
            events.push(event);
        }
        (events, backend.api)
    }

    #[tokio::test]
    async fn test_logout_emits_logged_out() {
        let (events, api) = run_commands(FakeApi::new(Ok(())), vec![AppCmd::Logout]).await;
        assert_eq!(events, vec![AppEvent::LoggedOut]);
        assert_eq!(api.logout_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_logout_failure() {
        let mut api = FakeApi::new(Ok(()));
        api.logout_fails = true;
        let (events, api) = run_commands(api, vec![AppCmd::Logout]).await;
        assert!(!events.contains(&AppEvent::LoggedOut));
        assert!(events.is_empty());
        assert_eq!(api.logout_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_resend_success() {
        let (events, _) = run_commands(FakeApi::new(Ok(())), vec![AppCmd::ResendVerificationEmail]).await;
        assert_eq!(
            events,
            vec![AppEvent::VerificationEmailSending, AppEvent::VerificationEmailSent]
        );
    }

    #[tokio::test]
    async fn test_resend_rate_limited() {
        let api = FakeApi::new(Err(ResendError::TooManyRequests));
        let (events, _) = run_commands(api, vec![AppCmd::ResendVerificationEmail]).await;
        assert_eq!(
            events,
            vec![
                AppEvent::VerificationEmailSending,
                AppEvent::VerificationEmailFailed(ResendError::TooManyRequests),
            ]
        );
    }

    #[tokio::test]
    async fn test_resend_generic_failure() {
        let api = FakeApi::new(Err(ResendError::Generic("timeout".into())));
        let (events, _) = run_commands(api, vec![AppCmd::ResendVerificationEmail]).await;
        assert_eq!(
            events,
            vec![
                AppEvent::VerificationEmailSending,
                AppEvent::VerificationEmailFailed(ResendError::Generic("timeout".into())),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_session() {
        let mut api = FakeApi::new(Ok(()));
        api.session = Some(SessionInfo {
            has_listings: true,
            notification_count: 2,
            ..SessionInfo::default()
        });
        let expected = api.session.clone();
        let (events, _) = run_commands(api, vec![AppCmd::FetchSession]).await;
        assert_eq!(events, vec![AppEvent::SessionFetched(expected)]);

        let mut api = FakeApi::new(Ok(()));
        api.session_fails = true;
        let (events, _) = run_commands(api, vec![AppCmd::FetchSession]).await;
        assert_eq!(events, vec![AppEvent::SessionFetchFailed]);
    }

    #[tokio::test]
    async fn test_backend_stops_when_senders_dropped() {
        let (events, api) = run_commands(FakeApi::new(Ok(())), vec![]).await;
        assert!(events.is_empty());
        assert_eq!(api.logout_calls.get(), 0);
    }
}
