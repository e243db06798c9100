use std::collections::HashSet;

use super::session::SessionSnapshot;

/// Visibility of the missing-information reminder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateState {
    pub is_showing: bool,
    pub has_been_shown_once: bool,
}

/// Decides whether the reminder should open for `snapshot`.
///
/// The gate only ever opens the reminder. Closing it is the job of
/// [`dismiss`], so a state that is already showing stays that way.
pub fn evaluate(
    snapshot: &SessionSnapshot,
    previous_path: &str,
    state: GateState,
    allowlist: &HashSet<String>,
) -> GateState {
    let logged_in = snapshot.user_id.is_some();
    let email_unverified = logged_in && !snapshot.email_verified;
    let payment_missing = logged_in && !snapshot.payment_setup_complete;
    let info_missing = email_unverified || (snapshot.has_listings && payment_missing);

    let path_changed = snapshot.current_path != previous_path;
    let not_reminded_yet = !state.is_showing && !state.has_been_shown_once;
    let eligible_moment = not_reminded_yet || path_changed;

    // Order emails go out when a booking starts, so a customer with orders
    // will be looking for one soon.
    let has_activity = snapshot.has_listings || snapshot.has_orders == Some(true);
    let is_allowlisted = allowlist.contains(&snapshot.current_path);

    if info_missing && !is_allowlisted && has_activity && eligible_moment {
        GateState {
            is_showing: true,
            ..state
        }
    } else {
        state
    }
}

pub fn dismiss(_state: GateState) -> GateState {
    GateState {
        is_showing: false,
        has_been_shown_once: true,
    }
}

/// Owns the gate state together with the path it was last evaluated on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderGate {
    state: GateState,
    previous_path: Option<String>,
}

impl ReminderGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_showing(&self) -> bool {
        self.state.is_showing
    }

    /// Evaluates a fresh snapshot and remembers its path for the next call.
    /// The first observation has no earlier path, so it never counts as a
    /// path change.
    pub fn observe(&mut self, snapshot: &SessionSnapshot, allowlist: &HashSet<String>) -> GateState {
        let previous_path = self
            .previous_path
            .take()
            .unwrap_or_else(|| snapshot.current_path.clone());
        let next = evaluate(snapshot, &previous_path, self.state, allowlist);
        if next != self.state {
            tracing::debug!(path = %snapshot.current_path, "missing information reminder opened");
        }
        self.state = next;
        self.previous_path = Some(snapshot.current_path.clone());
        next
    }

    pub fn dismiss(&mut self) {
        self.state = dismiss(self.state);
    }
}

/// Which reminder body to show for a loaded user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderContent {
    VerifyEmail,
    ConnectPayout,
}

impl ReminderContent {
    pub fn for_user(user: &super::session::CurrentUser) -> Option<Self> {
        if user.email_unverified() {
            Some(Self::VerifyEmail)
        } else if user.payout_missing() {
            Some(Self::ConnectPayout)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::{CurrentUser, UserAttributes, UserId};

    fn snapshot(path: &str) -> SessionSnapshot {
        SessionSnapshot {
            user_id: Some(UserId("u1".into())),
            email_verified: false,
            payment_setup_complete: true,
            has_listings: true,
            has_orders: None,
            current_path: path.to_string(),
        }
    }

    fn allowlist() -> HashSet<String> {
        HashSet::from(["/login".to_string()])
    }

    #[test]
    fn test_shows_on_first_evaluation() {
        let next = evaluate(&snapshot("/listings"), "/listings", GateState::default(), &allowlist());
        assert_eq!(
            next,
            GateState {
                is_showing: true,
                has_been_shown_once: false
            }
        );
    }

    #[test]
    fn test_allowlisted_path_keeps_state() {
        let next = evaluate(&snapshot("/login"), "/login", GateState::default(), &allowlist());
        assert_eq!(next, GateState::default());

        let seen = dismiss(GateState::default());
        let next = evaluate(&snapshot("/login"), "/listings", seen, &allowlist());
        assert_eq!(next, seen);
    }

    #[test]
    fn test_anonymous_user_is_never_reminded() {
        let mut snap = snapshot("/listings");
        snap.user_id = None;
        snap.has_orders = Some(true);

        for state in [GateState::default(), dismiss(GateState::default())] {
            assert_eq!(evaluate(&snap, "/elsewhere", state, &allowlist()), state);
        }
    }

    #[test]
    fn test_dismissed_reminder_stays_hidden_on_same_path() {
        let shown = evaluate(&snapshot("/listings"), "/listings", GateState::default(), &allowlist());
        let dismissed = dismiss(shown);
        assert_eq!(
            dismissed,
            GateState {
                is_showing: false,
                has_been_shown_once: true
            }
        );

        let next = evaluate(&snapshot("/listings"), "/listings", dismissed, &allowlist());
        assert_eq!(next, dismissed);
    }

    #[test]
    fn test_path_change_reopens_after_dismissal() {
        let dismissed = dismiss(GateState::default());
        let next = evaluate(&snapshot("/inbox"), "/listings", dismissed, &allowlist());
        assert_eq!(
            next,
            GateState {
                is_showing: true,
                has_been_shown_once: true
            }
        );
    }

    #[test]
    fn test_missing_payout_needs_listings() {
        let mut snap = snapshot("/inbox");
        snap.email_verified = true;
        snap.payment_setup_complete = false;
        snap.has_listings = false;
        snap.has_orders = Some(true);
        assert_eq!(evaluate(&snap, "/inbox", GateState::default(), &allowlist()), GateState::default());

        snap.has_listings = true;
        assert!(evaluate(&snap, "/inbox", GateState::default(), &allowlist()).is_showing);
    }

    #[test]
    fn test_requires_listings_or_orders() {
        let mut snap = snapshot("/inbox");
        snap.has_listings = false;
        snap.has_orders = None;
        assert!(!evaluate(&snap, "/inbox", GateState::default(), &allowlist()).is_showing);

        snap.has_orders = Some(false);
        assert!(!evaluate(&snap, "/inbox", GateState::default(), &allowlist()).is_showing);

        snap.has_orders = Some(true);
        assert!(evaluate(&snap, "/inbox", GateState::default(), &allowlist()).is_showing);
    }

    #[test]
    fn test_never_forces_hide() {
        let showing = GateState {
            is_showing: true,
            has_been_shown_once: false,
        };
        let mut snap = snapshot("/login");
        snap.email_verified = true;
        assert_eq!(evaluate(&snap, "/listings", showing, &allowlist()), showing);
    }

    #[test]
    fn test_gate_tracks_previous_path() {
        let mut gate = ReminderGate::new();
        assert!(gate.observe(&snapshot("/listings"), &allowlist()).is_showing);

        gate.dismiss();
        assert!(!gate.observe(&snapshot("/listings"), &allowlist()).is_showing);
        assert!(!gate.observe(&snapshot("/listings"), &allowlist()).is_showing);
        assert!(gate.observe(&snapshot("/inbox"), &allowlist()).is_showing);
        assert!(gate.state().has_been_shown_once);
    }

    #[test]
    fn test_gate_first_observation_on_allowlisted_path() {
        let mut gate = ReminderGate::new();
        assert!(!gate.observe(&snapshot("/login"), &allowlist()).is_showing);
        assert!(gate.observe(&snapshot("/listings"), &allowlist()).is_showing);
    }

    #[test]
    fn test_reminder_content_prefers_email() {
        let mut user = CurrentUser {
            id: Some(UserId("u1".into())),
            attributes: UserAttributes::default(),
        };
        assert_eq!(ReminderContent::for_user(&user), Some(ReminderContent::VerifyEmail));

        user.attributes.email_verified = true;
        assert_eq!(ReminderContent::for_user(&user), Some(ReminderContent::ConnectPayout));

        user.attributes.stripe_connected = true;
        assert_eq!(ReminderContent::for_user(&user), None);

        assert_eq!(ReminderContent::for_user(&CurrentUser::default()), None);
    }
}
