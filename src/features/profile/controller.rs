//! Profile Controller
//!
//! Loads the subject's profile and toggles the follow relationship.
//!
//! Each operation is split into a synchronous `begin` on [`ProfileState`], an
//! async API call, and a synchronous `apply` of the result, so the GUI can run
//! the call on the tokio runtime while the state stays on the UI thread. The
//! `load` and `toggle_follow` helpers run all three steps in sequence.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::relationship::FollowAction;
use crate::domain::user::{UserId, UserProfile};
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::i18n::keys;
use crate::services::SocialApi;
use crate::state::profile_state::{ProfileState, Ticket};
use crate::state::session_state::Session;

/// Profile header controller
#[derive(Clone)]
pub struct ProfileController {
    api: Arc<dyn SocialApi>,
    session: Session,
    events: flume::Sender<AppEvent>,
}

impl ProfileController {
    /// Create a new controller for the given viewer
    pub fn new(api: Arc<dyn SocialApi>, session: Session, events: flume::Sender<AppEvent>) -> Self {
        Self {
            api,
            session,
            events,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ==================== Load ====================

    /// Fetch the subject's profile
    pub async fn fetch_profile(&self, subject: &UserId) -> Result<UserProfile> {
        debug!(subject = %subject, "Fetching profile");
        self.api.fetch_user(subject).await
    }

    /// Apply a load result to the state it was issued from
    pub fn apply_load(&self, state: &mut ProfileState, ticket: Ticket, result: Result<UserProfile>) {
        if !state.is_current(ticket) {
            debug!("Dropping stale profile response");
            return;
        }

        match result {
            Ok(profile) => {
                info!(
                    subject = ?state.subject(),
                    followers = profile.followers_count(),
                    following = profile.following_count(),
                    "Profile loaded"
                );
                state.apply_profile(ticket, profile, self.session.viewer());
            }
            Err(e) => {
                error!(error = %e, "Failed to load profile");
                state.fail_load(ticket);
                self.emit(AppEvent::error(keys::TOAST_PROFILE_LOAD_FAILED));
            }
        }
    }

    /// Mount `subject` and load its profile
    pub async fn load(&self, state: &mut ProfileState, subject: UserId) {
        let ticket = state.mount(subject.clone());
        let result = self.fetch_profile(&subject).await;
        self.apply_load(state, ticket, result);
    }

    // ==================== Follow toggle ====================

    /// Send a follow or unfollow request for `subject`
    pub async fn send_follow_action(&self, subject: &UserId, action: FollowAction) -> Result<()> {
        debug!(subject = %subject, ?action, "Updating follow state");
        self.api.apply_follow_action(subject, action).await
    }

    /// Apply a toggle result to the state it was issued from
    pub fn apply_toggle(
        &self,
        state: &mut ProfileState,
        ticket: Ticket,
        action: FollowAction,
        result: Result<()>,
    ) {
        if !state.is_current(ticket) {
            debug!(?action, "Dropping stale follow response");
            return;
        }

        match result {
            Ok(()) => {
                info!(?action, "Follow state updated");
                state.finish_toggle(ticket, action, true);
                self.emit(AppEvent::success(action.success_key()));
            }
            Err(e) => {
                error!(error = %e, ?action, "Failed to update follow state");
                state.finish_toggle(ticket, action, false);
                self.emit(AppEvent::error(keys::TOAST_FOLLOW_FAILED));
            }
        }
    }

    /// Follow or unfollow the loaded subject.
    ///
    /// Returns false without a request when the button is disabled.
    pub async fn toggle_follow(&self, state: &mut ProfileState) -> bool {
        let Some(subject) = state.subject().cloned() else {
            return false;
        };
        let Some((ticket, action)) = state.begin_toggle() else {
            debug!("Follow toggle ignored while disabled");
            return false;
        };

        let result = self.send_follow_action(&subject, action).await;
        self.apply_toggle(state, ticket, action, result);
        true
    }

    fn emit(&self, event: AppEvent) {
        let _ = self.events.send(event);
    }
}
