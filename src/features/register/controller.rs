//! Register Controller
//!
//! Submits the sign-up form and routes to sign-in on success.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::app::navigation::Route;
use crate::domain::registration::RegistrationInput;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::i18n::keys;
use crate::services::SocialApi;
use crate::state::registration_state::RegistrationState;

/// Registration form controller
#[derive(Clone)]
pub struct RegisterController {
    api: Arc<dyn SocialApi>,
    events: flume::Sender<AppEvent>,
}

impl RegisterController {
    /// Create a new controller
    pub fn new(api: Arc<dyn SocialApi>, events: flume::Sender<AppEvent>) -> Self {
        Self { api, events }
    }

    /// Post the form fields as entered
    pub async fn send_registration(&self, input: &RegistrationInput) -> Result<serde_json::Value> {
        info!(email = %input.email, "Submitting registration");
        self.api.register(input).await
    }

    /// Apply a submission result
    pub fn apply_submit(&self, state: &mut RegistrationState, result: Result<serde_json::Value>) {
        match result {
            Ok(body) => {
                debug!(response = %body, "Registration accepted");
                state.finish_submit(true);
                self.emit(AppEvent::success(keys::TOAST_REGISTERED));
                self.emit(AppEvent::navigate(Route::SignIn));
            }
            Err(e) => {
                error!(error = %e, "Registration failed");
                state.finish_submit(false);
                self.emit(AppEvent::error(keys::TOAST_REGISTER_FAILED));
            }
        }
    }

    /// Submit the form.
    ///
    /// Returns false without a request while a submission is in flight.
    pub async fn submit(&self, state: &mut RegistrationState) -> bool {
        let Some(input) = state.begin_submit() else {
            debug!("Registration submit ignored while in flight");
            return false;
        };
        let result = self.send_registration(&input).await;
        self.apply_submit(state, result);
        true
    }

    fn emit(&self, event: AppEvent) {
        let _ = self.events.send(event);
    }
}
