//! RegistrationState - Sign-up Form State

use crate::domain::registration::{RegistrationField, RegistrationInput};

/// State for the registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    input: RegistrationInput,
    /// Whether a submission is in flight
    submitting: bool,
}

impl RegistrationState {
    /// Replace a field's value with the input's full text
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        *self.input.get_mut(field) = value.into();
    }

    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Snapshot the fields for submission; `None` while a submission is in flight
    pub fn begin_submit(&mut self) -> Option<RegistrationInput> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.input.clone())
    }

    /// Settle a submission. Success discards the input; failure keeps it for correction.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.input = RegistrationInput::default();
        }
    }
}
