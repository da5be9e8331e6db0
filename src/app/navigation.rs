//! Navigation - Application Routes
//!
//! Defines the views the application can show.

use crate::domain::user::UserId;

/// Available routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Registration form
    #[default]
    Register,
    /// Sign-in view, reached after a successful registration
    SignIn,
    /// Profile header of a subject
    Profile(UserId),
}

impl Route {
    /// Get the translation key for the route title
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Register => "app.register",
            Route::SignIn => "app.sign_in",
            Route::Profile(_) => "app.profile",
        }
    }

    /// Web path of the same view, used in logs
    pub fn path(&self) -> String {
        match self {
            Route::Register => "/auth/register".to_string(),
            Route::SignIn => "/auth/sign-in".to_string(),
            Route::Profile(id) => format!("/client/userprofile/{id}"),
        }
    }
}
