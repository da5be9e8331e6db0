//! Recording Social API double for controller tests

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::registration::RegistrationInput;
use crate::domain::user::{UserId, UserProfile};
use crate::error::{Error, Result};
use crate::services::api::SocialApi;

/// A request the mock received
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ApiCall {
    FetchUser(UserId),
    Follow(UserId),
    Unfollow(UserId),
    Register(RegistrationInput),
}

/// Scripted [`SocialApi`]: unknown users and disabled endpoints fail with HTTP 500
#[derive(Default)]
pub(crate) struct MockApi {
    users: Mutex<HashMap<UserId, UserProfile>>,
    follow_fails: Mutex<bool>,
    register_fails: Mutex<bool>,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockApi {
    /// Serve `profile` under its own id
    pub fn with_user(self, profile: UserProfile) -> Self {
        let id = profile.id.clone().unwrap_or_default();
        self.users.lock().insert(id, profile);
        self
    }

    pub fn failing_follow(self) -> Self {
        *self.follow_fails.lock() = true;
        self
    }

    pub fn failing_register(self) -> Self {
        *self.register_fails.lock() = true;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().push(call);
    }

    fn server_error(path: String) -> Error {
        Error::Status {
            url: format!("http://mock{path}"),
            status: 500,
            body: "mock failure".to_string(),
        }
    }
}

#[async_trait]
impl SocialApi for MockApi {
    async fn fetch_user(&self, id: &UserId) -> Result<UserProfile> {
        self.record(ApiCall::FetchUser(id.clone()));
        self.users
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| Self::server_error(format!("/api/user/{id}")))
    }

    async fn follow(&self, id: &UserId) -> Result<()> {
        self.record(ApiCall::Follow(id.clone()));
        if *self.follow_fails.lock() {
            return Err(Self::server_error(format!("/api/followers/seguir/{id}")));
        }
        Ok(())
    }

    async fn unfollow(&self, id: &UserId) -> Result<()> {
        self.record(ApiCall::Unfollow(id.clone()));
        if *self.follow_fails.lock() {
            return Err(Self::server_error(format!("/api/followers/dejar-seguir/{id}")));
        }
        Ok(())
    }

    async fn register(&self, input: &RegistrationInput) -> Result<serde_json::Value> {
        self.record(ApiCall::Register(input.clone()));
        if *self.register_fails.lock() {
            return Err(Self::server_error("/api/auth/register/user".to_string()));
        }
        Ok(serde_json::json!({ "message": "User registered" }))
    }
}
