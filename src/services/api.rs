//! Social API
//!
//! The four endpoints the client consumes, behind a trait so controllers can
//! run against the HTTP implementation or a test double.

use async_trait::async_trait;

use crate::domain::registration::RegistrationInput;
use crate::domain::relationship::FollowAction;
use crate::domain::user::{UserId, UserProfile};
use crate::error::Result;

/// Remote social-network API
#[async_trait]
pub trait SocialApi: Send + Sync + 'static {
    /// `GET /api/user/{id}`
    async fn fetch_user(&self, id: &UserId) -> Result<UserProfile>;

    /// `POST /api/followers/seguir/{id}`
    async fn follow(&self, id: &UserId) -> Result<()>;

    /// `POST /api/followers/dejar-seguir/{id}`
    async fn unfollow(&self, id: &UserId) -> Result<()>;

    /// `POST /api/auth/register/user`; the response body is returned as-is
    async fn register(&self, input: &RegistrationInput) -> Result<serde_json::Value>;

    /// Dispatch a follow-state change to the matching endpoint
    async fn apply_follow_action(&self, id: &UserId, action: FollowAction) -> Result<()> {
        match action {
            FollowAction::Follow => self.follow(id).await,
            FollowAction::Unfollow => self.unfollow(id).await,
        }
    }
}
