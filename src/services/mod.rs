//! Service Layer
//!
//! Access to the remote social API and the async runtime it runs on.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Controllers                  │
//! │      (ProfileController, RegisterController) │
//! └──────────────────────────────────────────────┘
//!                        │ Arc<dyn SocialApi>
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │   HttpApi (reqwest)   ◀── run_in_tokio ──    │
//! └──────────────────────────────────────────────┘
//! ```

mod api;
mod http_api;
#[cfg(test)]
pub(crate) mod mock;
mod runtime;

pub use api::*;
pub use http_api::*;
pub use runtime::*;
