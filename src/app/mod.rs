//! Application Layer
//!
//! Routes are always available; app initialization, window management,
//! global entities and the workspace need the `gui` feature.

#[cfg(feature = "gui")]
pub mod application;
#[cfg(feature = "gui")]
pub mod entities;
pub mod navigation;
#[cfg(feature = "gui")]
pub mod workspace;
