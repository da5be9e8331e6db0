//! Social GUI Client Library
//!
//! View state, controllers and the HTTP client behind the social-network
//! client: a profile header with follow/unfollow and a registration form.
//! The native window and widgets are behind the `gui` feature.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
#[cfg(feature = "gui")]
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
#[cfg(feature = "gui")]
pub mod theme;
