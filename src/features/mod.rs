//! Features - Vertical Feature Slices
//!
//! Each feature contains its controller and, with the `gui` feature, its page.

pub mod profile;
pub mod register;
