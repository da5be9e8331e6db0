//! Theme - Colors for the native UI

pub mod colors;
