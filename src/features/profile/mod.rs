//! Profile Header Feature

pub mod controller;
#[cfg(feature = "gui")]
pub mod page;
