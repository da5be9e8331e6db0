//! Eventing - Controller to UI Messages

pub mod app_event;
