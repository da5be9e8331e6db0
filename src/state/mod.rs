//! State - View State Modules
//!
//! Plain state structs. In the GUI each lives in a GPUI entity or page;
//! controllers and tests drive them directly.

pub mod i18n_state;
pub mod navigation_state;
pub mod profile_state;
pub mod registration_state;
pub mod session_state;
pub mod toast_state;
