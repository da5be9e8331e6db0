//! AppEvent - Application Event Enum
//!
//! All events that controllers send to the UI layer.

use crate::app::navigation::Route;
use crate::state::toast_state::ToastKind;

/// Application events for controller -> UI communication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Show a transient notification
    Toast {
        kind: ToastKind,
        message_key: &'static str,
    },

    /// Switch the active view
    Navigate { route: Route },
}

impl AppEvent {
    /// Create a success toast event
    pub fn success(message_key: &'static str) -> Self {
        Self::Toast {
            kind: ToastKind::Success,
            message_key,
        }
    }

    /// Create an error toast event
    pub fn error(message_key: &'static str) -> Self {
        Self::Toast {
            kind: ToastKind::Error,
            message_key,
        }
    }

    /// Create a navigation event
    pub fn navigate(route: Route) -> Self {
        Self::Navigate { route }
    }
}
