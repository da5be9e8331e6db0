//! Session - Viewer Identity

use crate::domain::user::UserId;

/// Who is looking at the UI.
///
/// Handed to controllers at construction; nothing reads identity from
/// process-wide storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    viewer: Option<UserId>,
}

impl Session {
    /// Session of a signed-in viewer; a blank id is anonymous
    pub fn signed_in(viewer: UserId) -> Self {
        Self::from(Some(viewer))
    }

    /// Session with no known viewer
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn viewer(&self) -> Option<&UserId> {
        self.viewer.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.viewer.is_some()
    }
}

impl From<Option<UserId>> for Session {
    fn from(viewer: Option<UserId>) -> Self {
        Self {
            viewer: viewer.filter(|id| !id.is_blank()),
        }
    }
}
