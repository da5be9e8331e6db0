//! Relationship - Viewer/Subject Follow State

use crate::domain::user::{UserId, UserProfile};
use crate::i18n::keys;

/// Follow relationship between the viewer and the subject being viewed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relationship {
    /// Viewer follows subject
    pub is_following: bool,
    /// Subject follows viewer
    pub is_followed_by: bool,
}

impl Relationship {
    /// Derive the relationship from list membership.
    ///
    /// An anonymous viewer is never in either list.
    pub fn derive(subject: &UserProfile, viewer: Option<&UserId>) -> Self {
        match viewer {
            Some(viewer) => Self {
                is_following: subject.has_follower(viewer),
                is_followed_by: subject.follows(viewer),
            },
            None => Self::default(),
        }
    }

    /// Label shown on the follow button
    pub fn label(&self) -> FollowLabel {
        if self.is_following {
            FollowLabel::Following
        } else if self.is_followed_by {
            FollowLabel::FollowBack
        } else {
            FollowLabel::Follow
        }
    }

    /// Request a click on the follow button issues
    pub fn next_action(&self) -> FollowAction {
        if self.is_following {
            FollowAction::Unfollow
        } else {
            FollowAction::Follow
        }
    }
}

/// Follow button label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowLabel {
    Following,
    FollowBack,
    Follow,
}

impl FollowLabel {
    /// Get the translation key for the label
    pub fn key(&self) -> &'static str {
        match self {
            FollowLabel::Following => keys::PROFILE_FOLLOWING,
            FollowLabel::FollowBack => keys::PROFILE_FOLLOW_BACK,
            FollowLabel::Follow => keys::PROFILE_FOLLOW,
        }
    }
}

/// A follow-state change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowAction {
    Follow,
    Unfollow,
}

impl FollowAction {
    /// `is_following` once the request succeeds
    pub fn resulting_state(&self) -> bool {
        matches!(self, FollowAction::Follow)
    }

    /// Toast shown when the request succeeds
    pub fn success_key(&self) -> &'static str {
        match self {
            FollowAction::Follow => keys::TOAST_FOLLOWED,
            FollowAction::Unfollow => keys::TOAST_UNFOLLOWED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(followers: &[&str], following: &[&str]) -> UserProfile {
        UserProfile {
            id: Some(UserId::from("subject")),
            followers: followers.iter().copied().map(UserId::from).collect(),
            following: following.iter().copied().map(UserId::from).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_viewer_in_followers_is_following() {
        let viewer = UserId::from("me");
        for following in [&[][..], &["me"][..]] {
            let rel = Relationship::derive(&profile(&["x", "me"], following), Some(&viewer));
            assert!(rel.is_following);
            assert_eq!(rel.label(), FollowLabel::Following);
            assert_eq!(rel.next_action(), FollowAction::Unfollow);
        }
    }

    #[test]
    fn test_viewer_only_in_following_reads_follow_back() {
        let viewer = UserId::from("me");
        let rel = Relationship::derive(&profile(&["x"], &["me"]), Some(&viewer));
        assert!(!rel.is_following);
        assert!(rel.is_followed_by);
        assert_eq!(rel.label(), FollowLabel::FollowBack);
        assert_eq!(rel.next_action(), FollowAction::Follow);
    }

    #[test]
    fn test_viewer_in_neither_list_reads_follow() {
        let viewer = UserId::from("me");
        let rel = Relationship::derive(&profile(&["x"], &["y"]), Some(&viewer));
        assert_eq!(rel, Relationship::default());
        assert_eq!(rel.label(), FollowLabel::Follow);
    }

    #[test]
    fn test_anonymous_viewer_has_no_relationship() {
        let rel = Relationship::derive(&profile(&[""], &[""]), None);
        assert_eq!(rel.label(), FollowLabel::Follow);
    }

    #[test]
    fn test_follow_action_outcomes() {
        assert!(FollowAction::Follow.resulting_state());
        assert!(!FollowAction::Unfollow.resulting_state());
        assert_ne!(
            FollowAction::Follow.success_key(),
            FollowAction::Unfollow.success_key()
        );
    }
}
