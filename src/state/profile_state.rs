//! ProfileState - Profile Header View State
//!
//! Holds the subject being viewed, its loaded profile and the derived
//! relationship. Every request is tied to a [`Ticket`]; mounting another
//! subject or unmounting bumps the generation, so late responses are dropped.

use crate::domain::relationship::{FollowAction, FollowLabel, Relationship};
use crate::domain::user::{UserId, UserProfile};

/// Binds an in-flight request to the view generation that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// State of the profile header
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    subject: Option<UserId>,
    loading: bool,
    profile: Option<UserProfile>,
    relationship: Relationship,
    toggle_in_flight: bool,
    mounted: bool,
    generation: u64,
}

impl ProfileState {
    /// Start showing `subject`; the returned ticket belongs to its profile load
    pub fn mount(&mut self, subject: UserId) -> Ticket {
        self.generation += 1;
        self.subject = Some(subject);
        self.loading = true;
        self.profile = None;
        self.relationship = Relationship::default();
        self.toggle_in_flight = false;
        self.mounted = true;
        self.ticket()
    }

    /// Stop showing the subject; pending responses become stale
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.mounted = false;
        self.loading = false;
        self.toggle_in_flight = false;
    }

    /// Whether a response carrying `ticket` may still touch this state
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.mounted && ticket.generation == self.generation
    }

    /// Store a loaded profile and derive the relationship; false when stale
    pub fn apply_profile(
        &mut self,
        ticket: Ticket,
        profile: UserProfile,
        viewer: Option<&UserId>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.relationship = Relationship::derive(&profile, viewer);
        self.profile = Some(profile);
        self.loading = false;
        true
    }

    /// Leave the view non-loading with no data; false when stale
    pub fn fail_load(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.profile = None;
        self.relationship = Relationship::default();
        self.loading = false;
        true
    }

    /// Claim the follow button.
    ///
    /// Returns `None` while nothing is loaded or another toggle is in flight.
    pub fn begin_toggle(&mut self) -> Option<(Ticket, FollowAction)> {
        if !self.can_toggle() {
            return None;
        }
        self.toggle_in_flight = true;
        Some((self.ticket(), self.relationship.next_action()))
    }

    /// Settle a toggle; the flag only changes on success. False when stale.
    pub fn finish_toggle(&mut self, ticket: Ticket, action: FollowAction, succeeded: bool) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.toggle_in_flight = false;
        if succeeded {
            self.relationship.is_following = action.resulting_state();
        }
        true
    }

    fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
        }
    }

    // ==================== Getters ====================

    pub fn subject(&self) -> Option<&UserId> {
        self.subject.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_following(&self) -> bool {
        self.relationship.is_following
    }

    pub fn is_followed_by(&self) -> bool {
        self.relationship.is_followed_by
    }

    pub fn follow_label(&self) -> FollowLabel {
        self.relationship.label()
    }

    pub fn is_toggle_in_flight(&self) -> bool {
        self.toggle_in_flight
    }

    /// Whether the follow button is enabled
    pub fn can_toggle(&self) -> bool {
        self.mounted && !self.loading && !self.toggle_in_flight && self.profile.is_some()
    }
}
