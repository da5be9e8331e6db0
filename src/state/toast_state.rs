//! ToastState - Transient Notifications with Ring Buffer

use chrono::{DateTime, Duration, Local};
use std::collections::VecDeque;

use crate::constants::{TOAST_CAPACITY, TOAST_TTL_SECS};

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single toast
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message_key: &'static str,
    pub created_at: DateTime<Local>,
}

/// Toasts currently on screen, oldest first
#[derive(Debug)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
    capacity: usize,
    next_id: u64,
}

impl ToastState {
    /// Create a new toast state showing at most `capacity` toasts
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Show a toast, evicting the oldest when full
    pub fn push(&mut self, kind: ToastKind, message_key: &'static str, now: DateTime<Local>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.capacity == 0 {
            return id;
        }
        if self.toasts.len() >= self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            id,
            kind,
            message_key,
            created_at: now,
        });
        id
    }

    /// Show a toast stamped with the current time
    pub fn push_now(&mut self, kind: ToastKind, message_key: &'static str) -> u64 {
        self.push(kind, message_key, Local::now())
    }

    /// Remove a toast by ID; returns whether it was showing
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.toasts.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drop toasts older than the display TTL; returns how many were removed
    pub fn expire(&mut self, now: DateTime<Local>) -> usize {
        let ttl = Duration::seconds(TOAST_TTL_SECS);
        let before = self.toasts.len();
        self.toasts.retain(|t| now - t.created_at < ttl);
        before - self.toasts.len()
    }

    /// Get all toasts
    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(TOAST_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest() {
        let mut state = ToastState::new(2);
        let now = Local::now();
        state.push(ToastKind::Success, "a", now);
        state.push(ToastKind::Error, "b", now);
        state.push(ToastKind::Error, "c", now);

        let keys: Vec<_> = state.toasts().iter().map(|t| t.message_key).collect();
        assert_eq!(keys, vec!["b", "c"]);
        assert_eq!(state.toasts().back().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut state = ToastState::default();
        let first = state.push_now(ToastKind::Success, "a");
        let second = state.push_now(ToastKind::Success, "b");

        assert!(state.dismiss(first));
        assert!(!state.dismiss(first));
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts().back().map(|t| t.id), Some(second));
    }

    #[test]
    fn test_expire_removes_stale_toasts() {
        let mut state = ToastState::default();
        let now = Local::now();
        state.push(ToastKind::Error, "old", now - Duration::seconds(TOAST_TTL_SECS + 1));
        state.push(ToastKind::Success, "fresh", now);

        assert_eq!(state.expire(now), 1);
        assert_eq!(state.toasts().back().map(|t| t.message_key), Some("fresh"));
    }

    #[test]
    fn test_zero_capacity_shows_nothing() {
        let mut state = ToastState::new(0);
        state.push_now(ToastKind::Success, "a");
        assert!(state.is_empty());
    }
}
