//! AppEntities - Global Entity Handles
//!
//! Shared GPUI entities, split by what changes together. Per-page state
//! (profile, registration form) is owned by the page views instead.

use gpui::{App, AppContext, Entity, Global};

use crate::app::navigation::Route;
use crate::constants::TOAST_CAPACITY;
use crate::i18n::Locale;
use crate::state::{
    i18n_state::I18nState, navigation_state::NavigationState, toast_state::ToastState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Active route and history
    pub navigation: Entity<NavigationState>,
    /// Transient notifications
    pub toasts: Entity<ToastState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(start: Route, locale: Locale, cx: &mut App) -> Self {
        Self {
            navigation: cx.new(|_| NavigationState::new(start)),
            toasts: cx.new(|_| ToastState::new(TOAST_CAPACITY)),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
