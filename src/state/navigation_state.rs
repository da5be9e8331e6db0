//! NavigationState - Active Route and Back Stack

use tracing::debug;

use crate::app::navigation::Route;

/// State for route navigation
#[derive(Debug, Default)]
pub struct NavigationState {
    /// Currently active route
    pub current: Route,
    /// Previously visited routes, most recent last
    history: Vec<Route>,
}

impl NavigationState {
    /// Start at a specific route
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    /// Navigate to a route; returns false when already there
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current == route {
            return false;
        }
        debug!(from = %self.current.path(), to = %route.path(), "Navigating");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        true
    }

    /// Return to the previous route
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.current = route;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
