//! Navigation port. The client performs a single navigation side effect,
//! redirecting to the login route when a session expires, and compares the
//! current route exactly to avoid redirect loops. Browser shells back this
//! with `window.location`; the in-memory adapter records navigations so the
//! expiry path is testable without a browser.

use std::sync::Mutex;

/// Route the client redirects to when the session expires.
pub const LOGIN_ROUTE: &str = "/login";

/// Active-view navigation as seen by the client.
pub trait Navigator: Send + Sync {
    fn current_route(&self) -> String;
    fn go_to(&self, route: &str);
}

/// In-memory navigator that tracks the current route and every navigation.
pub struct MemoryNavigator {
    current: Mutex<String>,
    visited: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    pub fn starting_at(route: &str) -> Self {
        Self {
            current: Mutex::new(route.to_string()),
            visited: Mutex::new(Vec::new()),
        }
    }

    /// Routes navigated to so far, in order.
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MemoryNavigator {
    fn current_route(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn go_to(&self, route: &str) {
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *current = route.to_string();
        self.visited
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(route.to_string());
    }
}
