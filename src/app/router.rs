// SPDX-License-Identifier: MPL-2.0
//! In-app navigation between routes.

use crate::domain::route::Route;

/// Current route plus every navigation performed, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Routes navigated to since start-up.
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Switches to `route`. Navigating to the current route is still
    /// recorded, like pushing the same URL twice.
    pub fn navigate(&mut self, route: Route) {
        log::info!("Navigate: {} -> {}", self.current.to_path(), route.to_path());
        self.history.push(route);
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_records_each_call() {
        let mut router = Router::default();
        router.navigate(Route::Profile);
        router.navigate(Route::Home(None));
        assert_eq!(router.current(), &Route::Home(None));
        assert_eq!(router.history(), &[Route::Profile, Route::Home(None)]);
    }

    #[test]
    fn new_router_has_no_history() {
        let router = Router::new(Route::Register);
        assert_eq!(router.current(), &Route::Register);
        assert!(router.history().is_empty());
    }
}
