//! Back-stack router.
//!
//! # Invariants
//! - The stack is never empty; its root is the start route (`home`).
//! - `navigate` never validates the route name; unknown names are pushed
//!   verbatim and left to the UI shell.
//! - `go_back` on the root is a no-op.

use crate::model::route::Route;
use log::debug;

/// Navigation stack owned by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    stack: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::home())
    }
}

impl Router {
    /// Creates a router whose root is `start`.
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    /// Pushes `route_name`, optionally joined with `param` as `name/param`.
    ///
    /// Returns the new current route.
    pub fn navigate(&mut self, route_name: &str, param: Option<&str>) -> &Route {
        let route = Route::from_parts(route_name, param);
        debug!(
            "event=nav_push module=navigation status=ok template={:?} depth={}",
            route.template(),
            self.stack.len() + 1
        );
        self.stack.push(route);
        self.current()
    }

    /// Pops the current route unless it is the root.
    ///
    /// Returns `true` when a route was popped.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            debug!("event=nav_pop module=navigation status=noop depth=1");
            return false;
        }
        self.stack.pop();
        debug!(
            "event=nav_pop module=navigation status=ok depth={}",
            self.stack.len()
        );
        true
    }

    /// Route on top of the stack.
    pub fn current(&self) -> &Route {
        // The stack always holds its root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Routes from root to top.
    pub fn stack(&self) -> &[Route] {
        self.stack.as_slice()
    }
}

/// Returns the named parameter of `route`, or `default` when absent.
pub fn extract_param(route: &Route, key: &str, default: &str) -> String {
    route.param(key).unwrap_or(default).to_string()
}
