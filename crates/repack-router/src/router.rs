//! Navigation state machine.

use serde::Serialize;
use tracing::debug;

use crate::table::{self, Target};
use crate::view::View;

/// State the router is in after a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Location {
    View { view: View },
    /// The requested path is not in the route table. No redirect happens;
    /// the normalized path is kept so it can be reported.
    NotFound { path: String },
}

impl Location {
    pub fn view(&self) -> Option<View> {
        match self {
            Self::View { view } => Some(*view),
            Self::NotFound { .. } => None,
        }
    }

    /// Canonical path for this state.
    pub fn path(&self) -> &str {
        match self {
            Self::View { view } => view.path(),
            Self::NotFound { path } => path,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::View { view } => view.name(),
            Self::NotFound { .. } => "NotFound",
        }
    }
}

/// Resolve a requested path to a state without moving any router.
///
/// Redirect entries are followed once; the table guarantees a redirect
/// always lands on a view.
pub fn resolve(raw: &str) -> Location {
    let path = table::normalize(raw);
    match table::lookup(&path).map(|r| r.target) {
        Some(Target::View(view)) => Location::View { view },
        Some(Target::Redirect(view)) => {
            debug!(from = %path, to = view.path(), "redirect");
            Location::View { view }
        }
        None => Location::NotFound { path },
    }
}

/// Long-running navigation state machine.
///
/// Starts with no location; the first [`navigate`](Self::navigate) sets
/// the initial state. Keeps one step of history for [`back`](Self::back).
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Option<Location>,
    previous: Option<Location>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router whose initial state is whatever `path` resolves to.
    pub fn starting_at(path: &str) -> Self {
        let mut router = Self::new();
        router.navigate(path);
        router
    }

    pub fn current(&self) -> Option<&Location> {
        self.current.as_ref()
    }

    pub fn current_view(&self) -> Option<View> {
        self.current.as_ref().and_then(Location::view)
    }

    /// Move to the state `path` resolves to.
    ///
    /// Navigating to the state the router is already in changes nothing,
    /// history included.
    pub fn navigate(&mut self, path: &str) -> &Location {
        let next = resolve(path);
        if self.current.as_ref() == Some(&next) {
            return self.current.get_or_insert(next);
        }
        debug!(path, state = next.name(), "navigate");
        self.previous = self.current.take();
        self.current.insert(next)
    }

    /// Return to the previous state, if there is one.
    pub fn back(&mut self) -> Option<&Location> {
        let prev = self.previous.take()?;
        self.previous = self.current.replace(prev);
        self.current.as_ref()
    }
}
