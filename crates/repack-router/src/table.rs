//! Declarative route table.
//!
//! The table is a fixed `const` array checked at compile time: paths are
//! unique, every view appears exactly once, and each redirect points at a
//! view. Lookup normalizes the requested path the way the browser router
//! does by default (no query or fragment, optional trailing slash,
//! case-insensitive).

use serde::Serialize;
use strum::EnumCount;

use crate::view::View;

/// Where a route leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "view", rename_all = "lowercase")]
pub enum Target {
    View(View),
    Redirect(View),
}

/// One `(path, target)` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub target: Target,
}

impl Route {
    const fn view(view: View) -> Self {
        Self {
            path: view.path(),
            target: Target::View(view),
        }
    }

    const fn redirect(path: &'static str, to: View) -> Self {
        Self {
            path,
            target: Target::Redirect(to),
        }
    }
}

/// View the root path redirects to.
pub const DEFAULT_VIEW: View = View::Network;

pub const ROUTES: [Route; 6] = [
    Route::redirect("/", DEFAULT_VIEW),
    Route::view(View::Network),
    Route::view(View::NftRules),
    Route::view(View::Rules),
    Route::view(View::Test),
    Route::view(View::Logs),
];

const _: () = assert!(is_consistent(&ROUTES), "route table is inconsistent");

const fn same_path(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn is_consistent(table: &[Route]) -> bool {
    let mut seen = [false; View::COUNT];
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if same_path(table[i].path, table[j].path) {
                return false;
            }
            j += 1;
        }
        if let Target::View(view) = table[i].target {
            if seen[view.ordinal()] {
                return false;
            }
            seen[view.ordinal()] = true;
        }
        i += 1;
    }
    let mut k = 0;
    while k < View::COUNT {
        if !seen[k] {
            return false;
        }
        k += 1;
    }
    true
}

/// Strip query and fragment, force a leading slash, drop one trailing
/// slash and lowercase.
pub fn normalize(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let mut path = raw[..end].trim().to_ascii_lowercase();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

/// Look up an already-normalized path.
pub fn lookup(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}
