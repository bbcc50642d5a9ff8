//! Route table listing.

use tabled::Tabled;

use repack_router::{ROUTES, Route, Target};

use crate::cli::GlobalOpts;
use crate::output;

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Path")]
    path: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Target")]
    target: String,
}

impl From<&Route> for RouteRow {
    fn from(r: &Route) -> Self {
        match r.target {
            Target::View(view) => Self {
                path: r.path,
                name: view.name(),
                target: "view".into(),
            },
            Target::Redirect(view) => Self {
                path: r.path,
                name: "",
                target: format!("redirect -> {}", view.path()),
            },
        }
    }
}

/// Space-separated list of every navigable path.
pub fn available_paths() -> String {
    ROUTES.iter().map(|r| r.path).collect::<Vec<_>>().join(" ")
}

pub fn handle(global: &GlobalOpts) {
    let out = output::render_list(&global.output, &ROUTES[..], |r| RouteRow::from(r), |r| {
        r.path.to_owned()
    });
    output::print_output(&out, global.quiet);
}
