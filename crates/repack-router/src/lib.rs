//! View routing for the repack console.
//!
//! A fixed route table maps paths to [`View`]s, with `/` redirecting to
//! [`DEFAULT_VIEW`]. [`Router`] walks that table as a synchronous state
//! machine. Paths outside the table land in [`Location::NotFound`].
//! Nothing here talks to the backend.

pub mod router;
pub mod table;
pub mod view;

pub use router::{Location, Router, resolve};
pub use table::{DEFAULT_VIEW, ROUTES, Route, Target};
pub use view::View;
