//! Route table data model and the pure matcher behind the app shell.
//!
//! The table is plain data: an ordered list of [`RouteRecord`]s walked by
//! [`RouteTable::resolve`]. Nothing in here knows how pages are drawn; the
//! frontend maps each [`Page`] to a component and the CLI prints it.

mod error;
mod pages;
mod resolve;
mod table;

pub use error::{PathError, RouteError};
pub use pages::{HOME_PATH, Page, app_routes};
pub use resolve::{Failure, Outcome, RenderTree, Resolution, location_segments};
pub use table::{RoutePath, RouteRecord, RouteTable};
