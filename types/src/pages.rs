use std::fmt;

use serde::Serialize;

use crate::error::RouteError;
use crate::table::{RouteRecord, RouteTable};

/// Target of the "back to home" link on the fallback page.
pub const HOME_PATH: &str = "/";

/// Every view the route table can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Page {
    /// Header, content placeholder, footer.
    MainLayout,
    HomePage,
    /// 404 view. Also the fallback for render failures.
    PageNotFound,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Page::MainLayout => "MainLayout",
            Page::HomePage => "HomePage",
            Page::PageNotFound => "PageNotFound",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The application's route table: the shell at `/` with the home page as
/// its index, and the 404 page as the root fallback.
pub fn app_routes() -> Result<RouteTable<Page>, RouteError> {
    RouteTable::new(vec![
        RouteRecord::literal(HOME_PATH, Page::MainLayout)
            .with_error_element(Page::PageNotFound)
            .with_children(vec![RouteRecord::index(Page::HomePage)]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes_are_valid() {
        let table = app_routes().unwrap();
        assert_eq!(table.records().len(), 1);
        assert_eq!(table.records()[0].error_element, Some(Page::PageNotFound));
    }

    #[test]
    fn test_display_uses_component_names() {
        assert_eq!(Page::MainLayout.to_string(), "MainLayout");
        assert_eq!(Page::PageNotFound.to_string(), "PageNotFound");
    }
}
