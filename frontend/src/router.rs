use std::sync::OnceLock;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use route_types::{Failure, Page, RouteTable, app_routes};
use thiserror::Error;

use crate::layouts::MainLayout;
use crate::pages::{HomePage, PageNotFound};

static ROUTES: OnceLock<RouteTable<Page>> = OnceLock::new();

/// The app's route table, built on first use and never modified.
pub fn route_table() -> &'static RouteTable<Page> {
    // app_routes() is a fixed table; `test_route_table_is_shared` covers it.
    ROUTES.get_or_init(|| app_routes().expect("built-in route table is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{0} needs a child view for its content placeholder")]
    MissingOutlet(Page),
    #[error("{0} has no content placeholder")]
    UnexpectedOutlet(Page),
}

// ── Page rendering ───────────────────────────────────────────────────────

pub fn render_page(page: &Page, outlet: Option<AnyView>) -> Result<AnyView, RenderError> {
    match (*page, outlet) {
        (Page::MainLayout, Some(outlet)) => Ok(view! { <MainLayout outlet=outlet/> }.into_any()),
        (Page::HomePage, None) => Ok(view! { <HomePage/> }.into_any()),
        (Page::PageNotFound, None) => Ok(view! { <PageNotFound/> }.into_any()),
        (page, Some(_)) => Err(RenderError::UnexpectedOutlet(page)),
        (page, None) => Err(RenderError::MissingOutlet(page)),
    }
}

/// Resolve `location` and build its view. Anything that cannot be placed
/// under an error element renders as blank.
pub fn render_location(table: &RouteTable<Page>, location: &str) -> AnyView {
    let resolution = match table.resolve(location) {
        Ok(resolution) => resolution,
        Err(err) => {
            log::warn!("{err}");
            return ().into_any();
        }
    };
    match resolution.compose(render_page) {
        Ok(view) => view,
        Err(Failure::NoMatch) => {
            log::warn!("no route for {location}");
            ().into_any()
        }
        Err(Failure::Render(err)) => {
            log::error!("rendering {location} failed: {err}");
            ().into_any()
        }
    }
}

/// Error element that guards `location`: the nearest one in its matched
/// chain. Shown when a mounted page raises an error at runtime.
pub fn fallback_for(table: &RouteTable<Page>, location: &str) -> Option<Page> {
    table
        .resolve(location)
        .ok()
        .and_then(|resolution| resolution.nearest_error_element().copied())
}

fn render_fallback(page: Page) -> AnyView {
    render_page(&page, None).unwrap_or_else(|err| {
        log::error!("fallback failed: {err}");
        ().into_any()
    })
}

// ── Base path handling ───────────────────────────────────────────────────

/// `/` and `/app/` become `""` and `/app`, the form `<Router base>` expects.
pub fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_owned()
}

/// Location relative to the router base. Paths outside the base are left
/// as they are and fall through to the error element.
pub fn strip_base<'a>(base: &str, pathname: &'a str) -> &'a str {
    if base.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => pathname,
    }
}

/// Renders whatever the current location resolves to. Re-runs on every
/// navigation.
///
/// None of the current pages return `Err`, so the boundary only guards
/// pages that become fallible later; resolution failures are handled by
/// [`render_location`].
#[component]
pub fn RouteView(#[prop(optional, into)] base: String) -> impl IntoView {
    let table = route_table();
    let pathname = use_location().pathname;
    let relative = Memo::new(move |_| strip_base(&base, &pathname.get()).to_owned());

    view! {
        <ErrorBoundary fallback=move |_| {
            fallback_for(table, &relative.get_untracked()).map(render_fallback)
        }>
            {move || render_location(table, &relative.get())}
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    #[test]
    fn test_route_table_is_shared() {
        assert!(std::ptr::eq(route_table(), route_table()));
        assert_eq!(route_table(), &app_routes().unwrap());
    }

    #[test]
    fn test_layout_requires_outlet() {
        assert_eq!(
            render_page(&Page::MainLayout, None).err(),
            Some(RenderError::MissingOutlet(Page::MainLayout))
        );
    }

    #[test]
    fn test_leaf_rejects_outlet() {
        let outlet = view! { <p>"x"</p> }.into_any();
        assert_eq!(
            render_page(&Page::HomePage, Some(outlet)).err(),
            Some(RenderError::UnexpectedOutlet(Page::HomePage))
        );
    }

    #[test]
    fn test_fallback_comes_from_matched_chain() {
        assert_eq!(fallback_for(route_table(), "/"), Some(Page::PageNotFound));
        assert_eq!(fallback_for(route_table(), "/nope"), Some(Page::PageNotFound));
        assert_eq!(fallback_for(route_table(), "nope"), None);
    }

    #[test]
    fn test_base_handling() {
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base("/app/"), "/app");
        assert_eq!(strip_base("", "/nope"), "/nope");
        assert_eq!(strip_base("/app", "/app"), "/");
        assert_eq!(strip_base("/app", "/app/nope"), "/nope");
        assert_eq!(strip_base("/app", "/application"), "/application");
    }

    fn render_at(location: &str) -> String {
        Owner::new().with(|| {
            provide_context(RequestUrl::new(location));
            view! {
                <Router>
                    <RouteView/>
                </Router>
            }
            .to_html()
        })
    }

    #[test]
    fn test_root_renders_home_inside_layout() {
        let html = render_at("/");
        let pos: Vec<usize> = ["<header", "Header", "Welcome", "Vite React Template"]
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n:?} in {html}")))
            .collect();
        assert!(pos.windows(2).all(|w| w[0] < w[1]), "{html}");
        assert!(!html.contains("Page Not Found"), "{html}");
    }

    #[test]
    fn test_unknown_location_renders_not_found_alone() {
        for location in ["/nope", "/a/b", "/nope?from=/"] {
            let html = render_at(location);
            assert!(html.contains("Page Not Found"), "{html}");
            assert!(html.contains(r#"href="/""#), "{html}");
            assert!(!html.contains("<header"), "{html}");
            assert!(!html.contains("<footer"), "{html}");
            assert!(!html.contains("Welcome"), "{html}");
        }
    }

    #[test]
    fn test_render_location_without_router_context() {
        // The home branch has no links, so it renders outside a <Router>.
        let html = Owner::new().with(|| render_location(route_table(), "/").to_html());
        assert!(html.contains("Welcome"), "{html}");
        let blank = Owner::new().with(|| render_location(route_table(), "relative").to_html());
        assert!(!blank.contains("Page Not Found"), "{blank}");
    }
}
