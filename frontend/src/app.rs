use leptos::prelude::*;
use leptos_router::components::Router;

use crate::router::{RouteView, normalize_base};

/// `base` is the prefix the app is served under, `/` for the whole origin.
#[component]
pub fn App(#[prop(into)] base: String) -> impl IntoView {
    let base = normalize_base(&base);
    let router_base = base.clone();

    view! {
        <Router base=router_base>
            <RouteView base/>
        </Router>
    }
}
