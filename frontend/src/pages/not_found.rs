use leptos::prelude::*;
use leptos_router::components::A;
use route_types::HOME_PATH;

/// Shown for unknown locations and for views that failed to render.
/// The cause is not displayed.
#[component]
pub fn PageNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>
                "Sorry, the page you're looking for might have been removed, renamed, or never existed."
            </p>
            <A href=HOME_PATH>"Back to Homepage"</A>
        </div>
    }
}
