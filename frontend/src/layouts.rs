use leptos::prelude::*;

use crate::components::{Footer, Header};

/// Page shell: header, the matched child route's view, footer.
///
/// `outlet` is handed in by the router rather than looked up from context.
#[component]
pub fn MainLayout<V>(outlet: V) -> impl IntoView
where
    V: IntoView + 'static,
{
    view! {
        <div class="min-h-screen">
            <Header/>
            <main class="content">{outlet}</main>
            <Footer/>
        </div>
    }
}
