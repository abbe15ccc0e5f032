use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Welcome"</h1>
            <p>"A single-page app with a shared layout, a router and a 404 page."</p>
        </section>
    }
}
