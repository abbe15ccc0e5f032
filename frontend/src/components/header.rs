use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container">"Header"</div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_text() {
        let html = view! { <Header/> }.to_html();
        assert!(html.contains("Header"));
        assert!(html.contains("<header"));
    }
}
