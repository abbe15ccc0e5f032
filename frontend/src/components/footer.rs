use leptos::prelude::*;

pub const COPYRIGHT: &str = "© 2025 Vite React Template. All rights reserved.";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">{COPYRIGHT}</div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_text() {
        let html = view! { <Footer/> }.to_html();
        assert!(html.contains("Vite React Template"));
    }

    #[test]
    fn test_copyright_year() {
        let html = view! { <Footer/> }.to_html();
        assert!(html.contains("2025"));
    }

    #[test]
    fn test_all_rights_reserved() {
        let html = view! { <Footer/> }.to_html();
        assert!(html.contains("All rights reserved"));
    }
}
