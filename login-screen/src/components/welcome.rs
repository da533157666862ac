//! Welcome screen component

use leptos::prelude::*;

/// placeholder user shown on the welcome screen.
/// not tied to any session; there is no login flow behind it.
pub const DEFAULT_USER: &str = "admin";

const GREETING_PREFIX: &str = "Welcome ";

/// heading text, e.g. "Welcome admin"
pub fn greeting() -> String {
    format!("{GREETING_PREFIX}{DEFAULT_USER}")
}

#[component]
pub fn WelcomeView() -> impl IntoView {
    view! {
        <div>
            <h1>{greeting()}</h1>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <WelcomeView /> }.to_html())
    }

    #[test]
    fn test_greeting_text() {
        assert_eq!(greeting(), "Welcome admin");
    }

    #[test]
    fn test_renders_single_heading() {
        let html = render();
        assert!(html.starts_with("<div>"));
        assert!(html.ends_with("</div>"));
        assert!(html.contains("<h1>Welcome admin</h1>"));
        assert_eq!(html.matches("<h1").count(), 1);
    }

    #[test]
    fn test_render_is_idempotent() {
        assert_eq!(render(), render());
    }
}
