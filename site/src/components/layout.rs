//! Layout primitives: `Section`, `Card`, `Button`.
//!
//! All three are stateless and styled only through the classes in
//! [`crate::styles::SITE_CSS`].

use leptos::prelude::*;

use crate::types::ButtonVariant;

/// Titled, centered content block.
///
/// A missing or blank `title` drops the whole heading block (the subtitle
/// is ignored with it). A missing `id` leaves the element unanchored.
#[component]
pub fn Section(
    /// Element id, the in-page anchor target
    #[prop(optional, into)]
    id: Option<String>,
    /// Heading text
    #[prop(optional, into)]
    title: Option<String>,
    /// Text under the heading
    #[prop(optional, into)]
    subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    let subtitle = subtitle.filter(|s| !s.trim().is_empty());
    let header = title.filter(|t| !t.trim().is_empty()).map(move |title| {
        view! {
            <div class="section-header">
                <h2 class="section-title">{title}</h2>
                {subtitle.map(|subtitle| view! { <p class="section-subtitle">{subtitle}</p> })}
            </div>
        }
    });

    view! {
        <section id=id class="section">
            {header}
            {children()}
        </section>
    }
}

/// Bordered, rounded panel on the card surface.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

/// Anchor styled as a call to action.
///
/// `href` defaults to `"#"` (no navigation). The target is never checked.
#[component]
pub fn Button(
    /// Solid (default) or outline
    #[prop(optional)]
    variant: ButtonVariant,
    /// Link target
    #[prop(into, default = "#".to_string())]
    href: String,
    children: Children,
) -> impl IntoView {
    let class = match variant {
        ButtonVariant::Solid => "btn btn-solid",
        ButtonVariant::Outline => "btn btn-outline",
    };

    view! {
        <a href=href class=class>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn section_renders_title_and_subtitle() {
        let html = view! {
            <Section id="about" title="About Us" subtitle="Who we are">
                <p>"body"</p>
            </Section>
        }
        .to_html();

        assert!(html.contains(r#"id="about""#));
        assert!(html.contains("About Us"));
        assert!(html.contains("Who we are"));
        assert!(html.contains("body"));
    }

    #[test]
    fn section_without_title_has_no_heading() {
        let html = view! {
            <Section id="x" subtitle="orphan subtitle">
                <p>"body"</p>
            </Section>
        }
        .to_html();

        assert!(!html.contains("section-header"));
        assert!(!html.contains("<h2"));
        assert!(!html.contains("orphan subtitle"));
        assert!(html.contains("body"));
    }

    #[test]
    fn section_with_blank_title_has_no_heading() {
        let html = view! {
            <Section title="" subtitle="">
                <p>"body"</p>
            </Section>
        }
        .to_html();

        assert!(!html.contains("<h2"));
        assert!(!html.contains("id="));
    }

    #[test]
    fn section_title_without_subtitle() {
        let html = view! {
            <Section id="team" title="Our Team">
                <p>"body"</p>
            </Section>
        }
        .to_html();

        assert!(html.contains("Our Team"));
        assert!(!html.contains("section-subtitle"));
    }

    #[test]
    fn card_wraps_children() {
        let html = view! { <Card><h3>"Inside"</h3></Card> }.to_html();
        assert!(html.contains(r#"class="card""#));
        assert!(html.contains("Inside"));
    }

    #[test]
    fn button_defaults_to_solid_and_hash() {
        let html = view! { <Button>"Send Message"</Button> }.to_html();
        assert!(html.contains(r##"href="#""##));
        assert!(html.contains("btn-solid"));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn outline_button_keeps_unknown_anchor() {
        let html = view! {
            <Button href="#nowhere" variant=ButtonVariant::Outline>"Join"</Button>
        }
        .to_html();
        assert!(html.contains(r##"href="#nowhere""##));
        assert!(html.contains("btn-outline"));
    }
}
