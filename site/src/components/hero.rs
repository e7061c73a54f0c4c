//! Hero header: headline, CTAs and partner mark on the left, highlight card
//! on the right.

use leptos::prelude::*;

use super::{Button, Card, ICON_ARROW_RIGHT, ICON_CHECK_CIRCLE, Icon, Section};
use crate::types::{HeroContent, SectionId};

/// Faint grid drawn behind the hero.
#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="hero-backdrop" aria-hidden="true">
            <svg xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <pattern id="hero-grid" width="32" height="32" patternUnits="userSpaceOnUse">
                        <path d="M 32 0 L 0 0 0 32" fill="none" stroke-width="0.5"></path>
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#hero-grid)"></rect>
            </svg>
        </div>
    }
}

/// Page header, anchored at `#home`.
#[component]
pub fn Hero(content: HeroContent) -> impl IntoView {
    let HeroContent {
        headline,
        headline_accent,
        tagline,
        primary_cta,
        secondary_cta,
        partner,
        highlights,
    } = content;

    let highlights = highlights
        .into_iter()
        .map(|item| {
            view! {
                <div class="highlight">
                    <Icon path=ICON_CHECK_CIRCLE size="24" class="accent" />
                    <div>
                        <h3>{item.title}</h3>
                        <p>{item.text}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header id=SectionId::Home.anchor() class="hero">
            <Backdrop />
            <Section>
                <div class="hero-grid">
                    <div>
                        <h1 class="hero-title">
                            {format!("{} ", headline)}
                            <span class="accent">{headline_accent}</span>
                        </h1>
                        <p class="hero-tagline">{tagline}</p>
                        <div class="hero-actions">
                            <Button href=primary_cta.href variant=primary_cta.variant>
                                {primary_cta.label}
                                <Icon path=ICON_ARROW_RIGHT size="18" />
                            </Button>
                            <Button href=secondary_cta.href variant=secondary_cta.variant>
                                {secondary_cta.label}
                            </Button>
                        </div>
                        <div class="hero-partner muted">
                            <img class="partner-logo" src=partner.logo_url alt=partner.name />
                            <span>{partner.caption}</span>
                        </div>
                    </div>
                    <Card>
                        <div class="highlights">{highlights}</div>
                    </Card>
                </div>
            </Section>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(content: HeroContent) -> String {
        view! { <Hero content=content /> }.to_html()
    }

    #[test]
    fn anchored_at_home() {
        let html = render(HeroContent::default());
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains(r#"<header id="home" class="hero">"#));
    }

    #[test]
    fn headline_accent_and_ctas() {
        let html = render(HeroContent::default());
        assert!(html.contains("Your Trusted Partner in"));
        assert!(html.contains(r#"<span class="accent">Financial Growth</span>"#));
        assert!(html.contains("Get Started"));
        assert!(html.contains("Request Consultation"));
        assert_eq!(html.matches(r##"href="#contact""##).count(), 2);
        assert!(html.contains("btn btn-outline"));
    }

    #[test]
    fn partner_logo_has_alt_and_size_class() {
        let html = render(HeroContent::default());
        assert!(html.contains(r#"class="partner-logo""#));
        assert!(html.contains(r#"alt="Angel One""#));
        assert!(html.contains("Partnered with Angel One"));
    }

    #[test]
    fn one_row_per_highlight() {
        let mut content = HeroContent::default();
        content.highlights.truncate(2);
        let html = render(content);
        assert_eq!(html.matches(r#"class="highlight""#).count(), 2);
        assert!(html.contains("Education First"));
        assert!(!html.contains("Fast, Secure Execution"));
    }
}
