//! About section: company paragraph with the founders highlighted, mission
//! and vision cards, and the "why choose us" list.

use leptos::prelude::*;

use super::{Card, Section};
use crate::types::{AboutContent, SectionId};

/// Text placed before the founder at `idx` of `count`.
fn founder_separator(lead: &str, idx: usize, count: usize) -> String {
    match idx {
        0 => format!("{} ", lead),
        i if i + 1 == count => " and ".to_string(),
        _ => ", ".to_string(),
    }
}

/// `#about` section.
#[component]
pub fn About(content: AboutContent) -> impl IntoView {
    let AboutContent {
        title,
        subtitle,
        lead,
        founders,
        body,
        mission,
        vision,
        reasons_title,
        reasons,
    } = content;

    let count = founders.len();
    let tail = if count == 0 {
        format!("{} {}", lead, body)
    } else {
        format!(". {}", body)
    };
    let founders = founders
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            view! {
                {founder_separator(&lead, idx, count)}
                <span class="accent">{name}</span>
            }
        })
        .collect::<Vec<_>>();

    let reasons = reasons
        .into_iter()
        .map(|reason| view! { <li>{format!("• {}", reason)}</li> })
        .collect::<Vec<_>>();

    view! {
        <Section id=SectionId::About.anchor() title=title subtitle=subtitle>
            <div class="grid grid-lg-3">
                <div class="span-lg-2">
                    <p class="about-copy">{founders} {tail}</p>
                    <div class="grid grid-sm-2">
                        <Card>
                            <h3>"Mission"</h3>
                            <p>{mission}</p>
                        </Card>
                        <Card>
                            <h3>"Vision"</h3>
                            <p>{vision}</p>
                        </Card>
                    </div>
                </div>
                <Card>
                    <h3>{reasons_title}</h3>
                    <ul class="reasons">{reasons}</ul>
                </Card>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render(content: AboutContent) -> String {
        view! { <About content=content /> }.to_html()
    }

    #[test]
    fn separators_read_as_a_sentence() {
        let parts: Vec<_> = (0..3).map(|i| founder_separator("By", i, 3)).collect();
        assert_eq!(parts, vec!["By ", ", ", " and "]);
        assert_eq!(founder_separator("By", 1, 2), " and ");
    }

    #[test]
    fn founders_in_accent_color() {
        let html = render(AboutContent::default());
        assert!(html.contains(r#"id="about""#));
        assert!(html.contains(r#"<span class="accent">Thiruvarasan Sitrarasu</span>"#));
        assert!(html.contains(r#"<span class="accent">Iniyavan Murugan</span>"#));
        assert!(html.contains("next-generation financial investment company"));
    }

    #[test]
    fn mission_vision_and_reasons() {
        let html = render(AboutContent::default());
        assert!(html.contains("Mission"));
        assert!(html.contains("Vision"));
        assert!(html.contains("Why Choose Us"));
        assert_eq!(html.matches("<li>").count(), 6);
        assert!(html.contains("• Dedicated relationship managers"));
        assert_eq!(html.matches(r#"class="card""#).count(), 3);
    }

    #[test]
    fn no_founders_keeps_the_paragraph() {
        let content = AboutContent {
            founders: Vec::new(),
            ..AboutContent::default()
        };
        let html = render(content);
        assert!(!html.contains(r#"<span class="accent">"#));
        assert!(html.contains("co-founded by With a foundation"));
    }
}
