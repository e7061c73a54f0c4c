//! Testimonials section: five-star rating, quote, attribution.

use leptos::prelude::*;

use super::{Card, ICON_STAR, Icon, Section};
use crate::types::{SectionId, TestimonialsContent};

/// Stars shown on every testimonial card.
pub const STAR_COUNT: usize = 5;

/// `#testimonials` section.
#[component]
pub fn Testimonials(content: TestimonialsContent) -> impl IntoView {
    let cards = content
        .items
        .into_iter()
        .map(|item| {
            let stars = (0..STAR_COUNT)
                .map(|_| view! { <Icon path=ICON_STAR size="16" class="star" /> })
                .collect::<Vec<_>>();
            view! {
                <Card>
                    <div class="testimonial-stars">{stars}</div>
                    <p>{item.quote}</p>
                    <p class="attribution muted">{format!("— {}", item.attribution)}</p>
                </Card>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Section
            id=SectionId::Testimonials.anchor()
            title=content.title
            subtitle=content.subtitle
        >
            <div class="grid grid-md-3">{cards}</div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Testimonial;
    use leptos::tachys::view::RenderHtml;

    fn render(content: TestimonialsContent) -> String {
        view! { <Testimonials content=content /> }.to_html()
    }

    /// Star glyphs inside each rating row, in card order.
    fn stars_per_card(html: &str) -> Vec<usize> {
        html.split(r#"class="testimonial-stars""#)
            .skip(1)
            .map(|rest| {
                let row = &rest[..rest.find("</div>").unwrap_or(rest.len())];
                row.matches(r#"class="star""#).count()
            })
            .collect()
    }

    #[test]
    fn three_cards_with_five_stars_each() {
        let html = render(TestimonialsContent::default());
        assert!(html.contains(r#"id="testimonials""#));
        assert_eq!(html.matches(r#"class="card""#).count(), 3);
        assert_eq!(stars_per_card(&html), vec![STAR_COUNT; 3]);
    }

    #[test]
    fn attribution_is_dashed() {
        let content = TestimonialsContent {
            items: vec![Testimonial {
                quote: "Great desk.".into(),
                attribution: "Investor, Chennai".into(),
            }],
            ..TestimonialsContent::default()
        };
        let html = render(content);
        assert!(html.contains("— Investor, Chennai"));
        assert_eq!(stars_per_card(&html), vec![STAR_COUNT]);
    }
}
