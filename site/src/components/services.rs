//! Services section, one card per offering.

use leptos::prelude::*;

use super::{Card, Section};
use crate::types::{SectionId, ServicesContent};

/// `#services` section.
#[component]
pub fn Services(content: ServicesContent) -> impl IntoView {
    let cards = content
        .items
        .into_iter()
        .map(|service| {
            view! {
                <Card>
                    <h3>{service.name}</h3>
                    <p>{service.description}</p>
                </Card>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Section id=SectionId::Services.anchor() title=content.title subtitle=content.subtitle>
            <div class="grid grid-md-2 grid-lg-4">{cards}</div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Service;
    use leptos::tachys::view::RenderHtml;

    fn render(content: ServicesContent) -> String {
        view! { <Services content=content /> }.to_html()
    }

    #[test]
    fn four_cards_in_list_order() {
        let content = ServicesContent::default();
        let html = render(content.clone());

        assert_eq!(html.matches(r#"class="card""#).count(), 4);

        let mut cursor = 0;
        for service in &content.items {
            assert!(!service.name.is_empty());
            assert!(!service.description.is_empty());
            let name = service.name.replace('&', "&amp;");
            let at = html[cursor..].find(&name).expect("service rendered in order");
            cursor += at + name.len();
        }
    }

    #[test]
    fn card_count_follows_the_list() {
        let mut content = ServicesContent::default();
        content.items.push(Service {
            name: "Tax Planning".into(),
            description: "Year-round planning.".into(),
        });
        let html = render(content);
        assert_eq!(html.matches(r#"class="card""#).count(), 5);
        assert!(html.contains(r#"id="services""#));
        assert!(html.contains("Our Services"));
    }
}
