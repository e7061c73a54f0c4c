//! Products section: name with optional badge, description and a CTA.

use leptos::prelude::*;

use super::{Button, Card, Section};
use crate::types::{ProductsContent, SectionId};

/// `#products` section.
#[component]
pub fn Products(content: ProductsContent) -> impl IntoView {
    let cards = content
        .items
        .into_iter()
        .map(|product| {
            let badge = product
                .badge
                .map(|badge| view! { <span class="badge">{badge}</span> });
            let cta = product.cta;
            view! {
                <Card>
                    <h3>{format!("{} ", product.name)} {badge}</h3>
                    <p>{product.description}</p>
                    <div class="card-cta">
                        <Button href=cta.href variant=cta.variant>{cta.label}</Button>
                    </div>
                </Card>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Section id=SectionId::Products.anchor() title=content.title subtitle=content.subtitle>
            <div class="grid grid-md-3">{cards}</div>
        </Section>
    }
}
