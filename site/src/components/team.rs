//! Team section, one card per member with a round portrait.

use leptos::prelude::*;

use super::{Card, Section};
use crate::theme::Assets;
use crate::types::{SectionId, TeamContent};

/// `#team` section. Portraits are resolved through `assets`.
#[component]
pub fn Team(content: TeamContent, assets: Assets) -> impl IntoView {
    let cards = content
        .members
        .into_iter()
        .map(|member| {
            let photo = assets.url(&member.photo);
            view! {
                <Card>
                    <div class="member">
                        <img class="member-photo" src=photo alt=member.name.clone() />
                        <div>
                            <h4>{member.name}</h4>
                            <p>{member.role}</p>
                        </div>
                    </div>
                    <p>{member.bio}</p>
                </Card>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Section id=SectionId::Team.anchor() title=content.title subtitle=content.subtitle>
            <div class="grid grid-md-2">{cards}</div>
        </Section>
    }
}
