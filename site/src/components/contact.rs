//! Contact section: address, email, phone, social links and the contact
//! form.
//!
//! The form has no submission handler. Its submit control is a plain
//! [`Button`] pointing at `#`, so activating it changes nothing.

use leptos::prelude::*;

use super::{
    Button, Card, ICON_ENVELOPE, ICON_INSTAGRAM, ICON_LINKEDIN, ICON_MAP_PIN, ICON_PHONE,
    ICON_YOUTUBE, Icon, Section,
};
use crate::types::{ContactContent, FieldKind, FormField, SectionId, SocialNetwork};

fn social_icon(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::LinkedIn => ICON_LINKEDIN,
        SocialNetwork::Instagram => ICON_INSTAGRAM,
        SocialNetwork::YouTube => ICON_YOUTUBE,
    }
}

fn form_input(field: FormField) -> AnyView {
    let FormField {
        name,
        placeholder,
        kind,
    } = field;
    match kind {
        FieldKind::Text => view! { <input type="text" name=name placeholder=placeholder /> }.into_any(),
        FieldKind::Email => {
            view! { <input type="email" name=name placeholder=placeholder /> }.into_any()
        }
        FieldKind::Message => view! {
            <textarea class="span-full" name=name placeholder=placeholder></textarea>
        }
        .into_any(),
    }
}

/// `#contact` section.
#[component]
pub fn Contact(content: ContactContent) -> impl IntoView {
    let ContactContent {
        title,
        subtitle,
        address,
        email,
        phone_href,
        phone_display,
        socials,
        form_fields,
        submit_label,
    } = content;

    let mailto = format!("mailto:{}", email);
    let socials = socials
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.href aria-label=link.network.label()>
                    <Icon path=social_icon(link.network) size="22" />
                </a>
            }
        })
        .collect::<Vec<_>>();
    let fields = form_fields.into_iter().map(form_input).collect::<Vec<_>>();

    view! {
        <Section id=SectionId::Contact.anchor() title=title subtitle=subtitle>
            <div class="grid grid-lg-3">
                <Card>
                    <div class="contact-line">
                        <Icon path=ICON_MAP_PIN size="18" />
                        <span class="muted">{address}</span>
                    </div>
                    <div class="contact-line">
                        <Icon path=ICON_ENVELOPE size="18" />
                        <a href=mailto>{email}</a>
                    </div>
                    <div class="contact-line">
                        <Icon path=ICON_PHONE size="18" />
                        <a href=phone_href>{phone_display}</a>
                    </div>
                    <div class="socials">{socials}</div>
                </Card>
                <div class="span-lg-2">
                    <Card>
                        <form class="contact-form">
                            {fields}
                            <div class="span-full">
                                <Button>{submit_label}</Button>
                            </div>
                        </form>
                    </Card>
                </div>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(content: ContactContent) -> String {
        view! { <Contact content=content /> }.to_html()
    }

    #[test]
    fn email_link_shows_the_address() {
        let html = render(ContactContent::default());
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"<a href="mailto:info@traderseden.com">info@traderseden.com</a>"#));
        assert!(html.contains(r#"href="tel:+91XXXXXXXXXX""#));
        assert!(html.contains("Your Office Address"));
    }

    #[test]
    fn socials_are_labelled_and_kept_verbatim() {
        let html = render(ContactContent::default());
        for label in ["LinkedIn", "Instagram", "YouTube"] {
            assert!(html.contains(&format!(r#"aria-label="{}""#, label)), "{}", label);
        }
        assert!(html.contains(r#"href="/home""#));
    }

    #[test]
    fn form_fields_by_kind() {
        let html = render(ContactContent::default());
        assert_eq!(html.matches("<input").count(), 4);
        assert_eq!(html.matches("<textarea").count(), 1);
        assert_eq!(html.matches(r#"type="email""#).count(), 1);
        for placeholder in ["Full Name", "Email", "Phone", "Subject", "Your message"] {
            assert!(
                html.contains(&format!(r#"placeholder="{}""#, placeholder)),
                "{}",
                placeholder
            );
        }
    }

    #[test]
    fn submit_is_inert() {
        let html = render(ContactContent::default());
        let form = &html[html.find("<form").expect("form")..];
        assert!(html.contains(r#"<form class="contact-form">"#));
        assert!(form.contains(r##"<a href="#" class="btn btn-solid">Send Message</a>"##));
        assert!(!form.contains("<button"));
    }
}
