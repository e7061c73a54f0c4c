//! Sticky navigation bar.
//!
//! Three parts, shown or hidden by CSS per [`crate::menu::nav_visibility`]:
//! the inline link list (wide), the toggle control and the collapsible list
//! (narrow). The collapsible list is always in the markup; while the menu is
//! collapsed it carries `hidden`, which also takes it out of the
//! accessibility tree.

use leptos::prelude::*;

use super::{Button, ICON_LIST, ICON_PHONE, Icon};
use crate::menu::MenuState;
use crate::types::{Brand, CallToAction, NavLink};

/// Element id of the collapsible list, referenced by `aria-controls`.
pub const MENU_ID: &str = "nav-menu";

/// Top navigation bar.
#[component]
pub fn Nav(
    brand: Brand,
    /// Resolved logo URL
    #[prop(into)]
    logo_url: String,
    links: Vec<NavLink>,
    cta: CallToAction,
    /// Initial menu state
    #[prop(optional)]
    menu: MenuState,
) -> impl IntoView {
    let expanded = menu.is_open();
    let hidden = !expanded;

    let wide_links = links
        .iter()
        .map(|link| {
            view! { <a href=link.href.clone() class="nav-link">{link.label.clone()}</a> }
        })
        .collect::<Vec<_>>();

    let menu_links = links
        .iter()
        .map(|link| {
            view! {
                <a href=link.href.clone() class="nav-link" data-role="menu-link">
                    {link.label.clone()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let wide_cta = cta.clone();
    let menu_cta = cta;

    view! {
        <nav class="nav" data-menu=menu.as_str()>
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    <img class="brand-logo" src=logo_url alt=brand.logo_alt />
                    <span>{brand.name}</span>
                </a>
                <div class="nav-links" data-role="nav-links">
                    {wide_links}
                    <Button href=wide_cta.href variant=wide_cta.variant>
                        <Icon path=ICON_PHONE size="16" />
                        {wide_cta.label}
                    </Button>
                </div>
                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Open Menu"
                    aria-controls=MENU_ID
                    aria-expanded=expanded.to_string()
                    data-role="menu-toggle"
                >
                    <Icon path=ICON_LIST size="28" />
                </button>
            </div>
            <div id=MENU_ID class="nav-collapsible" data-role="menu-links" hidden=hidden>
                {menu_links}
                <Button href=menu_cta.href variant=menu_cta.variant>
                    <Icon path=ICON_PHONE size="16" />
                    {menu_cta.label}
                </Button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavContent;
    use leptos::tachys::view::RenderHtml;

    fn render(menu: MenuState) -> String {
        let nav = NavContent::default();
        view! {
            <Nav
                brand=Brand::default()
                logo_url="assets/eden-logo.png"
                links=nav.links
                cta=nav.cta
                menu=menu
            />
        }
        .to_html()
    }

    /// Opening tag of the first element carrying `marker`.
    fn opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html.find(marker).expect("marker present");
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn renders_every_link_in_both_lists() {
        let html = render(MenuState::Collapsed);
        let wide_start = html.find(r#"data-role="nav-links""#).expect("wide list");
        let toggle = html.find(r#"data-role="menu-toggle""#).expect("toggle");
        let menu_start = html.find(r#"data-role="menu-links""#).expect("collapsible list");
        let wide = &html[wide_start..toggle];
        let collapsible = &html[menu_start..];

        let links = NavContent::default().links;
        for link in &links {
            let needle = format!(r#"href="{}""#, link.href);
            assert!(wide.contains(&needle), "wide list misses {}", link.href);
            assert!(collapsible.contains(&needle), "collapsible list misses {}", link.href);
        }
        assert_eq!(html.matches(r#"data-role="menu-link""#).count(), links.len());
    }

    #[test]
    fn collapsed_menu_is_hidden() {
        let html = render(MenuState::Collapsed);
        let tag = opening_tag(&html, r#"data-role="menu-links""#);
        assert!(tag.contains("hidden"), "{}", tag);

        let toggle = opening_tag(&html, r#"data-role="menu-toggle""#);
        assert!(toggle.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"data-menu="collapsed""#));
    }

    #[test]
    fn expanded_menu_is_visible() {
        let html = render(MenuState::Expanded);
        let tag = opening_tag(&html, r#"data-role="menu-links""#);
        assert!(!tag.contains("hidden"), "{}", tag);

        let toggle = opening_tag(&html, r#"data-role="menu-toggle""#);
        assert!(toggle.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"data-menu="expanded""#));
    }

    #[test]
    fn wide_links_never_hidden() {
        for menu in [MenuState::Collapsed, MenuState::Expanded] {
            let html = render(menu);
            let tag = opening_tag(&html, r#"data-role="nav-links""#);
            assert!(!tag.contains("hidden"));
        }
    }

    #[test]
    fn toggle_is_labelled_and_points_at_menu() {
        let html = render(MenuState::Collapsed);
        let toggle = opening_tag(&html, r#"data-role="menu-toggle""#);
        assert!(toggle.contains(r#"aria-label="Open Menu""#));
        assert!(toggle.contains(&format!(r#"aria-controls="{}""#, MENU_ID)));
        assert!(html.contains(&format!(r#"id="{}""#, MENU_ID)));
    }

    #[test]
    fn brand_and_cta() {
        let html = render(MenuState::Collapsed);
        assert!(html.contains("Trader’s Eden"));
        assert!(html.contains(r#"src="assets/eden-logo.png""#));
        assert_eq!(html.matches("Request Consultation").count(), 2);
    }
}
