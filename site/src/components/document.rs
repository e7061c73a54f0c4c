//! Root document component - the complete HTML page
//!
//! Nav, the seven sections in anchor order, footer, then the menu script.

use leptos::prelude::*;

use super::{About, Contact, Footer, Hero, Nav, Products, Services, Team, Testimonials};
use crate::menu::MenuState;
use crate::styles::SITE_CSS;
use crate::theme::Assets;
use crate::types::SiteContent;

/// The complete HTML document for the page
#[component]
pub fn PageDocument(
    content: SiteContent,
    /// Asset table with the base already applied
    assets: Assets,
    /// Initial menu state
    #[prop(optional)]
    menu: MenuState,
    /// Year printed in the footer
    year: i32,
) -> impl IntoView {
    let SiteContent {
        page_title,
        description,
        brand,
        theme,
        nav,
        hero,
        about,
        services,
        products,
        team,
        testimonials,
        contact,
        footer,
    } = content;

    let palette_css = theme.palette.css_variables();
    let logo_url = assets.url(&brand.logo);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{page_title}</title>
                <style>{palette_css}</style>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <Nav
                    brand=brand.clone()
                    logo_url=logo_url.clone()
                    links=nav.links
                    cta=nav.cta
                    menu=menu
                />
                <main>
                    <Hero content=hero />
                    <About content=about />
                    <Services content=services />
                    <Products content=products />
                    <Team content=team assets=assets />
                    <Testimonials content=testimonials />
                    <Contact content=contact />
                </main>
                <Footer brand=brand logo_url=logo_url content=footer year=year />
                <script>{MENU_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Browser side of [`MenuState`]: the toggle flips the state, any link in
/// the collapsible list collapses it.
pub const MENU_SCRIPT: &str = r#"
(() => {
  const nav = document.querySelector('nav[data-menu]');
  if (!nav) return;
  const toggle = nav.querySelector('[data-role="menu-toggle"]');
  const menu = nav.querySelector('[data-role="menu-links"]');
  if (!toggle || !menu) return;

  const apply = (open) => {
    nav.dataset.menu = open ? 'expanded' : 'collapsed';
    menu.hidden = !open;
    toggle.setAttribute('aria-expanded', String(open));
  };

  toggle.addEventListener('click', () => {
    apply(nav.dataset.menu !== 'expanded');
  });

  menu.querySelectorAll('a').forEach((link) => {
    link.addEventListener('click', () => apply(false));
  });
})();
"#;
