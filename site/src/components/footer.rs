//! Page footer: brand, copyright line, quick links, legal links.

use leptos::prelude::*;

use crate::types::{Brand, FooterContent};

/// Copyright line for `year`.
pub fn copyright_notice(year: i32, legal_name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, legal_name)
}

/// Page footer.
#[component]
pub fn Footer(
    brand: Brand,
    /// Resolved logo URL
    #[prop(into)]
    logo_url: String,
    content: FooterContent,
    /// Year printed in the copyright line
    year: i32,
) -> impl IntoView {
    let notice = copyright_notice(year, &brand.legal_name);

    let quick_links = content
        .quick_links
        .into_iter()
        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
        .collect::<Vec<_>>();

    let legal_links = content
        .legal_links
        .into_iter()
        .enumerate()
        .map(|(idx, link)| {
            let separator = if idx == 0 { "" } else { " · " };
            view! {
                {separator}
                <a href=link.href>{link.label}</a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div>
                    <div class="footer-brand">
                        <img class="brand-logo" src=logo_url alt=brand.logo_alt />
                        <span>{brand.legal_name}</span>
                    </div>
                    <p class="muted">{notice}</p>
                </div>
                <div class="footer-links">{quick_links}</div>
                <div class="footer-legal">{legal_links}</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render(year: i32) -> String {
        view! {
            <Footer
                brand=Brand::default()
                logo_url="assets/eden-logo.png"
                content=FooterContent::default()
                year=year
            />
        }
        .to_html()
    }

    #[test]
    fn notice_format() {
        assert_eq!(
            copyright_notice(2025, "Trader’s Eden Pvt Ltd"),
            "© 2025 Trader’s Eden Pvt Ltd. All rights reserved."
        );
    }

    #[test]
    fn renders_year_and_links() {
        let html = render(2031);
        assert!(html.contains("© 2031 Trader’s Eden Pvt Ltd. All rights reserved."));
        for href in ["#about", "#services", "#products", "#contact"] {
            assert!(html.contains(&format!(r#"href="{}""#, href)), "{}", href);
        }
        assert!(html.contains(r#"href="/privacy-policy""#));
        assert!(html.contains(r#"href="/terms""#));
        assert_eq!(html.matches(" · ").count(), 1);
    }
}
