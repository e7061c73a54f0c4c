//! Render the built-in page, with the menu open and images on a CDN.
//!
//! Run with: `cargo run -p eden-site --example render_page`

use eden_site::{MenuState, RenderOptions, SiteContent, render_page};

fn main() {
    let content = SiteContent::default();

    let options = RenderOptions {
        asset_base: Some("https://cdn.traderseden.com/assets".into()),
        menu: MenuState::Expanded,
        copyright_year: None,
    };

    let html = render_page(&content, &options);

    let output_path = "eden_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
