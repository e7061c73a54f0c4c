//! # eden-site
//!
//! Leptos SSR renderer for the Trader's Eden brochure page.
//!
//! The whole page is one static HTML document: a sticky nav bar, a hero
//! header, six content sections and a footer. All copy, colors and image
//! paths live in one [`SiteContent`] document, so editing the page means
//! editing data, never markup.
//!
//! ## Features
//!
//! - **Static output** - Pure SSR, one self-contained file
//! - **Content as data** - [`SiteContent`] loads from TOML or JSON, every
//!   field falling back to the built-in page
//! - **Themed** - the palette is emitted once as CSS custom properties
//! - **Tiny script** - only the mobile menu toggle runs in the browser
//!
//! ## Quick Start
//!
//! ```rust
//! use eden_site::{RenderOptions, SiteContent, render_page};
//!
//! let options = RenderOptions {
//!     copyright_year: Some(2025),
//!     ..Default::default()
//! };
//! let html = render_page(&SiteContent::default(), &options);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("mailto:info@traderseden.com"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content records, one struct per section
//! - [`content`] - Loading, dumping and validating content documents
//! - [`theme`] - Palette and asset table
//! - [`menu`] - Mobile menu state machine and breakpoint rules
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod menu;
pub mod styles;
pub mod theme;
pub mod types;

use chrono::Datelike;
use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use content::{ContentError, ContentFormat, ContentIssue, PlaceholderLink};
pub use menu::MenuState;
pub use types::SiteContent;

/// Per-render overrides that are not part of the content document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Replaces the content's asset base (CDN prefix, `/static`, ...)
    pub asset_base: Option<String>,
    /// Initial state of the mobile menu
    pub menu: MenuState,
    /// Footer year; the current UTC year when unset
    pub copyright_year: Option<i32>,
}

impl RenderOptions {
    /// Year printed in the footer.
    pub fn year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }
}

/// Render the complete page.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use eden_site::{MenuState, RenderOptions, SiteContent, render_page};
///
/// let options = RenderOptions {
///     asset_base: Some("https://cdn.example.com/eden".into()),
///     menu: MenuState::Expanded,
///     copyright_year: Some(2030),
/// };
/// let html = render_page(&SiteContent::default(), &options);
/// assert!(html.contains("https://cdn.example.com/eden/eden-logo.png"));
/// assert!(html.contains("© 2030"));
/// ```
pub fn render_page(content: &SiteContent, options: &RenderOptions) -> String {
    let mut assets = content.theme.assets.clone();
    if let Some(base) = &options.asset_base {
        assets = assets.with_base(base.clone());
    }

    let doc = view! {
        <PageDocument
            content=content.clone()
            assets=assets
            menu=options.menu
            year=options.year()
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
