//! Theme tokens and asset references.
//!
//! Every color on the page comes from [`Palette`]. The palette is emitted
//! once as CSS custom properties (see [`Palette::css_variables`]) and the
//! stylesheet in [`crate::styles`] only ever refers to those variables.
//!
//! Images are named in [`Assets`] and resolved against a configurable base,
//! so a deployment can point the page at a CDN or a `/public` folder without
//! touching the content.
//!
//! ```rust
//! use eden_site::theme::{Assets, Palette};
//!
//! let palette = Palette::default();
//! assert!(palette.css_variables().contains("--color-gold: #d4af37;"));
//!
//! let assets = Assets::default().with_base("https://cdn.example.com/eden");
//! assert_eq!(assets.url("logo"), "https://cdn.example.com/eden/eden-logo.png");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named color tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Page background (near-black)
    pub bg: String,
    /// Primary accent
    pub gold: String,
    /// Softer accent for hover states
    pub gold_soft: String,
    /// Primary text
    pub text: String,
    /// Secondary text
    pub muted: String,
    /// Card surface
    pub card: String,
    /// Borders and dividers
    pub border: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: "#0a0a0a".into(),
            gold: "#d4af37".into(),
            gold_soft: "#f0d98a".into(),
            text: "#eaeaea".into(),
            muted: "#9ca3af".into(),
            card: "#111111".into(),
            border: "#1f2937".into(),
        }
    }
}

impl Palette {
    /// Token name / value pairs in a stable order.
    pub fn tokens(&self) -> [(&'static str, &str); 7] {
        [
            ("bg", self.bg.as_str()),
            ("gold", self.gold.as_str()),
            ("gold-soft", self.gold_soft.as_str()),
            ("text", self.text.as_str()),
            ("muted", self.muted.as_str()),
            ("card", self.card.as_str()),
            ("border", self.border.as_str()),
        ]
    }

    /// Tokens whose value could break out of the `<style>` block.
    pub fn unsafe_tokens(&self) -> Vec<(&'static str, &str)> {
        self.tokens()
            .into_iter()
            .filter(|(_, value)| !is_safe_css_value(value))
            .collect()
    }

    /// Render the palette as a `:root` block of `--color-*` custom properties.
    ///
    /// A token listed by [`Self::unsafe_tokens`] is written with its default
    /// value instead.
    pub fn css_variables(&self) -> String {
        let defaults = Palette::default();
        let mut css = String::from(":root {\n");
        for ((name, value), (_, default)) in self.tokens().into_iter().zip(defaults.tokens()) {
            let value = if is_safe_css_value(value) { value } else { default };
            css.push_str(&format!("    --color-{}: {};\n", name, value));
        }
        css.push('}');
        css
    }
}

/// Image references, keyed by name and resolved against `base`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    /// Base path or URL that relative image paths are joined onto
    pub base: String,
    /// Named images (`logo`, one entry per team photo, ...)
    pub images: BTreeMap<String, String>,
}

impl Default for Assets {
    fn default() -> Self {
        let images = [
            ("logo", "eden-logo.png"),
            ("thiru", "IMG_3826~2.jpg"),
            ("iniyavan", "IMG-20250831-WA0009~2.jpg"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            base: "assets".into(),
            images,
        }
    }
}

impl Assets {
    /// Same table, different base.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Resolve a named image (or, failing that, a literal path) to a URL.
    ///
    /// Unknown names are treated as paths so a content file can reference an
    /// image directly without registering it first.
    pub fn url(&self, name: &str) -> String {
        let path = self.images.get(name).map(String::as_str).unwrap_or(name);
        self.resolve(path)
    }

    /// Join a relative path onto `base`. Absolute paths and URLs pass through.
    pub fn resolve(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }

        let encoded = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        match self.base.trim_end_matches('/') {
            "" if self.base.starts_with('/') => format!("/{}", encoded),
            "" => encoded,
            base => format!("{}/{}", base, encoded),
        }
    }
}

/// A color value must not end the declaration, the rule, or the `<style>`
/// element it is written into.
fn is_safe_css_value(value: &str) -> bool {
    !value.contains(['<', '>', ';', '{', '}'])
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
        || path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("data:")
}

/// Palette and assets together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color tokens
    pub palette: Palette,
    /// Image table
    pub assets: Assets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn css_variables_cover_every_token() {
        let css = Palette::default().css_variables();
        assert!(css.starts_with(":root {"));
        for name in ["bg", "gold", "gold-soft", "text", "muted", "card", "border"] {
            assert!(css.contains(&format!("--color-{}:", name)), "missing {}", name);
        }
        assert!(css.contains("--color-bg: #0a0a0a;"));
    }

    #[test]
    fn resolves_named_images_against_base() {
        let assets = Assets::default();
        assert_eq!(assets.url("logo"), "assets/eden-logo.png");
        assert_eq!(assets.url("thiru"), "assets/IMG_3826~2.jpg");
    }

    #[test]
    fn encodes_unsafe_characters_per_segment() {
        let assets = Assets::default().with_base("/mnt/data/");
        assert_eq!(
            assets.resolve("team/Eden Png_3@33.33x-8.png"),
            "/mnt/data/team/Eden%20Png_3%4033.33x-8.png"
        );
    }

    #[test]
    fn absolute_references_pass_through() {
        let assets = Assets::default();
        let url = "https://upload.wikimedia.org/logo.png";
        assert_eq!(assets.url(url), url);
        assert_eq!(assets.resolve("/static/logo.png"), "/static/logo.png");
    }

    #[test]
    fn root_base_stays_absolute() {
        let assets = Assets::default().with_base("/");
        assert_eq!(assets.url("logo"), "/eden-logo.png");
        assert_eq!(Assets::default().with_base("//").url("thiru"), "/IMG_3826~2.jpg");
    }

    #[test]
    fn unsafe_palette_values_fall_back_to_defaults() {
        let palette = Palette {
            gold: "red;}</style><script>alert(1)</script>".into(),
            card: "rgb(17, 17, 17)".into(),
            ..Palette::default()
        };
        assert_eq!(palette.unsafe_tokens(), vec![("gold", palette.gold.as_str())]);

        let css = palette.css_variables();
        assert!(css.contains("--color-gold: #d4af37;"));
        assert!(css.contains("--color-card: rgb(17, 17, 17);"));
        assert!(!css.contains("<script>"));
        assert!(!css.contains("</style>"));
    }

    #[test]
    fn empty_base_yields_relative_path() {
        let assets = Assets::default().with_base("");
        assert_eq!(assets.url("logo"), "eden-logo.png");
    }
}
