//! Loading, dumping and validating [`SiteContent`] documents.
//!
//! Content files are TOML by default; a `.json` extension switches to JSON.
//! Every struct in [`crate::types`] is `#[serde(default)]`, so a file only
//! carries what it changes:
//!
//! ```rust
//! use eden_site::types::SiteContent;
//!
//! let content = SiteContent::from_toml_str(r#"
//! [contact]
//! address = "12 Market Street, Chennai"
//! "#).unwrap();
//!
//! assert_eq!(content.contact.address, "12 Market Street, Chennai");
//! assert_eq!(content.contact.email, "info@traderseden.com");
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{NavLink, SectionId, SiteContent};

/// Errors raised while reading, writing or validating content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// The content file is not valid TOML for [`SiteContent`]
    #[error("failed to parse {} as TOML: {source}", .path.display())]
    ParseToml {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },
    /// The content file is not valid JSON for [`SiteContent`]
    #[error("failed to parse {} as JSON: {source}", .path.display())]
    ParseJson {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
    /// Content could not be serialized to TOML
    #[error("failed to serialize content as TOML: {0}")]
    SerializeToml(#[from] toml::ser::Error),
    /// Content could not be serialized to JSON
    #[error("failed to serialize content as JSON: {0}")]
    SerializeJson(#[from] serde_json::Error),
    /// Validation found problems
    #[error("content has {} problem(s): {}", .0.len(), join_issues(.0))]
    Invalid(Vec<ContentIssue>),
}

fn join_issues(issues: &[ContentIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentIssue {
    /// An in-page link points at an anchor no section carries
    UnknownAnchor {
        /// Where the link lives (`nav`, `footer`)
        list: &'static str,
        /// Link label
        label: String,
        /// Link target
        href: String,
    },
    /// Two nav links point at the same anchor
    DuplicateAnchor {
        /// Duplicated target
        href: String,
    },
    /// A palette color could break out of the page's `<style>` block
    UnsafeColor {
        /// Token name (`gold`, `card`, ...)
        token: &'static str,
        /// Offending value
        value: String,
    },
    /// A list record has an empty required field
    EmptyField {
        /// Section name
        section: &'static str,
        /// Zero-based position in the list
        index: usize,
        /// Field name
        field: &'static str,
    },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::UnknownAnchor { list, label, href } => {
                write!(f, "{} link '{}' points at unknown anchor {}", list, label, href)
            }
            ContentIssue::DuplicateAnchor { href } => {
                write!(f, "nav links point at {} more than once", href)
            }
            ContentIssue::UnsafeColor { token, value } => {
                write!(f, "palette color {} has unsafe value '{}'", token, value)
            }
            ContentIssue::EmptyField {
                section,
                index,
                field,
            } => write!(f, "{}[{}].{} is empty", section, index, field),
        }
    }
}

/// A link kept verbatim although it is almost certainly not its final target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderLink {
    /// What the link is for
    pub label: String,
    /// Current target
    pub href: String,
}

/// On-disk format of a content document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentFormat {
    /// TOML (default)
    #[default]
    Toml,
    /// JSON
    Json,
}

impl ContentFormat {
    /// Pick the format from a file extension, TOML unless it is `.json`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ContentFormat::Json,
            _ => ContentFormat::Toml,
        }
    }
}

impl SiteContent {
    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Read a content file, format chosen by extension.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match ContentFormat::from_path(path) {
            ContentFormat::Toml => {
                Self::from_toml_str(&raw).map_err(|source| ContentError::ParseToml {
                    path: path.to_path_buf(),
                    source,
                })
            }
            ContentFormat::Json => {
                Self::from_json_str(&raw).map_err(|source| ContentError::ParseJson {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Serialize in the given format.
    pub fn to_string_as(&self, format: ContentFormat) -> Result<String, ContentError> {
        match format {
            ContentFormat::Toml => Ok(toml::to_string_pretty(self)?),
            ContentFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Every problem in the document; empty when it is clean.
    ///
    /// Checks that in-page nav and footer links point at real sections, that
    /// nav anchors are unique, that palette colors cannot escape the
    /// stylesheet, and that list records carry their text.
    /// CTA targets are not checked: a button with a dangling anchor simply
    /// does not scroll.
    pub fn issues(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        check_anchors("nav", &self.nav.links, &mut issues);
        check_anchors("footer", &self.footer.quick_links, &mut issues);

        let mut seen = HashSet::new();
        for link in &self.nav.links {
            if link.anchor().is_some() && !seen.insert(link.href.as_str()) {
                issues.push(ContentIssue::DuplicateAnchor {
                    href: link.href.clone(),
                });
            }
        }

        for (token, value) in self.theme.palette.unsafe_tokens() {
            issues.push(ContentIssue::UnsafeColor {
                token,
                value: value.to_string(),
            });
        }

        for (index, service) in self.services.items.iter().enumerate() {
            require(&mut issues, "services", index, "name", &service.name);
            require(&mut issues, "services", index, "description", &service.description);
        }
        for (index, product) in self.products.items.iter().enumerate() {
            require(&mut issues, "products", index, "name", &product.name);
            require(&mut issues, "products", index, "description", &product.description);
        }
        for (index, member) in self.team.members.iter().enumerate() {
            require(&mut issues, "team", index, "name", &member.name);
            require(&mut issues, "team", index, "role", &member.role);
        }
        for (index, testimonial) in self.testimonials.items.iter().enumerate() {
            require(&mut issues, "testimonials", index, "quote", &testimonial.quote);
        }

        issues
    }

    /// `Ok` when [`Self::issues`] finds nothing.
    pub fn validate(&self) -> Result<(), ContentError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ContentError::Invalid(issues))
        }
    }

    /// Social links that are not absolute URLs.
    ///
    /// These are reported for the content owner and rendered unchanged.
    pub fn placeholder_links(&self) -> Vec<PlaceholderLink> {
        self.contact
            .socials
            .iter()
            .filter(|s| !(s.href.starts_with("https://") || s.href.starts_with("http://")))
            .map(|s| PlaceholderLink {
                label: s.network.label().to_string(),
                href: s.href.clone(),
            })
            .collect()
    }
}

fn check_anchors(list: &'static str, links: &[NavLink], issues: &mut Vec<ContentIssue>) {
    for link in links {
        let Some(anchor) = link.anchor() else {
            continue;
        };
        if SectionId::from_anchor(anchor).is_none() {
            issues.push(ContentIssue::UnknownAnchor {
                list,
                label: link.label.clone(),
                href: link.href.clone(),
            });
        }
    }
}

fn require(
    issues: &mut Vec<ContentIssue>,
    section: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) {
    if value.trim().is_empty() {
        issues.push(ContentIssue::EmptyField {
            section,
            index,
            field,
        });
    }
}
