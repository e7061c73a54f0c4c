//! Content data types for the page.
//!
//! All copy on the page lives in one [`SiteContent`] document, grouped by
//! section, with list-driven sections holding their records in display
//! order. The types are:
//!
//! - **Serializable** - a TOML or JSON file can replace any part of the copy
//! - **Default-able** - `SiteContent::default()` is the Trader's Eden page,
//!   and every struct is `#[serde(default)]` so a content file only needs the
//!   fields it changes
//! - **Clone-friendly** - components take owned data
//!
//! # Example
//!
//! ```rust
//! use eden_site::types::{Service, SiteContent};
//!
//! let mut content = SiteContent::default();
//! content.services.items.push(Service {
//!     name: "Tax Planning".into(),
//!     description: "Year-round planning for traders.".into(),
//! });
//! assert_eq!(content.services.items.len(), 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Anchorable sections of the page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Hero header
    Home,
    /// About us
    About,
    /// Services
    Services,
    /// Products
    Products,
    /// Team
    Team,
    /// Testimonials
    Testimonials,
    /// Contact
    Contact,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Products,
        SectionId::Team,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Element id of the section.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Products => "products",
            SectionId::Team => "team",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    /// In-page link to the section (`#about`).
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Look a section up by element id (without the `#`).
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }
}

/// Label + target pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    /// Visible text
    pub label: String,
    /// `#anchor`, relative path or absolute URL
    pub href: String,
}

impl NavLink {
    /// Shorthand constructor.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Element id this link points at, if it is an in-page link.
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }
}

/// Visual style of a [`crate::components::Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Gold fill, dark text
    #[default]
    Solid,
    /// Gold border and text, transparent fill
    Outline,
}

/// A call-to-action button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    /// Button text
    pub label: String,
    /// Link target, `#` for none
    pub href: String,
    /// Solid or outline
    pub variant: ButtonVariant,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            label: String::new(),
            href: "#".into(),
            variant: ButtonVariant::Solid,
        }
    }
}

impl CallToAction {
    /// Solid button.
    pub fn solid(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            variant: ButtonVariant::Solid,
        }
    }

    /// Outline button.
    pub fn outline(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            variant: ButtonVariant::Outline,
            ..Self::solid(label, href)
        }
    }
}

/// Brand mark.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Short name shown in the nav
    pub name: String,
    /// Registered company name shown in the footer
    pub legal_name: String,
    /// Asset name (see [`crate::theme::Assets`])
    pub logo: String,
    /// Alt text for the logo
    pub logo_alt: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Trader’s Eden".into(),
            legal_name: "Trader’s Eden Pvt Ltd".into(),
            logo: "logo".into(),
            logo_alt: "Trader's Eden Logo".into(),
        }
    }
}

/// Nav bar content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavContent {
    /// In-page links, one per section
    pub links: Vec<NavLink>,
    /// Button at the end of the link list
    pub cta: CallToAction,
}

impl Default for NavContent {
    fn default() -> Self {
        let links = SectionId::ALL
            .into_iter()
            .map(|id| {
                let label = match id {
                    SectionId::Home => "Home",
                    SectionId::About => "About",
                    SectionId::Services => "Services",
                    SectionId::Products => "Products",
                    SectionId::Team => "Team",
                    SectionId::Testimonials => "Testimonials",
                    SectionId::Contact => "Contact",
                };
                NavLink::new(label, id.href())
            })
            .collect();

        Self {
            links,
            cta: CallToAction::solid("Request Consultation", "#contact"),
        }
    }
}

/// One line of the hero highlight card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    /// Heading
    pub title: String,
    /// Supporting sentence
    pub text: String,
}

/// Partner logo strip under the hero CTAs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    /// Partner name, used as alt text
    pub name: String,
    /// Fixed external logo URL
    pub logo_url: String,
    /// Caption next to the logo
    pub caption: String,
}

impl Default for Partner {
    fn default() -> Self {
        Self {
            name: "Angel One".into(),
            logo_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0a/Angel_One_Logo.png/320px-Angel_One_Logo.png".into(),
            caption: "Partnered with Angel One".into(),
        }
    }
}

/// Hero header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    /// Headline text before the accent phrase
    pub headline: String,
    /// Accent-colored end of the headline
    pub headline_accent: String,
    /// Sentence under the headline
    pub tagline: String,
    /// Main CTA
    pub primary_cta: CallToAction,
    /// Secondary CTA
    pub secondary_cta: CallToAction,
    /// Partner strip
    pub partner: Partner,
    /// Checklist in the right-hand card
    pub highlights: Vec<Highlight>,
}

impl Default for HeroContent {
    fn default() -> Self {
        let highlight = |title: &str, text: &str| Highlight {
            title: title.into(),
            text: text.into(),
        };
        Self {
            headline: "Your Trusted Partner in".into(),
            headline_accent: "Financial Growth".into(),
            tagline: "Empowering investors with smarter brokerage, innovative fintech, and market knowledge.".into(),
            primary_cta: CallToAction::solid("Get Started", "#contact"),
            secondary_cta: CallToAction::outline("Request Consultation", "#contact"),
            partner: Partner::default(),
            highlights: vec![
                highlight(
                    "Transparency • Innovation • Client Success",
                    "Our pillars for building financial legacies.",
                ),
                highlight(
                    "Education First",
                    "We make market knowledge accessible to everyone.",
                ),
                highlight(
                    "Fast, Secure Execution",
                    "Seamless orders through trusted platforms.",
                ),
            ],
        }
    }
}

/// About section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Opening clause, followed by the founder names
    pub lead: String,
    /// Founder names, rendered in the accent color
    pub founders: Vec<String>,
    /// Rest of the paragraph
    pub body: String,
    /// Mission statement
    pub mission: String,
    /// Vision statement
    pub vision: String,
    /// Heading of the bullet card
    pub reasons_title: String,
    /// "Why choose us" bullets
    pub reasons: Vec<String>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "About Us".into(),
            subtitle: "We don’t just trade — we transform financial journeys.".into(),
            lead: "Trader’s Eden Pvt Ltd is a next-generation financial investment company co-founded by".into(),
            founders: vec!["Thiruvarasan Sitrarasu".into(), "Iniyavan Murugan".into()],
            body: "With a foundation in sub-brokerage through Angel One, we are on a mission to simplify investing, spread market knowledge, and create financial legacies. Our vision is to become one of India’s leading Asset Management Companies (AMC) and ultimately a global hedge fund.".into(),
            mission: "To simplify investing and make financial knowledge accessible to everyone.".into(),
            vision: "To be recognized as one of India’s top AMCs and, in time, a world‑class hedge fund.".into(),
            reasons_title: "Why Choose Us".into(),
            reasons: [
                "Expert Advisory backed by deep market experience",
                "Instant, secure order execution",
                "Smart alerts & real‑time insights",
                "Dedicated relationship managers",
                "Education‑first approach",
                "Innovation‑driven fintech solutions",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// One service card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Card heading
    pub name: String,
    /// Card body
    pub description: String,
}

/// Services section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Cards, in display order
    pub items: Vec<Service>,
}

impl Default for ServicesContent {
    fn default() -> Self {
        let service = |name: &str, description: &str| Service {
            name: name.into(),
            description: description.into(),
        };
        Self {
            title: "Our Services".into(),
            subtitle: "Clear, outcome‑driven offerings for investors and traders.".into(),
            items: vec![
                service(
                    "Investment Advisory",
                    "Personalized guidance to help investors make informed, profitable, and secure decisions.",
                ),
                service(
                    "Portfolio Management",
                    "Smart wealth strategies tailored to risk profiles and financial goals.",
                ),
                service(
                    "Equity & Derivatives Trading",
                    "Access to stock and options markets with real‑time tools and insights.",
                ),
                service(
                    "Research & Analysis",
                    "Data‑driven market research, reports, and strategy insights.",
                ),
            ],
        }
    }
}

/// One product card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Card heading
    pub name: String,
    /// Small superscript tag, e.g. "(Coming Soon)"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Card body
    pub description: String,
    /// Button at the bottom of the card
    pub cta: CallToAction,
}

/// Products section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Cards, in display order
    pub items: Vec<Product>,
}

impl Default for ProductsContent {
    fn default() -> Self {
        Self {
            title: "Products".into(),
            subtitle: "Powerful solutions today, ambitious platforms for tomorrow.".into(),
            items: vec![
                Product {
                    name: "Sub‑Brokerage with Angel One".into(),
                    badge: None,
                    description: "Seamless onboarding for clients to trade in equities, derivatives, and mutual funds with our advisory support.".into(),
                    cta: CallToAction::solid("Open Account", "#contact"),
                },
                Product {
                    name: "Trader’s Eden Options Platform".into(),
                    badge: Some("(Coming Soon)".into()),
                    description: "AI‑powered strategies, risk analysis, paper trading, and a community marketplace designed to outperform existing tools.".into(),
                    cta: CallToAction::outline("Join Waitlist", "#contact"),
                },
                Product {
                    name: "Education Hub".into(),
                    badge: None,
                    description: "Workshops, courses, and digital content to make financial literacy accessible to everyone.".into(),
                    cta: CallToAction::solid("Enroll Interest", "#contact"),
                },
            ],
        }
    }
}

/// One team card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    /// Full name
    pub name: String,
    /// Job title
    pub role: String,
    /// Asset name or path of the portrait
    pub photo: String,
    /// Short biography
    pub bio: String,
}

/// Team section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Cards, in display order
    pub members: Vec<TeamMember>,
}

impl Default for TeamContent {
    fn default() -> Self {
        Self {
            title: "Our Team".into(),
            subtitle: "Leaders with vision, discipline, and market obsession.".into(),
            members: vec![
                TeamMember {
                    name: "Thiruvarasan Sitrarasu".into(),
                    role: "Managing Director & Co‑Founder".into(),
                    photo: "thiru".into(),
                    bio: "Financial strategist; began trading at 17. On a mission to democratize market knowledge and build a world‑class investment house.".into(),
                },
                TeamMember {
                    name: "Iniyavan Murugan".into(),
                    role: "Managing Director & Co‑Founder".into(),
                    photo: "iniyavan".into(),
                    bio: "Entrepreneur & finance professional driving growth, operations, and long‑term AMC vision.".into(),
                },
            ],
        }
    }
}

/// One testimonial card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    /// Quote text
    pub quote: String,
    /// Who said it
    pub attribution: String,
}

/// Testimonials section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Cards, in display order
    pub items: Vec<Testimonial>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        let quote = |text: &str| Testimonial {
            quote: text.into(),
            attribution: "Client".into(),
        };
        Self {
            title: "Testimonials".into(),
            subtitle: "What our clients say about us.".into(),
            items: vec![
                quote("Trader’s Eden gave me the confidence to start my investment journey. Their support and transparency stand out."),
                quote("As a trader, I found their research extremely valuable. They are true partners in financial growth."),
                quote("Professional, trustworthy, and future‑driven. They’re building something extraordinary."),
            ],
        }
    }
}

/// Social network of a [`SocialLink`], picks the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    /// LinkedIn
    LinkedIn,
    /// Instagram
    Instagram,
    /// YouTube
    YouTube,
}

impl SocialNetwork {
    /// Accessible label.
    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::YouTube => "YouTube",
        }
    }
}

/// Social profile link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Which network
    pub network: SocialNetwork,
    /// Profile URL
    pub href: String,
}

/// Input type of a contact form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text
    #[default]
    Text,
    /// Single-line text with an email hint (not validated)
    Email,
    /// Multi-line text
    Message,
}

/// One input of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormField {
    /// `name` attribute
    pub name: String,
    /// Placeholder text
    pub placeholder: String,
    /// Input type
    pub kind: FieldKind,
}

impl FormField {
    fn new(name: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            kind,
        }
    }
}

/// Contact section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    /// Section title
    pub title: String,
    /// Section subtitle
    pub subtitle: String,
    /// Office address line
    pub address: String,
    /// Address used for the `mailto:` link and its text
    pub email: String,
    /// `tel:` target
    pub phone_href: String,
    /// Phone number as displayed
    pub phone_display: String,
    /// Social profile links
    pub socials: Vec<SocialLink>,
    /// Form inputs, in display order
    pub form_fields: Vec<FormField>,
    /// Submit button text
    pub submit_label: String,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            title: "Contact Us".into(),
            subtitle: "Let’s grow your wealth, together.".into(),
            address: "Your Office Address".into(),
            email: "info@traderseden.com".into(),
            phone_href: "tel:+91XXXXXXXXXX".into(),
            phone_display: "+91‑XXXXXXXXXX".into(),
            socials: vec![
                // Placeholder target, reported by `SiteContent::placeholder_links`.
                SocialLink {
                    network: SocialNetwork::LinkedIn,
                    href: "/home".into(),
                },
                SocialLink {
                    network: SocialNetwork::Instagram,
                    href: "https://www.instagram.com".into(),
                },
                SocialLink {
                    network: SocialNetwork::YouTube,
                    href: "https://www.youtube.com".into(),
                },
            ],
            form_fields: vec![
                FormField::new("full_name", "Full Name", FieldKind::Text),
                FormField::new("email", "Email", FieldKind::Email),
                FormField::new("phone", "Phone", FieldKind::Text),
                FormField::new("subject", "Subject", FieldKind::Text),
                FormField::new("message", "Your message", FieldKind::Message),
            ],
            submit_label: "Send Message".into(),
        }
    }
}

/// Footer links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    /// Middle column
    pub quick_links: Vec<NavLink>,
    /// Right column
    pub legal_links: Vec<NavLink>,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            quick_links: vec![
                NavLink::new("About", "#about"),
                NavLink::new("Services", "#services"),
                NavLink::new("Products", "#products"),
                NavLink::new("Contact", "#contact"),
            ],
            legal_links: vec![
                NavLink::new("Privacy Policy", "/privacy-policy"),
                NavLink::new("Terms & Conditions", "/terms"),
            ],
        }
    }
}

/// The whole page as data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// Document `<title>`
    pub page_title: String,
    /// `<meta name="description">`
    pub description: String,
    /// Brand mark
    pub brand: Brand,
    /// Palette and images
    pub theme: Theme,
    /// Nav bar
    pub nav: NavContent,
    /// Hero header
    pub hero: HeroContent,
    /// About section
    pub about: AboutContent,
    /// Services section
    pub services: ServicesContent,
    /// Products section
    pub products: ProductsContent,
    /// Team section
    pub team: TeamContent,
    /// Testimonials section
    pub testimonials: TestimonialsContent,
    /// Contact section
    pub contact: ContactContent,
    /// Footer
    pub footer: FooterContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            page_title: "Trader’s Eden | Your Trusted Partner in Financial Growth".into(),
            description: "Trader’s Eden Pvt Ltd: investment advisory, portfolio management, trading and market education.".into(),
            brand: Brand::default(),
            theme: Theme::default(),
            nav: NavContent::default(),
            hero: HeroContent::default(),
            about: AboutContent::default(),
            services: ServicesContent::default(),
            products: ProductsContent::default(),
            team: TeamContent::default(),
            testimonials: TestimonialsContent::default(),
            contact: ContactContent::default(),
            footer: FooterContent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_ids_round_trip_through_anchor() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
            assert_eq!(id.href(), format!("#{}", id.anchor()));
        }
        assert_eq!(SectionId::from_anchor("pricing"), None);
    }

    #[test]
    fn default_nav_matches_section_order() {
        let nav = NavContent::default();
        let hrefs: Vec<_> = nav.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "#home",
                "#about",
                "#services",
                "#products",
                "#team",
                "#testimonials",
                "#contact"
            ]
        );
        assert_eq!(nav.links[0].label, "Home");
        assert_eq!(nav.cta.href, "#contact");
    }

    #[test]
    fn default_lists_have_expected_sizes() {
        let content = SiteContent::default();
        assert_eq!(content.services.items.len(), 4);
        assert_eq!(content.products.items.len(), 3);
        assert_eq!(content.team.members.len(), 2);
        assert_eq!(content.testimonials.items.len(), 3);
        assert_eq!(content.hero.highlights.len(), 3);
        assert_eq!(content.contact.form_fields.len(), 5);
    }

    #[test]
    fn team_order_is_literal_order() {
        let team = TeamContent::default();
        assert_eq!(team.members[0].name, "Thiruvarasan Sitrarasu");
        assert_eq!(team.members[1].name, "Iniyavan Murugan");
    }

    #[test]
    fn nav_link_anchor() {
        assert_eq!(NavLink::new("About", "#about").anchor(), Some("about"));
        assert_eq!(NavLink::new("Terms", "/terms").anchor(), None);
    }

    #[test]
    fn call_to_action_defaults_to_inert_solid() {
        let cta = CallToAction::default();
        assert_eq!(cta.href, "#");
        assert_eq!(cta.variant, ButtonVariant::Solid);
        assert_eq!(
            CallToAction::outline("Join", "#contact").variant,
            ButtonVariant::Outline
        );
    }

    #[test]
    fn only_email_field_has_email_hint() {
        let fields = ContactContent::default().form_fields;
        let kinds: Vec<_> = fields.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::Text,
                FieldKind::Email,
                FieldKind::Text,
                FieldKind::Text,
                FieldKind::Message
            ]
        );
    }
}
