//! Leptos UI components for the Trader's Eden page.
//!
//! Three layers: layout primitives ([`Section`], [`Card`], [`Button`]),
//! the sections built from them, and the [`PageDocument`] shell that
//! stacks the sections in page order. Every section takes its slice of
//! [`crate::types::SiteContent`] by value and maps list records to cards
//! in list order.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Nav (brand, inline links, menu toggle, collapsible links)
//! ├── Hero            #home
//! ├── About           #about
//! ├── Services        #services      (Card per service)
//! ├── Products        #products      (Card per product)
//! ├── Team            #team          (Card per member)
//! ├── Testimonials    #testimonials  (Card per quote, five stars each)
//! ├── Contact         #contact       (details Card, inert form Card)
//! └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use eden_site::components::Services;
//! use eden_site::types::ServicesContent;
//!
//! let html = view! { <Services content=ServicesContent::default() /> }.to_html();
//! ```

mod about;
mod contact;
mod document;
mod footer;
mod hero;
mod icons;
mod layout;
mod nav;
mod products;
mod services;
mod team;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use document::{MENU_SCRIPT, PageDocument};
pub use footer::{Footer, copyright_notice};
pub use hero::Hero;
pub use icons::*;
pub use layout::{Button, Card, Section};
pub use nav::{MENU_ID, Nav};
pub use products::Products;
pub use services::Services;
pub use team::Team;
pub use testimonials::{STAR_COUNT, Testimonials};
