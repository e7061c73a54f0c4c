//! CSS for the page.
//!
//! Colors are never written literally here: every rule reads the
//! `--color-*` custom properties emitted from [`crate::theme::Palette`].
//! The single responsive breakpoint matches
//! [`crate::menu::WIDE_BREAKPOINT_PX`].
//!
//! # Customization
//!
//! ```rust
//! use eden_site::styles::SITE_CSS;
//!
//! let my_css = ".card { border-radius: 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.ends_with("border-radius: 0; }"));
//! ```

/// Complete stylesheet: layout primitives, nav, sections, footer.
pub const SITE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--color-bg);
    color: var(--color-text);
    font-family: Inter, ui-sans-serif, system-ui, sans-serif;
    line-height: 1.5;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    max-width: 100%;
}

.muted {
    color: var(--color-muted);
}

.accent {
    color: var(--color-gold);
}

/* ---- Section ---- */

.section {
    max-width: 80rem;
    margin: 0 auto;
    padding: 4rem 1rem;
}

.section-header {
    margin-bottom: 2.5rem;
}

.section-title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 600;
    letter-spacing: -0.025em;
    color: var(--color-text);
}

.section-subtitle {
    margin: 0.75rem 0 0;
    font-size: 1rem;
    color: var(--color-muted);
}

/* ---- Card ---- */

.card {
    border-radius: 1rem;
    padding: 1.5rem;
    background: var(--color-card);
    border: 1px solid var(--color-border);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.4);
}

.card h3,
.card h4 {
    margin: 0;
    font-weight: 600;
}

.card p {
    margin: 0.5rem 0 0;
    font-size: 0.875rem;
    color: var(--color-muted);
}

/* ---- Button ---- */

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 1rem;
    padding: 0.75rem 1.25rem;
    font-size: 0.875rem;
    font-weight: 500;
    transition: transform 0.1s ease;
}

.btn:active {
    transform: scale(0.98);
}

.btn-solid {
    background: var(--color-gold);
    color: var(--color-bg);
}

.btn-solid:hover {
    background: var(--color-gold-soft);
}

.btn-outline {
    background: transparent;
    border: 1px solid var(--color-gold);
    color: var(--color-gold);
}

/* ---- Nav ---- */

.nav {
    position: sticky;
    top: 0;
    z-index: 50;
    backdrop-filter: blur(8px);
    background: color-mix(in srgb, var(--color-bg) 60%, transparent);
    border-bottom: 1px solid var(--color-border);
}

.nav-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--color-gold);
}

.brand-logo {
    width: 2rem;
    height: 2rem;
    border-radius: 9999px;
    object-fit: contain;
}

.nav-links {
    display: none;
    align-items: center;
    gap: 2rem;
}

.nav-link {
    font-size: 0.875rem;
    color: var(--color-text);
}

.nav-link:hover {
    opacity: 0.8;
}

.nav-toggle {
    display: inline-flex;
    background: none;
    border: 0;
    padding: 0;
    cursor: pointer;
    color: var(--color-text);
}

.nav-collapsible {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 0 1rem 1rem;
    background: var(--color-bg);
}

.nav-collapsible[hidden] {
    display: none;
}

.nav-collapsible .nav-link {
    padding: 0.5rem 0;
}

@media (min-width: 768px) {
    .nav-links {
        display: flex;
    }

    .nav-toggle,
    .nav-collapsible {
        display: none;
    }

    .section {
        padding-left: 1.5rem;
        padding-right: 1.5rem;
    }

    .section-title {
        font-size: 2.25rem;
    }

    .section-subtitle {
        font-size: 1.125rem;
    }
}

/* ---- Hero ---- */

.hero {
    position: relative;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    opacity: 0.1;
    pointer-events: none;
}

.hero-backdrop svg {
    width: 100%;
    height: 100%;
}

.hero-backdrop path {
    stroke: var(--color-border);
}

.hero-grid {
    position: relative;
    display: grid;
    gap: 2.5rem;
    align-items: center;
    padding: 4rem 0;
}

.hero-title {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 600;
    line-height: 1.15;
    animation: hero-rise 0.6s ease-out both;
}

.hero-tagline {
    margin-top: 1.25rem;
    font-size: 1.125rem;
    color: var(--color-muted);
}

.hero-actions {
    margin-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.hero-partner {
    margin-top: 2rem;
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 0.875rem;
}

.partner-logo {
    height: 2rem;
    width: auto;
    min-width: 2rem;
}

.highlights {
    display: grid;
    gap: 1rem;
}

.highlight {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}

@keyframes hero-rise {
    from {
        opacity: 0;
        transform: translateY(10px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

/* ---- Grids ---- */

.grid {
    display: grid;
    gap: 1.5rem;
}

.about-copy {
    line-height: 2rem;
    color: var(--color-muted);
}

.reasons {
    margin: 0.75rem 0 0;
    padding: 0;
    list-style: none;
    font-size: 0.875rem;
    color: var(--color-muted);
}

.reasons li + li {
    margin-top: 0.5rem;
}

.card-cta {
    margin-top: 1rem;
}

.badge {
    font-size: 0.75rem;
    vertical-align: super;
    color: var(--color-gold);
}

.member {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.member-photo {
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    object-fit: cover;
    border: 1px solid var(--color-gold);
    background: var(--color-border);
}

.testimonial-stars {
    display: flex;
    align-items: center;
    gap: 0.25rem;
    color: var(--color-gold);
}

.attribution {
    font-size: 0.75rem;
}

/* ---- Contact ---- */

.contact-line {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 0.875rem;
}

.contact-line + .contact-line {
    margin-top: 0.75rem;
}

.contact-line svg {
    color: var(--color-gold);
    flex-shrink: 0;
}

.contact-line a:hover {
    text-decoration: underline;
}

.socials {
    margin-top: 1.25rem;
    display: flex;
    align-items: center;
    gap: 1rem;
}

.contact-form {
    display: grid;
    gap: 1rem;
}

.contact-form input,
.contact-form textarea {
    border-radius: 0.75rem;
    padding: 0.75rem 1rem;
    background: transparent;
    border: 1px solid var(--color-border);
    color: var(--color-text);
    font: inherit;
}

.contact-form textarea {
    min-height: 140px;
}

/* ---- Footer ---- */

.footer {
    margin-top: 2.5rem;
    border-top: 1px solid var(--color-border);
}

.footer-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 2.5rem 1rem;
    display: grid;
    gap: 1.5rem;
    align-items: center;
}

.footer-brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--color-gold);
}

.footer-links {
    display: flex;
    gap: 1.5rem;
    font-size: 0.875rem;
}

.footer-legal {
    font-size: 0.75rem;
    color: var(--color-muted);
}

.footer-legal a:hover {
    text-decoration: underline;
}

@media (min-width: 640px) {
    .hero-grid {
        padding: 6rem 0;
    }

    .hero-title {
        font-size: 3rem;
    }

    .grid-sm-2,
    .contact-form {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }

    .contact-form .span-full {
        grid-column: span 2 / span 2;
    }
}

@media (min-width: 768px) {
    .grid-md-2 {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }

    .grid-md-3,
    .footer-inner {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }

    .footer-links {
        justify-content: center;
    }

    .footer-legal {
        text-align: right;
    }
}

@media (min-width: 1024px) {
    .hero-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }

    .hero-title {
        font-size: 3.75rem;
    }

    .grid-lg-3 {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }

    .grid-lg-4 {
        grid-template-columns: repeat(4, minmax(0, 1fr));
    }

    .span-lg-2 {
        grid-column: span 2 / span 2;
    }

    .section {
        padding-left: 2rem;
        padding-right: 2rem;
    }
}
"#;
