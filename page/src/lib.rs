//! # folio-page
//!
//! Leptos SSR renderer for a single static portfolio page.
//!
//! The page is a pure function of its data: a [`types::Site`], the navigation
//! path being served and a [`clock::Clock`] for the footer year. Nothing is read
//! from ambient state, so every render is reproducible in tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_page::clock::FixedClock;
//! use folio_page::types::Site;
//! use folio_page::{render, RenderOutcome};
//!
//! let site = Site::default();
//! let clock = FixedClock::ymd(2025, 6, 1).unwrap();
//!
//! match render(&site, "/", &clock) {
//!     RenderOutcome::Page { html } => assert!(html.starts_with("<!DOCTYPE html>")),
//!     RenderOutcome::Redirect { .. } => unreachable!(),
//! }
//!
//! let outcome = render(&site, "/resume", &clock);
//! assert_eq!(outcome.redirect_location(), Some("/Eric_Resume.pdf"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - page data model
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`clock`] - date source for the footer
//!
//! Leptos 0.8's `RenderHtml::to_html()` produces the markup; no reactive
//! runtime or hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod clock;
pub mod components;
pub mod styles;
pub mod types;

use clock::Clock;
use components::{PageDocument, RedirectDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{Site, RESUME_PATH};

/// What a navigation path resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Render the portfolio page
    Page,
    /// Send the browser elsewhere without rendering the page
    Redirect(String),
}

impl Route {
    /// Resolve `path` for `site`. Only an exact [`RESUME_PATH`] redirects.
    pub fn resolve(site: &Site, path: &str) -> Self {
        if path == RESUME_PATH {
            Route::Redirect(site.resume_document.clone())
        } else {
            Route::Page
        }
    }
}

/// Result of rendering one navigation path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The full portfolio document
    Page {
        /// Complete HTML document
        html: String,
    },
    /// A redirect stub; the page body was not rendered
    Redirect {
        /// Where the browser is sent
        location: String,
        /// Complete HTML document performing the redirect
        html: String,
    },
}

impl RenderOutcome {
    /// The rendered document, whichever kind it is.
    pub fn html(&self) -> &str {
        match self {
            RenderOutcome::Page { html } | RenderOutcome::Redirect { html, .. } => html,
        }
    }

    /// Redirect target, if this outcome is a redirect.
    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            RenderOutcome::Page { .. } => None,
            RenderOutcome::Redirect { location, .. } => Some(location),
        }
    }

    /// Consume the outcome, keeping only the document.
    pub fn into_html(self) -> String {
        match self {
            RenderOutcome::Page { html } | RenderOutcome::Redirect { html, .. } => html,
        }
    }
}

/// Render the document served at `path`.
///
/// The resume path produces a redirect and nothing else. Every other path
/// produces the full page with the footer year taken from `clock`.
pub fn render(site: &Site, path: &str, clock: &dyn Clock) -> RenderOutcome {
    match Route::resolve(site, path) {
        Route::Redirect(location) => {
            let html = render_redirect(&location);
            RenderOutcome::Redirect { location, html }
        }
        Route::Page => RenderOutcome::Page {
            html: render_page(site, clock.year()),
        },
    }
}

/// Render the full portfolio page with `year` in the footer.
///
/// # Example
///
/// ```rust
/// use folio_page::{render_page, types::Site};
///
/// let html = render_page(&Site::default(), 2024);
/// assert!(html.contains("© 2024 Eric Lee"));
/// ```
pub fn render_page(site: &Site, year: i32) -> String {
    let doc = view! { <PageDocument site=site.clone() year=year /> };
    with_doctype(doc.to_html())
}

/// Render the redirect stub for `location`.
pub fn render_redirect(location: &str) -> String {
    let doc = view! { <RedirectDocument location=location.to_string() /> };
    with_doctype(doc.to_html())
}

// Leptos doesn't include DOCTYPE, so we add it
fn with_doctype(html: String) -> String {
    format!("<!DOCTYPE html>\n{}", html)
}
