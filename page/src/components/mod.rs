//! Leptos UI components for the portfolio page.
//!
//! Each component is a `#[component]` function of its props only. None of them
//! reads another component's output, so any of them can be rendered alone.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Header
//! ├── Hero
//! │   └── AccentGlow
//! ├── Section "projects"   └── ProjectsGrid
//! ├── Section "experience" └── ExperienceList
//! ├── Section "skills"     └── SkillsCloud
//! ├── Section "contact"    └── ContactCard
//! └── Footer
//!
//! RedirectDocument
//! ```
//!
//! # Usage
//!
//! Components are normally used through [`crate::render`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use folio_page::components::{Section, SkillsCloud};
//!
//! view! {
//!     <Section id="skills" title="Skills">
//!         <SkillsCloud items=vec!["Rust".to_string()] />
//!     </Section>
//! }
//! ```

mod contact;
mod document;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod section;
mod skills;

pub use contact::ContactCard;
pub use document::{PageDocument, RedirectDocument};
pub use experience::ExperienceList;
pub use footer::Footer;
pub use header::{Header, NAV_SECTIONS};
pub use hero::Hero;
pub use projects::ProjectsGrid;
pub use section::Section;
pub use skills::SkillsCloud;
