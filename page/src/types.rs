//! Page data types.
//!
//! Everything a page render needs is plain data. The types are designed to be:
//!
//! - **Serializable** - loaded from TOML or JSON via serde
//! - **Clone-friendly** - components take owned props without borrowing issues
//! - **Default-able** - build partial sites in tests with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use folio_page::types::{ProjectEntry, Site};
//!
//! let site = Site {
//!     skills: vec!["Rust".into(), "SQL".into()],
//!     projects: vec![ProjectEntry {
//!         title: "Tiny CLI".into(),
//!         stack: vec!["Rust".into()],
//!         href: "https://example.com/tiny".into(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(site.projects[0].image_src(), folio_page::types::PLACEHOLDER_IMAGE);
//! ```

use serde::{Deserialize, Serialize};

/// Image shown for a project that has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// The one navigation path that redirects instead of rendering the page.
pub const RESUME_PATH: &str = "/resume";

/// Default location of the static resume document.
pub const DEFAULT_RESUME_DOCUMENT: &str = "/Eric_Resume.pdf";

/// Everything rendered on the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Owner details and the fixed copy of the hero and contact card
    #[serde(default)]
    pub profile: Profile,
    /// Outbound destinations
    pub links: LinkSet,
    /// Skills in display order
    #[serde(default)]
    pub skills: Vec<String>,
    /// Jobs in display order (reverse-chronological by convention)
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    /// Projects in display order
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    /// Target of the [`RESUME_PATH`] redirect
    #[serde(default = "default_resume_document")]
    pub resume_document: String,
}

fn default_resume_document() -> String {
    DEFAULT_RESUME_DOCUMENT.to_string()
}

impl Default for Site {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            links: LinkSet::default(),
            skills: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            resume_document: default_resume_document(),
        }
    }
}

/// Owner details and static copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Name in the header title and the footer copyright line
    pub name: String,
    /// Small label next to the name in the header
    pub tagline: String,
    /// Hero heading
    pub headline: String,
    /// Hero paragraph, one entry per line
    pub intro: Vec<String>,
    /// Hero image source
    pub headshot: String,
    /// Contact card heading
    pub contact_heading: String,
    /// Contact card invitation text
    pub contact_message: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Eric Lee".into(),
            tagline: "Portfolio".into(),
            headline: "Software Engineer / Data Scientist".into(),
            intro: vec![
                "I like solving problems with fast, clean code.".into(),
                "Outside of coding, I love bouldering and reading manga like Berserk!".into(),
            ],
            headshot: "headshot.JPG".into(),
            contact_heading: "Let’s connect".into(),
            contact_message: "Open to internships, full-time roles, and collaborations.".into(),
        }
    }
}

/// Fixed set of named destinations.
///
/// All four keys are required when deserializing. `resume` is a site-relative
/// path, the others are absolute URIs (`email` is a `mailto:` URI).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    /// `mailto:` URI used by the contact card
    pub email: String,
    /// LinkedIn profile URL
    pub linkedin: String,
    /// GitHub profile URL
    pub github: String,
    /// Site-relative resume path used by the header
    pub resume: String,
}

/// One job on the experience timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Job title
    pub role: String,
    /// Employer
    pub company: String,
    /// Where the job was based
    #[serde(default)]
    pub location: String,
    /// Free-form date range, e.g. "May 2023 – Apr 2024"
    #[serde(default)]
    pub period: String,
    /// Achievements in display order
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// One card in the project gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Card heading, also the image alt text
    pub title: String,
    /// Technologies, one pill each, duplicates kept
    #[serde(default)]
    pub stack: Vec<String>,
    /// Short summary under the title
    #[serde(default)]
    pub description: String,
    /// External link the whole card points to
    pub href: String,
    /// Card image; [`PLACEHOLDER_IMAGE`] when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProjectEntry {
    /// Image source to render. An empty `image` counts as absent.
    pub fn image_src(&self) -> &str {
        match self.image.as_deref() {
            Some(src) if !src.is_empty() => src,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

impl ExperienceEntry {
    /// Stable key for the timeline item (`company-role`).
    pub fn key(&self) -> String {
        format!("{}-{}", self.company, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_falls_back_to_placeholder() {
        let mut project = ProjectEntry {
            title: "No image".into(),
            ..Default::default()
        };
        assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);

        project.image = Some(String::new());
        assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);

        project.image = Some("/shot.png".into());
        assert_eq!(project.image_src(), "/shot.png");
    }

    #[test]
    fn site_deserializes_with_defaults() {
        let site: Site = serde_json::from_str(
            r#"{
                "links": {
                    "email": "mailto:a@b.c",
                    "linkedin": "https://linkedin.com/in/a",
                    "github": "https://github.com/a",
                    "resume": "/resume"
                }
            }"#,
        )
        .expect("minimal site");

        assert_eq!(site.profile, Profile::default());
        assert_eq!(site.resume_document, DEFAULT_RESUME_DOCUMENT);
        assert!(site.skills.is_empty());
        assert!(site.projects.is_empty());
    }

    #[test]
    fn link_set_requires_every_key() {
        let err = serde_json::from_str::<LinkSet>(
            r#"{"email": "mailto:a@b.c", "linkedin": "https://x", "github": "https://y"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("resume"));
    }

    #[test]
    fn absent_image_is_not_serialized() {
        let project = ProjectEntry {
            title: "t".into(),
            href: "https://example.com".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&project).expect("serialize");
        assert!(!json.contains("image"));
    }
}
