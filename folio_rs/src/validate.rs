//! Site checks.
//!
//! [`validate_site`] enforces the link rules a page cannot work without.
//! [`lint_site`] reports content that renders but probably looks wrong; those
//! findings never stop a build.

use std::collections::HashMap;

use folio_page::types::{RESUME_PATH, Site};
use url::Url;

use crate::error::{ConfigError, Result, ValidationIssue};

/// Check link shapes. Every problem is reported, not just the first.
pub fn validate_site(site: &Site) -> Result<()> {
    let issues = validation_issues(site);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(issues))
    }
}

/// The hard problems [`validate_site`] would reject, as a list.
pub fn validation_issues(site: &Site) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let links = &site.links;

    if let Err(message) = check_mailto(&links.email) {
        issues.push(ValidationIssue::new("links.email", message));
    }
    if let Err(message) = check_web_url(&links.linkedin) {
        issues.push(ValidationIssue::new("links.linkedin", message));
    }
    if let Err(message) = check_web_url(&links.github) {
        issues.push(ValidationIssue::new("links.github", message));
    }
    if let Err(message) = check_site_path(&links.resume) {
        issues.push(ValidationIssue::new("links.resume", message));
    }
    if site.resume_document.trim().is_empty() {
        issues.push(ValidationIssue::new("resume_document", "cannot be empty"));
    }

    for (idx, project) in site.projects.iter().enumerate() {
        if let Err(message) = check_web_url(&project.href) {
            issues.push(ValidationIssue::new(format!("projects[{idx}].href"), message));
        }
    }

    issues
}

/// Soft findings: empty display fields, repeated skills, a resume link that
/// bypasses the redirect.
pub fn lint_site(site: &Site) -> Vec<ValidationIssue> {
    let mut warnings = Vec::new();

    if site.links.resume != RESUME_PATH {
        warnings.push(ValidationIssue::new(
            "links.resume",
            format!("does not point at {RESUME_PATH}, so the resume redirect is never used"),
        ));
    }

    for (idx, entry) in site.experience.iter().enumerate() {
        if entry.role.trim().is_empty() {
            warnings.push(ValidationIssue::new(format!("experience[{idx}].role"), "is empty"));
        }
        if entry.company.trim().is_empty() {
            warnings.push(ValidationIssue::new(
                format!("experience[{idx}].company"),
                "is empty",
            ));
        }
        for (b, bullet) in entry.bullets.iter().enumerate() {
            if bullet.trim().is_empty() {
                warnings.push(ValidationIssue::new(
                    format!("experience[{idx}].bullets[{b}]"),
                    "is empty",
                ));
            }
        }
    }

    for (idx, project) in site.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            warnings.push(ValidationIssue::new(format!("projects[{idx}].title"), "is empty"));
        }
        if matches!(project.image.as_deref(), Some(src) if src.trim().is_empty()) {
            warnings.push(ValidationIssue::new(
                format!("projects[{idx}].image"),
                "is empty and falls back to the placeholder",
            ));
        }
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for skill in &site.skills {
        *seen.entry(skill.as_str()).or_default() += 1;
    }
    for skill in &site.skills {
        if let Some(count) = seen.remove(skill.as_str()).filter(|count| *count > 1) {
            warnings.push(ValidationIssue::new(
                "skills",
                format!("{skill:?} is listed {count} times"),
            ));
        }
    }

    warnings
}

fn check_mailto(value: &str) -> std::result::Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URI {value:?}: {e}"))?;
    if url.scheme() != "mailto" {
        return Err(format!("must be a mailto: URI, got scheme {:?}", url.scheme()));
    }
    if url.path().is_empty() {
        return Err("mailto: URI has no address".to_string());
    }
    Ok(())
}

fn check_web_url(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err("URL cannot be empty".to_string());
    }
    let url = Url::parse(value).map_err(|e| format!("invalid URL {value:?}: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("unsupported URL scheme {scheme:?}, expected http or https")),
    }
}

fn check_site_path(value: &str) -> std::result::Result<(), String> {
    if !value.starts_with('/') || value.starts_with("//") {
        return Err(format!("must be a site-relative path starting with '/', got {value:?}"));
    }
    if value.contains(char::is_whitespace) {
        return Err(format!("path cannot contain whitespace: {value:?}"));
    }
    Ok(())
}
