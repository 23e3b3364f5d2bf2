//! Errors raised while loading and checking a site configuration.
//!
//! Rendering itself cannot fail; everything here happens before a page is
//! built.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for configuration work.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for a site
    #[error("invalid TOML in {}: {source}", path.display())]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file is not valid JSON for a site
    #[error("invalid JSON in {}: {source}", path.display())]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Neither `.toml` nor `.json`
    #[error("unsupported config format for {} (expected .toml or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// `init` would overwrite an existing file
    #[error("{} already exists (pass --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    /// The sample config could not be written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsed fine but breaks a link or document rule
    #[error("{} validation error(s): {}", .0.len(), join_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

/// Errors raised while writing a built site.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A directory or file under the output root could not be written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single problem found in a site, tied to the field it concerns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted field path, e.g. `projects[2].href`
    pub field: String,
    /// What is wrong
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_issue() {
        let err = ConfigError::Invalid(vec![
            ValidationIssue::new("links.email", "must be a mailto: URI"),
            ValidationIssue::new("projects[0].href", "must be an absolute http(s) URL"),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("2 validation error(s)"));
        assert!(text.contains("links.email: must be a mailto: URI"));
        assert!(text.contains("projects[0].href"));
    }

    #[test]
    fn unsupported_format_names_the_file() {
        let err = ConfigError::UnsupportedFormat {
            path: PathBuf::from("site.yaml"),
        };
        assert!(err.to_string().contains("site.yaml"));
    }
}
