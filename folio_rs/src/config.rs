//! Site configuration files.
//!
//! A site is described by one TOML (or JSON) file whose top-level keys are the
//! fields of [`Site`]: `profile`, `links`, `skills`, `experience`, `projects`
//! and `resume_document`. Only `links` is required.

use std::path::{Path, PathBuf};

use folio_page::types::Site;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::validate;

/// Config path used when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

/// Sample configuration written by `folio init`.
pub const SAMPLE_CONFIG: &str = include_str!("../assets/site.toml");

/// On-disk config format, picked by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.toml` or `.json` (case-insensitive); anything else is unsupported.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse `content` as a site. `path` is only used in error messages.
pub fn parse_site(content: &str, format: ConfigFormat, path: &Path) -> Result<Site> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        }),
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|source| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Read and parse a site file without validating it.
pub fn load_site(path: &Path) -> Result<Site> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let site = parse_site(&content, format, path)?;
    debug!(
        path = %path.display(),
        projects = site.projects.len(),
        experience = site.experience.len(),
        skills = site.skills.len(),
        "loaded site config"
    );
    Ok(site)
}

/// Read, parse and validate a site file.
pub fn load_validated(path: &Path) -> Result<Site> {
    let site = load_site(path)?;
    validate::validate_site(&site)?;
    Ok(site)
}

/// The bundled sample site.
pub fn sample_site() -> Result<Site> {
    parse_site(
        SAMPLE_CONFIG,
        ConfigFormat::Toml,
        Path::new("assets/site.toml"),
    )
}

/// Write [`SAMPLE_CONFIG`] to `path`, refusing to replace an existing file
/// unless `force` is set. Missing parent directories are created.
pub fn write_sample(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, SAMPLE_CONFIG).map_err(write_err)?;
    Ok(path.to_path_buf())
}
