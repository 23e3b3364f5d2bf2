//! Static output for a hosting directory.
//!
//! A build writes two documents:
//!
//! ```text
//! <out>/index.html          the portfolio page
//! <out>/resume/index.html   redirect stub for the resume path
//! ```
//!
//! Static hosts serve `<out>/resume/index.html` for `/resume`, which is how the
//! client-side redirect reaches visitors without any server logic.

use std::path::{Path, PathBuf};

use folio_page::clock::Clock;
use folio_page::types::{RESUME_PATH, Site};
use folio_page::{RenderOutcome, render};
use tracing::{debug, info};

use crate::error::BuildError;

/// Output directory used when none is given.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Files written by [`build_site`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildReport {
    /// The portfolio page
    pub page: PathBuf,
    /// The resume redirect stub
    pub redirect: PathBuf,
    /// Where the redirect stub points
    pub redirect_target: String,
    /// Copyright year rendered into the footer
    pub year: i32,
}

/// File that serves navigation `path` under `out_dir` (`<path>/index.html`).
pub fn output_file(out_dir: &Path, path: &str) -> PathBuf {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(trimmed).join("index.html")
    }
}

/// Render the page and the resume redirect into `out_dir`.
pub fn build_site(site: &Site, out_dir: &Path, clock: &dyn Clock) -> Result<BuildReport, BuildError> {
    let year = clock.year();

    let page = output_file(out_dir, "/");
    let page_html = render(site, "/", clock).into_html();
    write_document(&page, &page_html)?;
    info!(path = %page.display(), year, "wrote page");

    let redirect = output_file(out_dir, RESUME_PATH);
    let outcome = render(site, RESUME_PATH, clock);
    let redirect_target = match &outcome {
        RenderOutcome::Redirect { location, .. } => location.clone(),
        RenderOutcome::Page { .. } => site.resume_document.clone(),
    };
    write_document(&redirect, outcome.html())?;
    info!(path = %redirect.display(), target = %redirect_target, "wrote resume redirect");

    Ok(BuildReport {
        page,
        redirect,
        redirect_target,
        year,
    })
}

fn write_document(path: &Path, html: &str) -> Result<(), BuildError> {
    let write_err = |source: std::io::Error| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, html).map_err(write_err)?;
    debug!(path = %path.display(), bytes = html.len(), "document written");
    Ok(())
}
