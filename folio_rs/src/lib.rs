//! # folio
//!
//! Builds a single static portfolio page from one configuration file.
//!
//! The page itself is rendered by [`folio_page`]; this crate loads and checks
//! the site data, picks the clock, and writes the output a static host serves.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use folio::{build, config};
//! use folio_page::clock::SystemClock;
//! use std::path::Path;
//!
//! let site = config::load_validated(Path::new("site.toml")).unwrap();
//! let report = build::build_site(&site, Path::new("dist"), &SystemClock).unwrap();
//! println!("page at {}", report.page.display());
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! folio init            # sample site.toml
//! folio check           # validate links, lint content
//! folio build           # dist/index.html + dist/resume/index.html
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod validate;

pub use build::{BuildReport, build_site};
pub use config::{load_site, load_validated};
pub use error::{BuildError, ConfigError, ValidationIssue};
