//! `folio` command line.
//!
//! ```bash
//! folio init                       # write the sample site.toml
//! folio check                      # validate + lint the config
//! folio render --path /resume      # print one document to stdout
//! folio build --out public         # write index.html + resume/index.html
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use folio_page::clock::{Clock, FixedClock, SystemClock};
use tracing::{info, warn};

use crate::build::{DEFAULT_OUT_DIR, build_site};
use crate::config::{DEFAULT_CONFIG_FILE, load_site, load_validated, write_sample};
use crate::validate::{lint_site, validation_issues};

/// Levels accepted by `--log-level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Build a static portfolio page from a site config")]
#[command(version)]
pub struct Cli {
    /// Log level; RUST_LOG wins when set
    #[arg(
        long,
        global = true,
        default_value = "info",
        value_parser = PossibleValuesParser::new(LOG_LEVELS)
    )]
    pub log_level: String,

    /// Site config file (.toml or .json)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the sample config to the config path
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate the config and report content warnings
    Check,
    /// Render the document served at one path to stdout
    Render {
        /// Navigation path, e.g. "/" or "/resume"
        #[arg(long, default_value = "/")]
        path: String,
        /// Render as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Write the page and the resume redirect to a directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,
        /// Render as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Install the stderr subscriber. `RUST_LOG` overrides `level`.
pub fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn clock_for(date: Option<NaiveDate>) -> Box<dyn Clock> {
    match date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}

/// Execute one parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { force } => {
            let path = write_sample(&cli.config, force)?;
            info!(path = %path.display(), "wrote sample config");
            println!("Wrote {}", path.display());
        }
        Command::Check => check(&cli.config)?,
        Command::Render { path, date } => {
            let site = load_validated(&cli.config)?;
            let clock = clock_for(date);
            let outcome = folio_page::render(&site, &path, clock.as_ref());
            if let Some(location) = outcome.redirect_location() {
                info!(path = %path, location, "path redirects");
            }

            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(outcome.html().as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("writing document to stdout")?;
        }
        Command::Build { out, date } => {
            let site = load_validated(&cli.config)?;
            for warning in lint_site(&site) {
                warn!("{}", warning);
            }
            let clock = clock_for(date);
            let report = build_site(&site, &out, clock.as_ref())
                .with_context(|| format!("building into {}", out.display()))?;

            println!("Wrote {}", report.page.display());
            println!(
                "Wrote {} -> {}",
                report.redirect.display(),
                report.redirect_target
            );
        }
    }
    Ok(())
}

fn check(config: &std::path::Path) -> Result<()> {
    let site = load_site(config)?;

    let errors = validation_issues(&site);
    let warnings = lint_site(&site);
    for warning in &warnings {
        println!("warning: {}", warning);
    }
    for error in &errors {
        println!("error: {}", error);
    }

    if !errors.is_empty() {
        bail!(
            "{} is invalid ({} error(s), {} warning(s))",
            config.display(),
            errors.len(),
            warnings.len()
        );
    }

    println!(
        "ok: {} ({} projects, {} jobs, {} skills, {} warning(s))",
        config.display(),
        site.projects.len(),
        site.experience.len(),
        site.skills.len(),
        warnings.len()
    );
    Ok(())
}
