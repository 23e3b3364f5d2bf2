use std::process::ExitCode;

use clap::Parser;
use folio::cli::{Cli, init_tracing, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    tracing::debug!("folio v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("folio: error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
