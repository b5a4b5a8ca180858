#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! apt-groupinstall: query package groups from the comps catalog.

mod cli;
mod commands;
mod comps;
mod types;

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error, write_usage};
use comps::{CompsError, DEFAULT_COMPS_PATH, load_catalog};
use types::ErrorOutput;

fn main() {
    // Arguments are checked before the catalog is read, so a usage error never
    // depends on the catalog being present.
    let Ok(cli) = Cli::try_parse() else {
        let prog = std::env::args()
            .next()
            .unwrap_or_else(|| "apt-groupinstall".to_owned());
        let _ = write_usage(&prog, &mut io::stdout().lock());
        std::process::exit(1);
    };

    cli::logging::init(cli.debug);
    let ctx = OutputCtx::new(cli.json);
    if !cli.command.ignored_args().is_empty() {
        tracing::debug!(ignored = ?cli.command.ignored_args(), "ignoring trailing arguments");
    }

    if let Err(err) = run(&cli, ctx) {
        tracing::debug!(error = ?err, "command failed");
        write_error(&ErrorOutput::from_comps_error(&err), ctx);
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli, ctx: OutputCtx) -> Result<(), CompsError> {
    let catalog = load_catalog(Path::new(DEFAULT_COMPS_PATH))?;
    if catalog.is_empty() {
        tracing::warn!(path = DEFAULT_COMPS_PATH, "catalog has no groups");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&cli.command, &catalog, ctx, &mut out)?;
    out.flush()?;
    Ok(())
}
