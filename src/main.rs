//! pg_url2conninfo
//!
//! Reads a `postgres://` URL from the command line (or `DATABASE_URL`) and
//! prints the equivalent libpq connection string.

use anyhow::Result;
use clap::Parser;
use pg_url2conninfo::core::{AppConfig, Args};
use pg_url2conninfo::{logging, output};
use tracing::{debug, error};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_format);

    let config = AppConfig::from_args(args).inspect_err(|e| {
        error!("{}", e);
    })?;
    debug!("Output format: {}", config.format);

    match output::render(&config) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            Err(e.into())
        }
    }
}
