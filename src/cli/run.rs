//! Execute a dump.

use crate::cli::options::DumpArgs;
use crate::cli::CliContext;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub dump: DumpArgs,

    /// Print mysqldump's stdout on success and its stderr on failure
    #[arg(long)]
    pub log: bool,

    /// Print the command line instead of running it
    #[arg(long)]
    pub run_dry: bool,
}

pub async fn run(ctx: &CliContext, args: RunArgs) -> Result<()> {
    let mut overrides = args.dump.into_profile();
    if args.log {
        overrides.log = Some(true);
    }
    if args.run_dry {
        overrides.run_dry = Some(true);
    }

    let request = ctx.request(overrides)?;
    crate::dump(&request)
        .await
        .with_context(|| format!("dump database '{}'", request.database))?;

    if !request.run_dry {
        println!("Dump written to {}", request.output_path().display());
    }
    Ok(())
}
