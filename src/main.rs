use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = mysqldump_runner::cli::Cli::parse();
    mysqldump_runner::util::logging::init(cli.verbose);
    cli.run().await
}
