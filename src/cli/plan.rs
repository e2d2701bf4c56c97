//! Dry-run preview of a dump.

use crate::cli::options::DumpArgs;
use crate::cli::CliContext;
use crate::core::args::build_command;
use crate::models::dump_request::DumpRequest;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub dump: DumpArgs,

    /// Output format (text|json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,
}

pub async fn run(ctx: &CliContext, args: PlanArgs) -> Result<()> {
    let mut overrides = args.dump.into_profile();
    overrides.run_dry = Some(true);
    let request = ctx.request(overrides)?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&plan_json(&request))?);
        return Ok(());
    }

    println!(
        "Plan: dump '{}' from {}@{}:{}",
        request.database, request.user, request.host, request.port
    );
    println!("  output: {}", request.output_path().display());
    println!("  compress: {}", if request.compress { "yes" } else { "no" });
    if !request.tables.is_empty() {
        println!("  tables: {}", request.tables.join(", "));
    }
    if !request.ignore_table.is_empty() {
        println!("  ignored: {}", request.ignore_table.join(", "));
    }
    println!();
    crate::dump(&request).await?;
    println!("\nNo changes made (dry-run).");
    Ok(())
}

fn plan_json(request: &DumpRequest) -> serde_json::Value {
    let command = build_command(request);
    let compress = command.compress_step().map(|step| {
        serde_json::json!({
            "program": step.program_name(),
            "args": step
                .args
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>(),
        })
    });
    serde_json::json!({
        "action": "dump",
        "database": request.database,
        "output": request.output_path().display().to_string(),
        "program": command.dump().program_name(),
        "args": command.redacted_args(),
        "compress": compress,
        "command_line": command.render_redacted(),
    })
}
