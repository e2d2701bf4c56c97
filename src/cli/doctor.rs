//! Diagnostics for the dump toolchain and profile.

use crate::cli::CliContext;
use crate::constants;
use crate::core::profile;
use crate::util::bin;
use anyhow::{bail, Result};
use clap::Args;
use std::env;
use std::path::Path;
use tokio::process::Command;

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// mysqldump executable to check instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub mysqldump_path: Option<String>,

    /// gzip executable to check instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub gzip_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Pass,
    Info,
    Warn,
    Fail,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Pass => "PASS",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Fail => "FAIL",
        }
    }
}

#[derive(Debug)]
struct Check {
    level: Level,
    message: String,
}

impl Check {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

pub async fn run(ctx: &CliContext, args: DoctorArgs) -> Result<()> {
    let checks = collect(ctx, &args).await;
    let count = |level: Level| checks.iter().filter(|c| c.level == level).count();

    println!("Doctor:");
    for check in &checks {
        println!("  [{}] {}", check.level.tag(), check.message);
    }

    println!();
    let fail = count(Level::Fail);
    println!(
        "Doctor summary: {} pass, {} warn, {} fail",
        count(Level::Pass),
        count(Level::Warn),
        fail
    );
    if fail > 0 {
        bail!("doctor found {} failing check(s)", fail);
    }
    Ok(())
}

async fn collect(ctx: &CliContext, args: &DoctorArgs) -> Vec<Check> {
    let mut checks = Vec::new();
    let profile = &ctx.profile;

    match &ctx.profile_path {
        Some(path) => {
            checks.push(Check::new(
                Level::Pass,
                format!("profile loaded: {}", path.display()),
            ));
            let missing = profile::missing_required(profile);
            if missing.is_empty() {
                checks.push(Check::new(Level::Pass, "profile has all connection settings"));
            } else {
                checks.push(Check::new(
                    Level::Warn,
                    format!("profile missing: {} (must be passed as options)", missing.join(", ")),
                ));
            }
        }
        None => checks.push(Check::new(Level::Info, "no profile given (--config)")),
    }

    let mysqldump = args
        .mysqldump_path
        .clone()
        .or_else(|| profile.mysqldump_path.clone())
        .unwrap_or_else(|| constants::DEFAULT_MYSQLDUMP_PATH.to_string());
    match bin::find_executable(&mysqldump) {
        Some(path) => {
            let version = version_line(&path)
                .await
                .map(|v| format!(" ({})", v))
                .unwrap_or_default();
            checks.push(Check::new(
                Level::Pass,
                format!("mysqldump available: {}{}", path.display(), version),
            ));
        }
        None => checks.push(Check::new(
            Level::Fail,
            format!("mysqldump not found: {}", mysqldump),
        )),
    }

    let gzip = args
        .gzip_path
        .clone()
        .or_else(|| profile.gzip_path.clone())
        .unwrap_or_else(|| constants::DEFAULT_GZIP_PATH.to_string());
    match bin::find_executable(&gzip) {
        Some(path) => checks.push(Check::new(
            Level::Pass,
            format!("gzip available: {}", path.display()),
        )),
        None if profile.compress.unwrap_or(false) => checks.push(Check::new(
            Level::Fail,
            format!("gzip not found: {} (profile enables compress)", gzip),
        )),
        None => checks.push(Check::new(
            Level::Warn,
            format!("gzip not found: {} (needed for --compress)", gzip),
        )),
    }

    checks.push(password_source(ctx));
    checks
}

fn password_source(ctx: &CliContext) -> Check {
    if env::var_os(constants::PASSWORD_ENV).is_some() {
        Check::new(
            Level::Pass,
            format!("password from environment ({})", constants::PASSWORD_ENV),
        )
    } else if ctx.profile.password.is_some() {
        Check::new(
            Level::Warn,
            "password stored in profile (keep the file private)",
        )
    } else if ctx.non_interactive {
        Check::new(
            Level::Warn,
            format!(
                "no password source in non-interactive mode: set {} or pass --password",
                constants::PASSWORD_ENV
            ),
        )
    } else {
        Check::new(Level::Info, "password will be prompted for")
    }
}

async fn version_line(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}
