//! CLI routing and command dispatch.

use crate::constants;
use crate::core::profile;
use crate::models::dump_request::DumpRequest;
use crate::models::profile::DumpProfile;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Password;
use std::path::PathBuf;
use zeroize::Zeroizing;

pub mod doctor;
pub mod options;
pub mod plan;
pub mod run;

/// Shared context passed to all command handlers.
pub struct CliContext {
    /// Profile loaded from `--config`, empty when none was given.
    pub profile: DumpProfile,
    pub profile_path: Option<PathBuf>,
    pub non_interactive: bool,
}

impl CliContext {
    /// Layer `overrides` over the loaded profile and build the request.
    ///
    /// The password comes from the merged options, or from a prompt when
    /// running interactively. Dry runs never prompt.
    pub fn request(&self, overrides: DumpProfile) -> Result<DumpRequest> {
        let mut merged = self.profile.clone().overlay(overrides);

        let missing = profile::missing_required(&merged);
        if !missing.is_empty() {
            bail!(
                "missing required setting(s): {} (pass them as options or set them in the profile)",
                missing.join(", ")
            );
        }

        let password = self.password(&mut merged)?;
        profile::into_request(merged, &password)
    }

    /// Take the password out of `merged`, prompting when none was given.
    fn password(&self, merged: &mut DumpProfile) -> Result<Zeroizing<String>> {
        if let Some(password) = merged.password.take() {
            return Ok(password);
        }
        if merged.run_dry.unwrap_or(false) {
            return Ok(Zeroizing::new(String::new()));
        }
        if self.non_interactive {
            bail!(
                "no password given: pass --password, set {}, or add it to the profile",
                constants::PASSWORD_ENV
            );
        }

        let prompt = format!(
            "MySQL password for {}@{}",
            merged.user.as_deref().unwrap_or_default(),
            merged.host.as_deref().unwrap_or_default()
        );
        let password = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .context("read password")?;
        Ok(Zeroizing::new(password))
    }
}

#[derive(Parser, Debug)]
#[command(name = "mysqldump-runner", version, about = "Run mysqldump from typed options and TOML profiles")]
pub struct Cli {
    /// TOML profile with dump options; command-line options override it
    #[arg(long, global = true, value_name = "PATH", env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Run in non-interactive mode (no password prompt, suitable for automation)
    #[arg(long, global = true, env = constants::NON_INTERACTIVE_ENV)]
    pub non_interactive: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let profile = match &self.config {
            Some(path) => profile::load(path)?,
            None => DumpProfile::default(),
        };

        let ctx = CliContext {
            profile,
            profile_path: self.config,
            non_interactive: self.non_interactive,
        };

        match self.command {
            Commands::Run(args) => run::run(&ctx, args).await,
            Commands::Plan(args) => plan::run(&ctx, args).await,
            Commands::Doctor(args) => doctor::run(&ctx, args).await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run mysqldump with the given options
    Run(run::RunArgs),
    /// Dry-run preview of the mysqldump command line
    Plan(plan::PlanArgs),
    /// Check that mysqldump and gzip are available (safe, read-only)
    Doctor(doctor::DoctorArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn ctx(profile: DumpProfile) -> CliContext {
        CliContext {
            profile,
            profile_path: None,
            non_interactive: true,
        }
    }

    fn connection() -> DumpProfile {
        DumpProfile {
            database: Some("shop".into()),
            result_file: Some(PathBuf::from("/var/backups/shop.sql")),
            host: Some("db.internal".into()),
            port: Some(3306),
            user: Some("backup".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::try_parse_from([
            "mysqldump-runner",
            "run",
            "--database",
            "shop",
            "--table",
            "orders",
            "--table",
            "customers",
            "--ignore-table",
            "sessions",
            "--where",
            "id > 10",
            "--add-drop-table",
            "--compress",
            "--log",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.log);
        let profile = args.dump.into_profile();
        assert_eq!(profile.database.as_deref(), Some("shop"));
        assert_eq!(
            profile.tables,
            Some(vec!["orders".to_string(), "customers".to_string()])
        );
        assert_eq!(profile.ignore_table, Some(vec!["sessions".to_string()]));
        assert_eq!(profile.where_clause.as_deref(), Some("id > 10"));
        assert_eq!(profile.skip_add_drop_table, Some(false));
        assert_eq!(profile.compress, Some(true));
    }

    #[test]
    fn test_conflicting_create_options() {
        let result = Cli::try_parse_from([
            "mysqldump-runner",
            "plan",
            "--create-options",
            "--skip-create-options",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_cli_overrides_profile() {
        let ctx = ctx(DumpProfile {
            password: Some(Zeroizing::new("from-profile".into())),
            ..connection()
        });
        let request = ctx
            .request(DumpProfile {
                host: Some("replica.internal".into()),
                password: Some(Zeroizing::new("from-cli".into())),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(request.host, "replica.internal");
        assert_eq!(request.database, "shop");
        assert_eq!(request.password.as_str(), "from-cli");
    }

    #[test]
    fn test_password_is_taken_from_profile() {
        let mut merged = DumpProfile {
            password: Some(Zeroizing::new("s3cret".into())),
            ..connection()
        };
        let password = ctx(DumpProfile::default()).password(&mut merged).unwrap();
        assert_eq!(password.as_str(), "s3cret");
        assert!(merged.password.is_none());
    }

    #[test]
    fn test_request_without_password_fails_non_interactive() {
        let err = ctx(connection())
            .request(DumpProfile::default())
            .unwrap_err()
            .to_string();
        assert!(err.contains("no password given"));
    }

    #[test]
    fn test_dry_run_needs_no_password() {
        let request = ctx(connection())
            .request(DumpProfile {
                run_dry: Some(true),
                ..Default::default()
            })
            .unwrap();
        assert!(request.run_dry);
        assert!(request.password.is_empty());
    }

    #[test]
    fn test_missing_settings_reported_before_password() {
        let err = ctx(DumpProfile::default())
            .request(DumpProfile::default())
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing required setting(s): database"));
    }
}
