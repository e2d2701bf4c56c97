//! Dump options shared by `run` and `plan`.

use crate::constants;
use crate::models::profile::DumpProfile;
use clap::Args;
use std::path::PathBuf;
use zeroize::Zeroizing;

#[derive(Args, Debug, Default, Clone)]
pub struct DumpArgs {
    /// Database (schema) to dump
    #[arg(long)]
    pub database: Option<String>,

    /// File the dump is written to
    #[arg(long, value_name = "PATH")]
    pub result_file: Option<PathBuf>,

    /// MySQL server host
    #[arg(long)]
    pub host: Option<String>,

    /// MySQL server port
    #[arg(long)]
    pub port: Option<u16>,

    /// MySQL user
    #[arg(long)]
    pub user: Option<String>,

    /// MySQL password (prefer the environment variable over this flag)
    #[arg(long, env = constants::PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// mysqldump executable path or command name
    #[arg(long, value_name = "PATH")]
    pub mysqldump_path: Option<String>,

    /// gzip executable path or command name
    #[arg(long, value_name = "PATH")]
    pub gzip_path: Option<String>,

    /// Table to dump (repeatable; default: all tables)
    #[arg(long = "table", value_name = "TABLE")]
    pub tables: Vec<String>,

    /// Table of the database to leave out (repeatable)
    #[arg(long, value_name = "TABLE")]
    pub ignore_table: Vec<String>,

    /// Row filter passed to --where
    #[arg(long = "where", value_name = "CLAUSE")]
    pub where_clause: Option<String>,

    /// One INSERT statement per row
    #[arg(long)]
    pub skip_extended_insert: bool,

    /// Leave MySQL-specific table options out of CREATE TABLE (default)
    #[arg(long, conflicts_with = "create_options")]
    pub skip_create_options: bool,

    /// Keep MySQL-specific table options in CREATE TABLE
    #[arg(long)]
    pub create_options: bool,

    /// Do not emit DROP TABLE before CREATE TABLE (default)
    #[arg(long, conflicts_with = "add_drop_table")]
    pub skip_add_drop_table: bool,

    /// Emit DROP TABLE before each CREATE TABLE
    #[arg(long)]
    pub add_drop_table: bool,

    #[arg(long)]
    pub skip_lock_tables: bool,

    #[arg(long)]
    pub skip_disable_keys: bool,

    #[arg(long)]
    pub skip_add_locks: bool,

    #[arg(long)]
    pub delayed_insert: bool,

    #[arg(long)]
    pub add_drop_trigger: bool,

    /// Include column names in every INSERT
    #[arg(long)]
    pub complete_insert: bool,

    /// Gzip the result file after a successful dump
    #[arg(long)]
    pub compress: bool,

    /// Structure only, no rows
    #[arg(long)]
    pub no_data: bool,

    /// Include stored procedures and functions
    #[arg(long)]
    pub routines: bool,

    #[arg(long)]
    pub triggers: bool,

    #[arg(long)]
    pub events: bool,

    /// Dump inside one consistent transaction
    #[arg(long)]
    pub single_transaction: bool,

    /// Dump binary columns as hex literals
    #[arg(long)]
    pub hex_blob: bool,

    #[arg(long)]
    pub compact: bool,

    #[arg(long)]
    pub skip_comments: bool,
}

impl DumpArgs {
    /// Options given on the command line, as a profile layer.
    /// Flags that were not passed stay unset so the profile can supply them.
    pub fn into_profile(self) -> DumpProfile {
        DumpProfile {
            mysqldump_path: self.mysqldump_path,
            database: self.database,
            result_file: self.result_file,
            host: self.host,
            port: self.port,
            user: self.user,
            password: self.password.map(Zeroizing::new),
            skip_extended_insert: set(self.skip_extended_insert),
            skip_create_options: toggle(self.skip_create_options, self.create_options),
            skip_add_drop_table: toggle(self.skip_add_drop_table, self.add_drop_table),
            skip_lock_tables: set(self.skip_lock_tables),
            skip_disable_keys: set(self.skip_disable_keys),
            skip_add_locks: set(self.skip_add_locks),
            delayed_insert: set(self.delayed_insert),
            add_drop_trigger: set(self.add_drop_trigger),
            complete_insert: set(self.complete_insert),
            compress: set(self.compress),
            gzip_path: self.gzip_path,
            run_dry: None,
            log: None,
            tables: list(&self.tables),
            no_data: set(self.no_data),
            routines: set(self.routines),
            triggers: set(self.triggers),
            events: set(self.events),
            where_clause: self.where_clause,
            single_transaction: set(self.single_transaction),
            hex_blob: set(self.hex_blob),
            ignore_table: list(&self.ignore_table),
            compact: set(self.compact),
            skip_comments: set(self.skip_comments),
        }
    }
}

fn set(flag: bool) -> Option<bool> {
    flag.then_some(true)
}

fn toggle(skip: bool, keep: bool) -> Option<bool> {
    if keep {
        Some(false)
    } else if skip {
        Some(true)
    } else {
        None
    }
}

fn list(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}
