//! TOML dump profile model.
//!
//! Every field is optional so a profile can carry just the connection
//! settings, just the flags, or both. Command-line options are layered on
//! top with [`DumpProfile::overlay`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zeroize::Zeroizing;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpProfile {
    pub mysqldump_path: Option<String>,
    pub database: Option<String>,
    pub result_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<Zeroizing<String>>,

    pub skip_extended_insert: Option<bool>,
    pub skip_create_options: Option<bool>,
    pub skip_add_drop_table: Option<bool>,
    pub skip_lock_tables: Option<bool>,
    pub skip_disable_keys: Option<bool>,
    pub skip_add_locks: Option<bool>,
    pub delayed_insert: Option<bool>,
    pub add_drop_trigger: Option<bool>,
    pub complete_insert: Option<bool>,
    pub compress: Option<bool>,
    pub gzip_path: Option<String>,
    pub run_dry: Option<bool>,
    pub log: Option<bool>,
    pub tables: Option<Vec<String>>,
    pub no_data: Option<bool>,
    pub routines: Option<bool>,
    pub triggers: Option<bool>,
    pub events: Option<bool>,
    #[serde(rename = "where")]
    pub where_clause: Option<String>,
    pub single_transaction: Option<bool>,
    pub hex_blob: Option<bool>,
    pub ignore_table: Option<Vec<String>>,
    pub compact: Option<bool>,
    pub skip_comments: Option<bool>,
}

impl DumpProfile {
    /// Layer `top` over `self`; values set in `top` win.
    pub fn overlay(self, top: DumpProfile) -> DumpProfile {
        DumpProfile {
            mysqldump_path: top.mysqldump_path.or(self.mysqldump_path),
            database: top.database.or(self.database),
            result_file: top.result_file.or(self.result_file),
            host: top.host.or(self.host),
            port: top.port.or(self.port),
            user: top.user.or(self.user),
            password: top.password.or(self.password),
            skip_extended_insert: top.skip_extended_insert.or(self.skip_extended_insert),
            skip_create_options: top.skip_create_options.or(self.skip_create_options),
            skip_add_drop_table: top.skip_add_drop_table.or(self.skip_add_drop_table),
            skip_lock_tables: top.skip_lock_tables.or(self.skip_lock_tables),
            skip_disable_keys: top.skip_disable_keys.or(self.skip_disable_keys),
            skip_add_locks: top.skip_add_locks.or(self.skip_add_locks),
            delayed_insert: top.delayed_insert.or(self.delayed_insert),
            add_drop_trigger: top.add_drop_trigger.or(self.add_drop_trigger),
            complete_insert: top.complete_insert.or(self.complete_insert),
            compress: top.compress.or(self.compress),
            gzip_path: top.gzip_path.or(self.gzip_path),
            run_dry: top.run_dry.or(self.run_dry),
            log: top.log.or(self.log),
            tables: top.tables.or(self.tables),
            no_data: top.no_data.or(self.no_data),
            routines: top.routines.or(self.routines),
            triggers: top.triggers.or(self.triggers),
            events: top.events.or(self.events),
            where_clause: top.where_clause.or(self.where_clause),
            single_transaction: top.single_transaction.or(self.single_transaction),
            hex_blob: top.hex_blob.or(self.hex_blob),
            ignore_table: top.ignore_table.or(self.ignore_table),
            compact: top.compact.or(self.compact),
            skip_comments: top.skip_comments.or(self.skip_comments),
        }
    }
}
