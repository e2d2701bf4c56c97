//! Dump request model.

use crate::constants;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Everything needed to run one `mysqldump` invocation.
///
/// The connection fields are required and set through [`DumpRequest::new`].
/// Every other field is optional; create options and `DROP TABLE`
/// statements are skipped unless turned off explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct DumpRequest {
    /// mysqldump executable path or command name.
    pub mysqldump_path: String,
    /// Database (schema) to dump.
    pub database: String,
    /// File mysqldump writes the dump to.
    pub result_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Zeroizing<String>,

    /// `--skip-extended-insert`: one INSERT statement per row.
    pub skip_extended_insert: bool,
    /// `--skip-create-options`, or `--create-options` when false.
    pub skip_create_options: bool,
    /// `--skip-add-drop-table`, or `--add-drop-table` when false.
    pub skip_add_drop_table: bool,
    pub skip_lock_tables: bool,
    pub skip_disable_keys: bool,
    pub skip_add_locks: bool,
    pub delayed_insert: bool,
    pub add_drop_trigger: bool,
    /// `--complete-insert`: column names in every INSERT.
    pub complete_insert: bool,

    /// Compress the result file with gzip once the dump succeeded.
    pub compress: bool,
    /// gzip executable path or command name.
    pub gzip_path: String,
    /// Print the command instead of running it.
    pub run_dry: bool,
    /// Emit captured stdout on success and stderr on failure.
    pub log: bool,

    /// Tables to dump; all tables when empty.
    pub tables: Vec<String>,
    /// `--no-data`: structure only.
    pub no_data: bool,
    pub routines: bool,
    pub triggers: bool,
    pub events: bool,
    /// `--where` row filter.
    pub where_clause: Option<String>,
    pub single_transaction: bool,
    pub hex_blob: bool,
    /// Tables of `database` to leave out.
    pub ignore_table: Vec<String>,
    pub compact: bool,
    pub skip_comments: bool,
}

impl DumpRequest {
    pub fn new(
        database: impl Into<String>,
        result_file: impl Into<PathBuf>,
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            mysqldump_path: constants::DEFAULT_MYSQLDUMP_PATH.to_string(),
            database: database.into(),
            result_file: result_file.into(),
            host: host.into(),
            port,
            user: user.into(),
            password: Zeroizing::new(password.into()),
            skip_extended_insert: false,
            skip_create_options: true,
            skip_add_drop_table: true,
            skip_lock_tables: false,
            skip_disable_keys: false,
            skip_add_locks: false,
            delayed_insert: false,
            add_drop_trigger: false,
            complete_insert: false,
            compress: false,
            gzip_path: constants::DEFAULT_GZIP_PATH.to_string(),
            run_dry: false,
            log: false,
            tables: Vec::new(),
            no_data: false,
            routines: false,
            triggers: false,
            events: false,
            where_clause: None,
            single_transaction: false,
            hex_blob: false,
            ignore_table: Vec::new(),
            compact: false,
            skip_comments: false,
        }
    }

    /// Path of the file left behind by a successful run.
    ///
    /// gzip replaces `result_file` with `result_file.gz` when compressing.
    pub fn output_path(&self) -> PathBuf {
        if !self.compress {
            return self.result_file.clone();
        }
        let mut name = OsString::from(self.result_file.as_os_str());
        name.push(".");
        name.push(constants::GZIP_EXTENSION);
        PathBuf::from(name)
    }
}

impl fmt::Debug for DumpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DumpRequest")
            .field("mysqldump_path", &self.mysqldump_path)
            .field("database", &self.database)
            .field("result_file", &self.result_file)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &constants::REDACTED)
            .field("skip_extended_insert", &self.skip_extended_insert)
            .field("skip_create_options", &self.skip_create_options)
            .field("skip_add_drop_table", &self.skip_add_drop_table)
            .field("skip_lock_tables", &self.skip_lock_tables)
            .field("skip_disable_keys", &self.skip_disable_keys)
            .field("skip_add_locks", &self.skip_add_locks)
            .field("delayed_insert", &self.delayed_insert)
            .field("add_drop_trigger", &self.add_drop_trigger)
            .field("complete_insert", &self.complete_insert)
            .field("compress", &self.compress)
            .field("gzip_path", &self.gzip_path)
            .field("run_dry", &self.run_dry)
            .field("log", &self.log)
            .field("tables", &self.tables)
            .field("no_data", &self.no_data)
            .field("routines", &self.routines)
            .field("triggers", &self.triggers)
            .field("events", &self.events)
            .field("where_clause", &self.where_clause)
            .field("single_transaction", &self.single_transaction)
            .field("hex_blob", &self.hex_blob)
            .field("ignore_table", &self.ignore_table)
            .field("compact", &self.compact)
            .field("skip_comments", &self.skip_comments)
            .finish()
    }
}
