//! Translate a [`DumpRequest`] into the mysqldump argument vector.
//!
//! Values are passed as discrete arguments and never go through a shell, so
//! nothing is quoted here. Quoting only happens when a command line is
//! rendered for display.

use crate::constants;
use crate::models::dump_request::DumpRequest;
use std::ffi::{OsStr, OsString};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    fn push(&mut self, arg: impl Into<OsString>) {
        self.args.push(arg.into());
    }

    fn push_pair(&mut self, flag: &str, value: impl AsRef<OsStr>) {
        let mut arg = OsString::from(flag);
        arg.push(value);
        self.args.push(arg);
    }

    /// Program name as text, for messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// The dump invocation plus the optional compression step chained after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpCommand {
    dump: Invocation,
    compress: Option<Invocation>,
    password_arg: usize,
}

impl DumpCommand {
    pub fn dump(&self) -> &Invocation {
        &self.dump
    }

    /// `gzip <result_file>`, run only after the dump succeeded.
    pub fn compress_step(&self) -> Option<&Invocation> {
        self.compress.as_ref()
    }

    /// Arguments of the dump step with the password masked.
    pub fn redacted_args(&self) -> Vec<String> {
        self.dump
            .args
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                if i == self.password_arg {
                    format!("--password={}", constants::REDACTED)
                } else {
                    arg.to_string_lossy().into_owned()
                }
            })
            .collect()
    }

    /// Full command line as a shell would read it, password included.
    pub fn render(&self) -> String {
        let args: Vec<String> = self
            .dump
            .args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self.render_with(&args)
    }

    /// Full command line with the password masked.
    pub fn render_redacted(&self) -> String {
        self.render_with(&self.redacted_args())
    }

    fn render_with(&self, args: &[String]) -> String {
        let mut words = vec![quote(&self.dump.program.to_string_lossy())];
        words.extend(args.iter().map(|a| quote(a)));
        let mut line = words.join(" ");
        if let Some(step) = &self.compress {
            line.push_str(" && ");
            line.push_str(&quote(&step.program.to_string_lossy()));
            for arg in &step.args {
                line.push(' ');
                line.push_str(&quote(&arg.to_string_lossy()));
            }
        }
        line
    }
}

fn quote(word: &str) -> String {
    match shlex::try_quote(word) {
        Ok(quoted) => quoted.into_owned(),
        // interior NUL, cannot be expressed for a shell anyway
        Err(_) => format!("{:?}", word),
    }
}

/// Build the argument vector for `request`. Cannot fail.
pub fn build_command(request: &DumpRequest) -> DumpCommand {
    let mut dump = Invocation::new(&request.mysqldump_path);

    dump.push(&request.database);
    dump.push_pair("--result-file=", &request.result_file);
    dump.push_pair("--host=", &request.host);
    dump.push(format!("--port={}", request.port));
    dump.push_pair("--user=", &request.user);
    let password_arg = dump.args.len();
    dump.push_pair("--password=", request.password.as_str());

    if request.skip_extended_insert {
        dump.push("--skip-extended-insert");
    }
    if request.skip_create_options {
        dump.push("--skip-create-options");
    } else {
        dump.push("--create-options");
    }
    if request.skip_add_drop_table {
        dump.push("--skip-add-drop-table");
    } else {
        dump.push("--add-drop-table");
    }
    if request.skip_lock_tables {
        dump.push("--skip-lock-tables");
    }
    if request.skip_disable_keys {
        dump.push("--skip-disable-keys");
    }
    if request.skip_add_locks {
        dump.push("--skip-add-locks");
    }
    if request.delayed_insert {
        dump.push("--delayed-insert");
    }
    if request.add_drop_trigger {
        dump.push("--add-drop-trigger");
    }
    if request.complete_insert {
        dump.push("--complete-insert");
    }

    // positional table names, after the database
    for table in &request.tables {
        dump.push(table);
    }

    if request.no_data {
        dump.push("--no-data");
    }
    if request.routines {
        dump.push("--routines");
    }
    if request.triggers {
        dump.push("--triggers");
    }
    if request.events {
        dump.push("--events");
    }
    if let Some(clause) = request.where_clause.as_deref().filter(|c| !c.is_empty()) {
        dump.push_pair("--where=", clause);
    }
    if request.single_transaction {
        dump.push("--single-transaction");
    }
    if request.hex_blob {
        dump.push("--hex-blob");
    }
    for table in &request.ignore_table {
        dump.push(format!("--ignore-table={}.{}", request.database, table));
    }
    if request.compact {
        dump.push("--compact");
    }
    if request.skip_comments {
        dump.push("--skip-comments");
    }

    let compress = request.compress.then(|| {
        let mut gzip = Invocation::new(&request.gzip_path);
        gzip.push(&request.result_file);
        gzip
    });

    DumpCommand {
        dump,
        compress,
        password_arg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DumpRequest {
        DumpRequest::new("db", "/backups/db.sql", "localhost", 3306, "root", "secret")
    }

    fn args(cmd: &DumpCommand) -> Vec<String> {
        cmd.dump()
            .args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn count(cmd: &DumpCommand, flag: &str) -> usize {
        args(cmd).iter().filter(|a| a.as_str() == flag).count()
    }

    const FIXED: [&str; 6] = [
        "db",
        "--result-file=/backups/db.sql",
        "--host=localhost",
        "--port=3306",
        "--user=root",
        "--password=secret",
    ];

    #[test]
    fn test_minimal_request() {
        let cmd = build_command(&request());
        assert_eq!(cmd.dump().program, OsString::from("mysqldump"));
        let mut expected: Vec<&str> = FIXED.to_vec();
        expected.push("--skip-create-options");
        expected.push("--skip-add-drop-table");
        assert_eq!(args(&cmd), expected);
        assert!(cmd.compress_step().is_none());
    }

    #[test]
    fn test_custom_executable() {
        let mut req = request();
        req.mysqldump_path = "/opt/mysql/bin/mysqldump".into();
        let cmd = build_command(&req);
        assert_eq!(cmd.dump().program, OsString::from("/opt/mysql/bin/mysqldump"));
        assert_eq!(cmd.dump().program_name(), "/opt/mysql/bin/mysqldump");
    }

    #[test]
    fn test_default_skips_can_be_disabled() {
        let mut req = request();
        req.skip_create_options = false;
        req.skip_add_drop_table = false;
        let cmd = build_command(&req);
        assert_eq!(count(&cmd, "--create-options"), 1);
        assert_eq!(count(&cmd, "--add-drop-table"), 1);
        assert_eq!(count(&cmd, "--skip-create-options"), 0);
        assert_eq!(count(&cmd, "--skip-add-drop-table"), 0);
    }

    #[test]
    fn test_each_boolean_flag() {
        let cases: [(fn(&mut DumpRequest), &str); 15] = [
            (|r: &mut DumpRequest| r.skip_extended_insert = true, "--skip-extended-insert"),
            (|r: &mut DumpRequest| r.skip_lock_tables = true, "--skip-lock-tables"),
            (|r: &mut DumpRequest| r.skip_disable_keys = true, "--skip-disable-keys"),
            (|r: &mut DumpRequest| r.skip_add_locks = true, "--skip-add-locks"),
            (|r: &mut DumpRequest| r.delayed_insert = true, "--delayed-insert"),
            (|r: &mut DumpRequest| r.add_drop_trigger = true, "--add-drop-trigger"),
            (|r: &mut DumpRequest| r.complete_insert = true, "--complete-insert"),
            (|r: &mut DumpRequest| r.no_data = true, "--no-data"),
            (|r: &mut DumpRequest| r.routines = true, "--routines"),
            (|r: &mut DumpRequest| r.triggers = true, "--triggers"),
            (|r: &mut DumpRequest| r.events = true, "--events"),
            (|r: &mut DumpRequest| r.single_transaction = true, "--single-transaction"),
            (|r: &mut DumpRequest| r.hex_blob = true, "--hex-blob"),
            (|r: &mut DumpRequest| r.compact = true, "--compact"),
            (|r: &mut DumpRequest| r.skip_comments = true, "--skip-comments"),
        ];

        let baseline = build_command(&request());
        for (set, flag) in cases {
            assert_eq!(count(&baseline, flag), 0, "{} present by default", flag);

            let mut req = request();
            set(&mut req);
            let cmd = build_command(&req);
            assert_eq!(count(&cmd, flag), 1, "{} not appended once", flag);
            assert_eq!(args(&cmd).len(), args(&baseline).len() + 1);
        }
    }

    #[test]
    fn test_ignore_table_per_entry() {
        let mut req = request();
        req.ignore_table = vec!["a".into(), "b".into()];
        let cmd = build_command(&req);
        assert_eq!(count(&cmd, "--ignore-table=db.a"), 1);
        assert_eq!(count(&cmd, "--ignore-table=db.b"), 1);
    }

    #[test]
    fn test_tables_are_positional() {
        let mut req = request();
        req.tables = vec!["t1".into(), "t2".into()];
        let cmd = build_command(&req);
        let all = args(&cmd);
        let pos = all.iter().position(|a| a == "t1").unwrap();
        assert_eq!(all[pos + 1], "t2");
        assert!(cmd.render().contains(" t1 t2"));
    }

    #[test]
    fn test_where_is_single_argument() {
        let mut req = request();
        req.where_clause = Some("id > 10 AND name = 'x'".into());
        let cmd = build_command(&req);
        assert_eq!(count(&cmd, "--where=id > 10 AND name = 'x'"), 1);
    }

    #[test]
    fn test_empty_where_is_ignored() {
        let mut req = request();
        req.where_clause = Some(String::new());
        let cmd = build_command(&req);
        assert!(args(&cmd).iter().all(|a| !a.starts_with("--where")));
    }

    #[test]
    fn test_compress_chains_gzip() {
        let mut req = request();
        req.compress = true;
        let cmd = build_command(&req);
        let gzip = cmd.compress_step().unwrap();
        assert_eq!(gzip.program, OsString::from("gzip"));
        assert_eq!(gzip.args, vec![OsString::from("/backups/db.sql")]);
        assert!(args(&cmd).iter().all(|a| !a.contains("gzip")));
        assert!(cmd.render().ends_with(" && gzip /backups/db.sql"));
    }

    #[test]
    fn test_full_order() {
        let mut req = request();
        req.skip_extended_insert = true;
        req.skip_lock_tables = true;
        req.complete_insert = true;
        req.tables = vec!["orders".into()];
        req.no_data = true;
        req.events = true;
        req.where_clause = Some("1".into());
        req.hex_blob = true;
        req.ignore_table = vec!["logs".into()];
        req.skip_comments = true;
        let cmd = build_command(&req);

        let mut expected: Vec<&str> = FIXED.to_vec();
        expected.extend([
            "--skip-extended-insert",
            "--skip-create-options",
            "--skip-add-drop-table",
            "--skip-lock-tables",
            "--complete-insert",
            "orders",
            "--no-data",
            "--events",
            "--where=1",
            "--hex-blob",
            "--ignore-table=db.logs",
            "--skip-comments",
        ]);
        assert_eq!(args(&cmd), expected);
    }

    #[test]
    fn test_every_option_in_order() {
        let mut req = request();
        req.skip_extended_insert = true;
        req.skip_create_options = false;
        req.skip_add_drop_table = false;
        req.skip_lock_tables = true;
        req.skip_disable_keys = true;
        req.skip_add_locks = true;
        req.delayed_insert = true;
        req.add_drop_trigger = true;
        req.complete_insert = true;
        req.compress = true;
        req.tables = vec!["orders".into(), "customers".into()];
        req.no_data = true;
        req.routines = true;
        req.triggers = true;
        req.events = true;
        req.where_clause = Some("id > 10".into());
        req.single_transaction = true;
        req.hex_blob = true;
        req.ignore_table = vec!["logs".into(), "sessions".into()];
        req.compact = true;
        req.skip_comments = true;
        let cmd = build_command(&req);

        let mut expected: Vec<&str> = FIXED.to_vec();
        expected.extend([
            "--skip-extended-insert",
            "--create-options",
            "--add-drop-table",
            "--skip-lock-tables",
            "--skip-disable-keys",
            "--skip-add-locks",
            "--delayed-insert",
            "--add-drop-trigger",
            "--complete-insert",
            "orders",
            "customers",
            "--no-data",
            "--routines",
            "--triggers",
            "--events",
            "--where=id > 10",
            "--single-transaction",
            "--hex-blob",
            "--ignore-table=db.logs",
            "--ignore-table=db.sessions",
            "--compact",
            "--skip-comments",
        ]);
        assert_eq!(args(&cmd), expected);
        assert!(cmd.compress_step().is_some());
    }

    #[test]
    fn test_redaction() {
        let cmd = build_command(&request());
        assert!(cmd.render().contains("secret"));
        let redacted = cmd.render_redacted();
        assert!(!redacted.contains("secret"));
        assert!(cmd.redacted_args().contains(&format!("--password={}", constants::REDACTED)));
    }

    #[test]
    fn test_render_quotes_spaces() {
        let mut req = request();
        req.where_clause = Some("id > 10".into());
        let rendered = build_command(&req).render();
        assert!(rendered.ends_with(" '--where=id > 10'"));
    }
}
