use crate::constants;
use crate::models::dump_request::DumpRequest;
use crate::models::profile::DumpProfile;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<DumpProfile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read dump profile {}", path.display()))?;
    parse(&content).with_context(|| format!("parse dump profile {}", path.display()))
}

pub fn parse(content: &str) -> Result<DumpProfile> {
    let profile: DumpProfile = toml::from_str(content)?;
    Ok(profile)
}

/// Names of required connection settings missing from `profile`.
///
/// The password is not listed; it may still come from a prompt.
pub fn missing_required(profile: &DumpProfile) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if profile.database.is_none() {
        missing.push("database");
    }
    if profile.result_file.is_none() {
        missing.push("result_file");
    }
    if profile.host.is_none() {
        missing.push("host");
    }
    if profile.port.is_none() {
        missing.push("port");
    }
    if profile.user.is_none() {
        missing.push("user");
    }
    missing
}

/// Turn a merged profile into a request, using `password` for the
/// connection. Fails if a required setting is missing.
pub fn into_request(profile: DumpProfile, password: &str) -> Result<DumpRequest> {
    let missing = missing_required(&profile);
    let (Some(database), Some(result_file), Some(host), Some(port), Some(user)) = (
        profile.database,
        profile.result_file,
        profile.host,
        profile.port,
        profile.user,
    ) else {
        bail!(
            "missing required setting(s): {} (pass them as options or set them in the profile)",
            missing.join(", ")
        );
    };

    let mut request = DumpRequest::new(database, result_file, host, port, user, password);
    request.mysqldump_path = profile
        .mysqldump_path
        .unwrap_or_else(|| constants::DEFAULT_MYSQLDUMP_PATH.to_string());
    request.gzip_path = profile
        .gzip_path
        .unwrap_or_else(|| constants::DEFAULT_GZIP_PATH.to_string());

    let flag = |v: Option<bool>, default: bool| v.unwrap_or(default);
    request.skip_extended_insert = flag(profile.skip_extended_insert, false);
    request.skip_create_options = flag(profile.skip_create_options, true);
    request.skip_add_drop_table = flag(profile.skip_add_drop_table, true);
    request.skip_lock_tables = flag(profile.skip_lock_tables, false);
    request.skip_disable_keys = flag(profile.skip_disable_keys, false);
    request.skip_add_locks = flag(profile.skip_add_locks, false);
    request.delayed_insert = flag(profile.delayed_insert, false);
    request.add_drop_trigger = flag(profile.add_drop_trigger, false);
    request.complete_insert = flag(profile.complete_insert, false);
    request.compress = flag(profile.compress, false);
    request.run_dry = flag(profile.run_dry, false);
    request.log = flag(profile.log, false);
    request.no_data = flag(profile.no_data, false);
    request.routines = flag(profile.routines, false);
    request.triggers = flag(profile.triggers, false);
    request.events = flag(profile.events, false);
    request.single_transaction = flag(profile.single_transaction, false);
    request.hex_blob = flag(profile.hex_blob, false);
    request.compact = flag(profile.compact, false);
    request.skip_comments = flag(profile.skip_comments, false);
    request.tables = profile.tables.unwrap_or_default();
    request.ignore_table = profile.ignore_table.unwrap_or_default();
    request.where_clause = profile.where_clause;
    Ok(request)
}
