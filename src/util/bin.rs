//! Executable lookup on `PATH`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `name` the way a process spawn would.
///
/// Names containing a path separator are checked as-is; bare names are
/// searched for in each `PATH` entry. Returns the first executable match.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    let as_path = Path::new(name);
    if as_path.components().count() > 1 {
        return is_executable_file(as_path).then(|| as_path.to_path_buf());
    }
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable_file(candidate))
}

pub fn is_executable_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = fs::metadata(path) {
            return (meta.permissions().mode() & 0o111) != 0;
        }
        false
    }
    #[cfg(not(unix))]
    {
        // best-effort on non-unix
        true
    }
}
