//! Library error type.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    /// The executable could not be started (missing binary, permissions).
    #[error("run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The process ran and exited unsuccessfully. `logged` is set when the
    /// captured stderr was already written to the caller's log sink; the
    /// message then leaves it out.
    #[error("{program} failed ({status}){}", stderr_suffix(.stderr, .logged))]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
        logged: bool,
    },

    /// The dump succeeded but compressing the result file did not.
    #[error("compress {}: {source}", .path.display())]
    Compress {
        path: PathBuf,
        #[source]
        source: Box<DumpError>,
    },

    /// Writing dry-run or log output to the caller's sink failed.
    #[error("write output: {0}")]
    Io(#[from] io::Error),
}

impl DumpError {
    /// Captured standard error of the failing process, if any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            DumpError::Exit { stderr, .. } => Some(stderr),
            DumpError::Compress { source, .. } => source.stderr(),
            _ => None,
        }
    }
}

fn stderr_suffix(stderr: &str, logged: &bool) -> String {
    let trimmed = stderr.trim();
    if *logged || trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}
