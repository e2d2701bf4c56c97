//! Async wrapper around the `mysqldump` command-line tool.
//!
//! Builds a `mysqldump` argument vector from a typed [`DumpRequest`], runs it
//! as a child process, optionally gzips the result, and reports the outcome.
//!
//! ## Modules
//! - `cli`: Command-line handlers
//! - `core`: Business logic (argument builder, invoker, profiles)
//! - `error`: Library error type
//! - `models`: Data structures
//! - `util`: System utilities (executable lookup, logging)

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;

pub use crate::core::args::{build_command, DumpCommand, Invocation};
pub use crate::core::invoker::{dump, dump_with_output};
pub use crate::error::DumpError;
pub use crate::models::dump_request::DumpRequest;
