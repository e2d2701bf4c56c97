//! Core logic: argument building, process invocation, profile loading.

pub mod args;
pub mod invoker;
pub mod profile;
