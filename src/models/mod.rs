//! Data structures.

pub mod dump_request;
pub mod profile;
