//! Utility modules for executable lookup and logging setup.

pub mod bin;
pub mod logging;
