//! CLI subcommand modules.
//!
//! Every command loads the full statement set before printing anything.

pub(crate) mod chart;
pub(crate) mod export;
pub(crate) mod summary;
pub(crate) mod table;
