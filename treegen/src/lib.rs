//! Synthetic test data from an implicit, level-order numbered n-ary tree.
//!
//! The [`domain`] layer enumerates `(parent, child)` edges without building a
//! tree; [`application`] services render them as an employee table or a debug
//! listing, and render scratch SQL scripts for local MySQL experiments.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
