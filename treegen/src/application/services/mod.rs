//! Application services
//!
//! Concrete service implementations that drive the level-order enumeration
//! and render its output. Services depend on boundary traits (NameProvider)
//! but are themselves concrete structs, not traits.

mod org_chart;
mod sql_script;
mod tree_printer;

pub use org_chart::{OrgChartService, HEADER, PREAMBLE_LINES, TITLE};
pub use sql_script::{SqlScriptService, EMP_COLUMNS};
pub use tree_printer::TreePrinter;
