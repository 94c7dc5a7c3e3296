//! Domain layer: entities and tree arithmetic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod level_order;

pub use entities::*;
pub use error::DomainError;
pub use level_order::{level_order_edges, Branching, LevelOrderEdges};
