//! Application layer: services and use cases
//!
//! This layer drives the domain enumeration and formats its output; it depends
//! on boundary traits only.

pub mod error;
pub mod error_ext;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
