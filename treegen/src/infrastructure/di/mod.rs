//! Dependency injection: wires settings and boundary implementations into services

mod service_container;

pub use service_container::ServiceContainer;
