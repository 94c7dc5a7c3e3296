//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{OrgChartService, SqlScriptService, TreePrinter};
use crate::config::Settings;
use crate::infrastructure::traits::{FakeNameProvider, NameProvider};

type NameFactory = Box<dyn Fn(Option<u64>) -> Box<dyn NameProvider>>;

/// Container holding settings and the factories services are built from.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    names: NameFactory,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Box::new(|seed| Box::new(FakeNameProvider::new(seed)) as Box<dyn NameProvider>),
        )
    }

    /// Create a service container with a custom name source (for testing).
    pub fn with_deps(settings: Settings, names: NameFactory) -> Self {
        let settings = Arc::new(settings);

        Self { settings, names }
    }

    /// Org-chart service; `seed` overrides the configured seed.
    pub fn org_chart_service(&self, seed: Option<u64>) -> OrgChartService {
        OrgChartService::new((self.names)(seed.or(self.settings.seed)))
    }

    pub fn tree_printer(&self) -> TreePrinter {
        TreePrinter::new()
    }

    pub fn sql_script_service(&self) -> SqlScriptService {
        SqlScriptService::new(
            self.settings.mysql.clone(),
            self.settings.join_bench.clone(),
        )
    }
}
