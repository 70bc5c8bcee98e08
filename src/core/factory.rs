use std::sync::Arc;

use crate::core::error::{QueryRunnerError, QueryRunnerResult};
use crate::core::registry::RunnerRegistry;
use crate::core::traits::RunnerRef;

/// Resolves runner names against a registry
pub struct QueryRunnerFactory {
    registry: RunnerRegistry,
}

impl QueryRunnerFactory {
    pub fn new(registry: RunnerRegistry) -> Self {
        Self { registry }
    }

    /// Look up the runner registered under `name`.
    ///
    /// Repeated calls with the same name return the same instance.
    pub fn resolve(&self, name: &str) -> QueryRunnerResult<RunnerRef> {
        match self.registry.get(name) {
            Some(runner) => {
                tracing::debug!("Resolved query runner '{}'", name);
                Ok(Arc::clone(runner))
            }
            None => {
                tracing::warn!("Unsupported query runner requested: '{}'", name);
                Err(QueryRunnerError::unsupported(name))
            }
        }
    }

    pub fn runner_names(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn registry(&self) -> &RunnerRegistry {
        &self.registry
    }
}

/// Factory over the built-in runners
pub fn create_query_runner_factory() -> QueryRunnerFactory {
    QueryRunnerFactory::new(RunnerRegistry::with_defaults())
}
