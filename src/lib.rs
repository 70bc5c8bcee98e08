pub mod cli;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::config::RunConfig;
pub use crate::core::error::{QueryRunnerError, QueryRunnerResult};
pub use crate::core::factory::{create_query_runner_factory, QueryRunnerFactory};
pub use crate::core::registry::RunnerRegistry;
pub use crate::core::traits::{QueryOptions, QueryRunner, RunnerRef};
