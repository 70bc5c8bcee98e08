use serde_json::Number;
use std::collections::HashMap;
use std::sync::Arc;

/// Opaque options handed to a runner. Runners never inspect them.
pub type QueryOptions = HashMap<String, toml::Value>;

/// A backend-specific query executor.
///
/// Implementations are stateless and must be shareable across threads so a
/// single registry can serve every caller.
pub trait QueryRunner: Send + Sync {
    /// Registry key for this runner (e.g. "mongodb")
    fn name(&self) -> &str;

    /// Short human-readable description shown by `list`
    fn description(&self) -> &str {
        ""
    }

    /// Produce a number for the given options.
    ///
    /// # Arguments
    /// * `config` - Query options (statement, result field, ...)
    ///
    /// # Returns
    /// * `Number` - The retrieved number, integer or float
    fn get_number(&self, config: &QueryOptions) -> Number;
}

pub type RunnerRef = Arc<dyn QueryRunner>;
