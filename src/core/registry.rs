use std::collections::HashMap;

use crate::core::error::{QueryRunnerError, QueryRunnerResult};
use crate::core::traits::RunnerRef;

/// Immutable name -> runner mapping.
///
/// Built once and never mutated afterwards, so a shared reference can be
/// handed to any number of callers.
pub struct RunnerRegistry {
    runners: HashMap<String, RunnerRef>,
}

impl RunnerRegistry {
    /// Registry holding the built-in runners (mongodb, mysql, bigquery)
    pub fn with_defaults() -> Self {
        let runners = crate::modules::runners::register_runners()
            .into_iter()
            .map(|runner| (runner.name().to_string(), runner))
            .collect::<HashMap<_, _>>();

        tracing::debug!("Registered {} query runners", runners.len());

        Self { runners }
    }

    /// Build a registry from an explicit runner list, keyed by `QueryRunner::name`
    pub fn from_runners<I>(runners: I) -> QueryRunnerResult<Self>
    where
        I: IntoIterator<Item = RunnerRef>,
    {
        let mut map = HashMap::new();
        for runner in runners {
            let name = runner.name().to_string();
            if map.contains_key(&name) {
                return Err(QueryRunnerError::DuplicateRunner(name));
            }
            map.insert(name, runner);
        }

        tracing::debug!("Registered {} query runners", map.len());

        Ok(Self { runners: map })
    }

    /// Get a runner by name
    pub fn get(&self, name: &str) -> Option<&RunnerRef> {
        self.runners.get(name)
    }

    /// Registered runner names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.runners.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.runners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::runners::{MongoDbQueryRunner, MySqlQueryRunner};
    use std::sync::Arc;

    #[test]
    fn test_registry_with_defaults() {
        let registry = RunnerRegistry::with_defaults();

        assert_eq!(registry.len(), 3);
        assert!(registry.get("mongodb").is_some());
        assert!(registry.get("mysql").is_some());
        assert!(registry.get("bigquery").is_some());
        assert!(registry.get("postgres").is_none());
    }

    #[test]
    fn test_registry_names_sorted() {
        let registry = RunnerRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["bigquery", "mongodb", "mysql"]);
    }

    #[test]
    fn test_registry_from_runners() {
        let registry = RunnerRegistry::from_runners(vec![
            Arc::new(MongoDbQueryRunner) as RunnerRef,
            Arc::new(MySqlQueryRunner) as RunnerRef,
        ])
        .unwrap();

        assert_eq!(registry.names(), vec!["mongodb", "mysql"]);
    }

    #[test]
    fn test_registry_rejects_duplicate_names() {
        let result = RunnerRegistry::from_runners(vec![
            Arc::new(MongoDbQueryRunner) as RunnerRef,
            Arc::new(MongoDbQueryRunner) as RunnerRef,
        ]);

        match result {
            Err(QueryRunnerError::DuplicateRunner(name)) => assert_eq!(name, "mongodb"),
            _ => panic!("expected duplicate runner error"),
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = RunnerRegistry::from_runners(Vec::new()).unwrap();
        assert!(registry.is_empty());
    }
}
