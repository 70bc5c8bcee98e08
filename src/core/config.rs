use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{QueryRunnerError, QueryRunnerResult};
use crate::core::traits::QueryOptions;

pub const DEMO_SQL_STATEMENT: &str = "select count(*) as the_number from `orders`";
pub const DEMO_RETURN_VALUE: &str = "the_number";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub runner: RunnerSection,

    #[serde(default)]
    pub options: QueryOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerSection {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            name: None,
            log_level: default_log_level(),
        }
    }
}

impl RunConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> QueryRunnerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> QueryRunnerResult<Self> {
        let config: RunConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Built-in demonstration config: a count query and its result field
    pub fn demo() -> Self {
        let mut options = QueryOptions::new();
        options.insert(
            "sql_statemant".to_string(),
            toml::Value::String(DEMO_SQL_STATEMENT.to_string()),
        );
        options.insert(
            "return_value".to_string(),
            toml::Value::String(DEMO_RETURN_VALUE.to_string()),
        );

        Self {
            runner: RunnerSection::default(),
            options,
        }
    }

    pub fn validate(&self) -> QueryRunnerResult<()> {
        if !VALID_LOG_LEVELS.contains(&self.runner.log_level.as_str()) {
            return Err(QueryRunnerError::config(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.runner.log_level, VALID_LOG_LEVELS
            )));
        }

        if let Some(name) = &self.runner.name {
            if name.trim().is_empty() {
                return Err(QueryRunnerError::config("Runner name must not be empty"));
            }
        }

        Ok(())
    }
}

/// Commented sample config accepted by `RunConfig::from_str`
pub fn sample_config() -> String {
    format!(
        r#"# Query runner configuration

[runner]
name = "bigquery"   # Options: mongodb, mysql, bigquery
log_level = "info"  # Options: trace, debug, info, warn, error

# Options are forwarded to the runner as-is
[options]
sql_statemant = "{}"
return_value = "{}"
"#,
        DEMO_SQL_STATEMENT, DEMO_RETURN_VALUE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RunConfig::from_str("").unwrap();

        assert_eq!(config.runner.name, None);
        assert_eq!(config.runner.log_level, "info");
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = RunConfig::from_str(
            r#"
[runner]
name = "mysql"
log_level = "debug"

[options]
sql_statemant = "select 1"
limit = 5
"#,
        )
        .unwrap();

        assert_eq!(config.runner.name.as_deref(), Some("mysql"));
        assert_eq!(config.runner.log_level, "debug");
        assert_eq!(
            config.options.get("sql_statemant").and_then(|v| v.as_str()),
            Some("select 1")
        );
        assert_eq!(
            config.options.get("limit").and_then(|v| v.as_integer()),
            Some(5)
        );
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = RunConfig::from_str("[runner]\nlog_level = \"loud\"\n");
        assert!(matches!(result, Err(QueryRunnerError::Config(_))));
    }

    #[test]
    fn test_blank_runner_name_rejected() {
        let result = RunConfig::from_str("[runner]\nname = \"  \"\n");
        assert!(matches!(result, Err(QueryRunnerError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = RunConfig::from_str("[runner\nname = 1");
        assert!(matches!(result, Err(QueryRunnerError::Toml(_))));
    }

    #[test]
    fn test_demo_config() {
        let config = RunConfig::demo();

        assert_eq!(config.runner.name, None);
        assert_eq!(
            config.options.get("sql_statemant").and_then(|v| v.as_str()),
            Some(DEMO_SQL_STATEMENT)
        );
        assert_eq!(
            config.options.get("return_value").and_then(|v| v.as_str()),
            Some(DEMO_RETURN_VALUE)
        );
    }

    #[test]
    fn test_sample_config_parses() {
        let config = RunConfig::from_str(&sample_config()).unwrap();

        assert_eq!(config.runner.name.as_deref(), Some("bigquery"));
        assert_eq!(config.options, RunConfig::demo().options);
    }

    #[test]
    fn test_from_file_missing() {
        let result = RunConfig::from_file("/nonexistent/query-runner.toml");
        assert!(matches!(result, Err(QueryRunnerError::Io(_))));
    }
}
