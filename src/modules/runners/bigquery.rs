use serde_json::Number;

use crate::core::traits::{QueryOptions, QueryRunner};

pub struct BigQueryQueryRunner;

impl QueryRunner for BigQueryQueryRunner {
    fn name(&self) -> &str {
        "bigquery"
    }

    fn description(&self) -> &str {
        "Google BigQuery query runner"
    }

    fn get_number(&self, _config: &QueryOptions) -> Number {
        Number::from(2)
    }
}
