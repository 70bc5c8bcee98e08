use serde_json::Number;

use crate::core::traits::{QueryOptions, QueryRunner};

pub struct MySqlQueryRunner;

impl QueryRunner for MySqlQueryRunner {
    fn name(&self) -> &str {
        "mysql"
    }

    fn description(&self) -> &str {
        "MySQL query runner"
    }

    fn get_number(&self, _config: &QueryOptions) -> Number {
        Number::from(3)
    }
}
