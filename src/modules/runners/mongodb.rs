use serde_json::Number;

use crate::core::traits::{QueryOptions, QueryRunner};

pub struct MongoDbQueryRunner;

impl QueryRunner for MongoDbQueryRunner {
    fn name(&self) -> &str {
        "mongodb"
    }

    fn description(&self) -> &str {
        "MongoDB query runner"
    }

    fn get_number(&self, _config: &QueryOptions) -> Number {
        Number::from(1)
    }
}
