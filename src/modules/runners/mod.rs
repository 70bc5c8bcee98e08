pub mod bigquery;
pub mod mongodb;
pub mod mysql;

use crate::core::traits::RunnerRef;
use std::sync::Arc;

pub use bigquery::BigQueryQueryRunner;
pub use mongodb::MongoDbQueryRunner;
pub use mysql::MySqlQueryRunner;

pub fn register_runners() -> Vec<RunnerRef> {
    vec![
        Arc::new(MongoDbQueryRunner) as RunnerRef,
        Arc::new(MySqlQueryRunner) as RunnerRef,
        Arc::new(BigQueryQueryRunner) as RunnerRef,
    ]
}
