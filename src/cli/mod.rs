mod sample;

use anyhow::Result;
use dialoguer::Input;
use serde_json::Number;
use std::io::{self, BufRead, IsTerminal};
use tracing::{debug, info};

use crate::core::config::RunConfig;
use crate::core::factory::{create_query_runner_factory, QueryRunnerFactory};
use crate::core::registry::RunnerRegistry;

pub use sample::write_sample;

pub fn list_runners() -> Result<()> {
    let factory = create_query_runner_factory();
    println!("{}", format_runner_list(factory.registry()));
    Ok(())
}

fn format_runner_list(registry: &RunnerRegistry) -> String {
    let mut out = String::from("\nAvailable Query Runners\n");
    out.push_str(&"=".repeat(40));
    out.push('\n');
    for name in registry.names() {
        let description = registry
            .get(&name)
            .map(|runner| runner.description())
            .unwrap_or_default();
        out.push_str(&format!("  • {:<10} {}\n", name, description));
    }
    out
}

/// Resolve a runner and invoke it.
///
/// The runner name comes from `name`, then `[runner].name` in the config,
/// then stdin (a prompt when attached to a terminal). Without a config the demo options are used.
pub fn run_query(name: Option<String>, config: Option<RunConfig>) -> Result<Number> {
    let config = config.unwrap_or_else(RunConfig::demo);
    let factory = create_query_runner_factory();

    let name = match name.or_else(|| config.runner.name.clone()) {
        Some(name) => name,
        None if io::stdin().is_terminal() => prompt_runner_name(&factory)?,
        None => read_runner_name(io::stdin().lock())?,
    };

    info!("Running query runner '{}'", name);
    let runner = factory.resolve(&name)?;
    let number = runner.get_number(&config.options);
    info!("Query runner '{}' returned {}", name, number);

    Ok(number)
}

fn prompt_runner_name(factory: &QueryRunnerFactory) -> Result<String> {
    let name: String = Input::new()
        .with_prompt(format!(
            "Enter the query runner name ({})",
            factory.runner_names().join(", ")
        ))
        .interact_text()?;
    Ok(name)
}

/// Read the runner name from the first line of non-interactive input
fn read_runner_name<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        anyhow::bail!("No query runner name given on stdin");
    }

    let name = line.trim_end_matches(['\r', '\n']).to_string();
    debug!("Read query runner name '{}' from stdin", name);
    Ok(name)
}
