use anyhow::Result;
use std::path::PathBuf;

use crate::core::config::sample_config;

pub fn write_sample(output: Option<PathBuf>) -> Result<()> {
    let template = sample_config();

    if let Some(path) = output {
        if path.exists() {
            anyhow::bail!("File {:?} already exists", path);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, template)?;
        println!("✓ Sample configuration written to: {:?}", path);
        println!("\nNext steps:");
        println!("  1. Edit the runner name and options");
        println!("  2. Run with 'query-runner run -c {:?}'", path);
    } else {
        println!("{}", template);
    }

    Ok(())
}
