//! Show or initialize the application configuration.

use stresscam_common::config::{config_file_path, AppConfig};

pub fn run(init: bool) -> anyhow::Result<()> {
    let path = config_file_path();

    if init {
        let config = AppConfig::default();
        config.save()?;
        println!("Wrote default configuration to: {}", path.display());
        return Ok(());
    }

    println!("Configuration file: {}", path.display());
    if !path.exists() {
        println!("  (not present; showing built-in defaults)");
    }

    let config = AppConfig::load();
    match config.scoring.validate() {
        Ok(()) => println!("  Scoring parameters: valid"),
        Err(e) => println!("  Scoring parameters: INVALID ({e})"),
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
