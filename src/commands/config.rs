use anyhow::{Context, Result, bail};

use crate::cli::ConfigCommand;
use crate::configtool::{ConfigFile, get_config_path};

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = ConfigFile::load().context("Failed to load config")?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            let path = get_config_path()?;
            if path.exists() && !force {
                bail!(
                    "Config file {} already exists, use --force to overwrite",
                    path.display()
                );
            }
            ConfigFile::default()
                .save_to(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigCommand::Path => {
            println!("{}", get_config_path()?.display());
        }
    }
    Ok(())
}
