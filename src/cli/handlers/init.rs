use anyhow::Result;
use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, CoursesConfig};

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    CoursesConfig::default().save(&config_path)?;

    println!("{} {}", "Created".green(), config_path.display());
    Ok(())
}
