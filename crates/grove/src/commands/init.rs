//! `grove init` - write a starter configuration file

use std::path::PathBuf;

use owo_colors::OwoColorize;

use grove_core::config;
use grove_core::error::GroveError;

use crate::colors::COLORS;

pub fn run_init(local: bool) -> Result<i32, GroveError> {
    let path = config_target(local)?;

    if path.exists() {
        return Err(GroveError::ConfigExists {
            path: path.display().to_string(),
        });
    }

    config::init_config(&path)?;
    println!(
        "  {} {}",
        "Created config:".style(COLORS.success),
        path.display()
    );
    Ok(0)
}

fn config_target(local: bool) -> Result<PathBuf, GroveError> {
    if local {
        return Ok(std::env::current_dir()?.join(".grove.toml"));
    }
    let home = dirs::home_dir().ok_or_else(|| {
        GroveError::Io(std::io::Error::other("could not determine home directory"))
    })?;
    Ok(home.join(".config").join("grove").join("config.toml"))
}
