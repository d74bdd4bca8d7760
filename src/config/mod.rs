mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;
use titlescan_parser::ISSUE_CODES;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./titlescan.toml",
        "~/.config/titlescan/config.toml",
        "/etc/titlescan/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    for code in &config.check.ignore {
        if !ISSUE_CODES.contains(&code.as_str()) {
            anyhow::bail!(
                "Unknown issue kind '{}' in check.ignore (expected one of: {})",
                code,
                ISSUE_CODES.join(", ")
            );
        }
    }

    if config.output.format == OutputFormat::Text && !config.output.pretty {
        tracing::warn!("output.pretty only affects JSON output");
    }

    Ok(())
}
