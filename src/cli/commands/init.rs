use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Create the configuration file with defaults, unless one already exists.
pub fn handle(cfg_path: &Path) -> AppResult<()> {
    if cfg_path.exists() {
        info(format!(
            "Configuration already present: {}",
            cfg_path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(cfg_path)?;
    success(format!("Configuration created: {}", cfg_path.display()));
    Ok(())
}
