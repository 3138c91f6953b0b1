use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// View or edit the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        goal,
        gamification,
    } = cmd
    {
        let mut updated = cfg.clone();
        let mut changed = false;

        if let Some(g) = goal {
            updated.daily_goal = *g;
            changed = true;
        }

        if let Some(flag) = gamification {
            updated.gamification = flag == "on";
            changed = true;
        }

        if changed {
            updated.save_to(cfg_path)?;
            success(format!("Configuration updated: {}", cfg_path.display()));
        }

        if *print_config || !changed {
            println!("config file  : {}", cfg_path.display());
            println!("gamification : {}", if updated.gamification { "on" } else { "off" });
            println!("daily_goal   : {} min", updated.daily_goal);
        }
    }
    Ok(())
}
