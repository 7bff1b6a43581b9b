use crate::cli::commands::open_preferences;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::theme::ThemeMode;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme {
        toggle,
        dark,
        light,
    } = cmd
    {
        let prefs = open_preferences(cfg);

        let dark_mode = if *toggle {
            !prefs.load()
        } else if *dark {
            true
        } else if *light {
            false
        } else {
            info(format!(
                "Theme: {}",
                ThemeMode::from_dark_mode(prefs.load()).label()
            ));
            return Ok(());
        };

        prefs.save(dark_mode);
        success(format!(
            "Theme: {}",
            ThemeMode::from_dark_mode(dark_mode).label()
        ));
    }
    Ok(())
}
