use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::LocationStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and the `locations` table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    let db_path = cfg.database_path();
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", db_path.display()));

    let store = LocationStore::open(&db_path);
    store.ensure_schema()?;
    let count = store.count()?;

    success(format!(
        "Database initialized at {} ({} stored locations)",
        db_path.display(),
        count
    ));
    Ok(())
}
