use crate::cli::commands::{open_session, passive_provider};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::location::LocationRecord;
use crate::ui::theme::Palette;
use crate::utils::table::{Column, Table};
use std::io::IsTerminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let session = open_session(cfg, passive_provider());
        let locations = session.locations();

        if *json {
            println!("{}", serde_json::to_string_pretty(&locations)?);
            return Ok(());
        }

        let colored = std::io::stdout().is_terminal();
        print!("{}", render(&locations, &session.palette(), colored));
    }
    Ok(())
}

/// Title line, theme line and the table (or an empty-state line).
pub fn render(locations: &[LocationRecord], palette: &Palette, colored: bool) -> String {
    let mut out = String::new();

    out.push_str(&palette.paint(palette.title(), "My Locations", colored));
    out.push('\n');
    out.push_str(&palette.paint(
        palette.muted(),
        &format!("Theme: {}", palette.mode.label()),
        colored,
    ));
    out.push('\n');

    if locations.is_empty() {
        out.push_str(&palette.paint(palette.muted(), "No locations captured yet.", colored));
        out.push('\n');
        return out;
    }

    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("Location"),
        Column::new("Latitude"),
        Column::new("Longitude"),
    ]);

    for loc in locations {
        table.add_row(vec![
            loc.id.to_string(),
            loc.uid.to_string(),
            loc.latitude.clone(),
            loc.longitude.clone(),
        ]);
    }

    out.push_str(&table.render_with(|h| palette.paint(palette.text().bold(), h, colored)));
    out
}
