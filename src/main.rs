// Lucky Color
// Prints the month grid and the lucky colors, unlucky colors and looks of a day

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::path::Path;

use lucky_color::models::day_colors::{DayColorTable, LookTable, TableError};
use lucky_color::models::settings::AppConfig;
use lucky_color::services::calendar::MonthNavigator;
use lucky_color::services::catalog::ColorCatalog;
use lucky_color::services::lookup::{
    day_indicators, look_swatches, ordered_looks, resolve_day_swatches, resolve_looks, Swatch,
};
use lucky_color::services::palette::derive_related_colors;
use lucky_color::services::settings::SettingsService;
use lucky_color::utils::date::weekday_key_for;

fn main() -> Result<()> {
    env_logger::init();

    let today = Local::now().date_naive();
    let day = match std::env::args().nth(1) {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
            .with_context(|| format!("Expected a date like 2025-03-10, got {:?}", arg))?,
        None => today,
    };

    let settings = SettingsService::at_default_location();
    let config = settings.load_or_default()?;
    log::debug!("Using config {:?}", config);

    let (colors, looks, catalog) = load_tables(&config)?;

    let mut navigator = MonthNavigator::new(&today);
    navigator.show(day);

    let weekday = weekday_key_for(&day);
    print_grid(&navigator, &today, &colors);

    println!();
    println!("{} ({})", day.format("%A %-d %B %Y"), config.preferences.theme);

    let swatches = resolve_day_swatches(&colors, &catalog, weekday);
    print_swatches("Lucky", &swatches.lucky);
    print_swatches("Unlucky", &swatches.unlucky);

    let day_looks = resolve_looks(&looks, weekday);
    for (kind, look) in ordered_looks(&day_looks) {
        println!();
        let swatches = look_swatches(look);
        print_swatches(kind.key(), &swatches);
        if let Some(base) = swatches.first() {
            let palette = derive_related_colors(base.color).map(|color| color.to_hex());
            println!("  palette: {}", palette.join(" "));
        }
    }

    Ok(())
}

fn load_tables(config: &AppConfig) -> Result<(DayColorTable, LookTable, ColorCatalog)> {
    let colors = or_empty(DayColorTable::from_path(&config.data.day_colors), &config.data.day_colors)?;
    let looks = or_empty(LookTable::from_path(&config.data.looks), &config.data.looks)?;
    let catalog = match &config.data.catalog {
        Some(path) => ColorCatalog::from_path(path)
            .with_context(|| format!("Failed to load color catalog {}", path.display()))?,
        None => ColorCatalog::default(),
    };
    Ok((colors, looks, catalog))
}

/// Missing table files degrade to empty tables; malformed ones are errors.
fn or_empty<T: Default>(loaded: Result<T, TableError>, path: &Path) -> Result<T> {
    match loaded {
        Ok(table) => Ok(table),
        Err(TableError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("Table {} not found, continuing without it", path.display());
            Ok(T::default())
        }
        Err(err) => Err(err).with_context(|| format!("Failed to load {}", path.display())),
    }
}

fn print_grid(navigator: &MonthNavigator, today: &NaiveDate, colors: &DayColorTable) {
    let grid = navigator.grid(today);
    println!("{:^35}", grid.month.format("%B %Y").to_string());
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");
    for week in &grid.weeks {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                if !cell.is_in_displayed_month {
                    return "     ".to_string();
                }
                let marks = day_indicators(colors, weekday_key_for(&cell.date));
                let open = if cell.is_selected { '[' } else if cell.is_today { '(' } else { ' ' };
                let close = if cell.is_selected { ']' } else if cell.is_today { ')' } else { ' ' };
                let dot = if marks.has_lucky { '*' } else { ' ' };
                format!("{}{:>2}{}{}", open, cell.date.day(), close, dot)
            })
            .collect();
        println!("{}", row.join(""));
    }
}

fn print_swatches(label: &str, swatches: &[Swatch]) {
    if swatches.is_empty() {
        println!("{}: -", label);
        return;
    }
    let entries: Vec<String> = swatches
        .iter()
        .map(|swatch| format!("{} {} (text: {})", swatch.name, swatch.color, swatch.foreground))
        .collect();
    println!("{}: {}", label, entries.join(", "));
}
