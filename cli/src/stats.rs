use reckon_core::DayStats;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Day")]
    day: u32,
    #[tabled(rename = "Count")]
    count: u64,
    #[tabled(rename = "Sum")]
    sum: String,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
}

pub fn print_daily_stats(all: &[(u32, DayStats)]) {
    println!("\n\x1b[1;36m=== Daily Statistics ===\x1b[0m");

    let rows: Vec<StatsRow> = all
        .iter()
        .map(|(day, stats)| StatsRow {
            day: *day,
            count: stats.count,
            sum: format!("{:.2}", stats.sum),
            average: format!("{:.2}", stats.average),
            min: format!("{:.2}", stats.min),
            max: format!("{:.2}", stats.max),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    println!("{}", table);
}
