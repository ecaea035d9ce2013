use chrono::{DateTime, Local};
use reckon_core::{Calculation, DayReport};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct CalculationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Calculation")]
    expression: String,
    #[tabled(rename = "Result")]
    result: String,
}

impl CalculationRow {
    fn from_record(index: usize, record: &Calculation) -> Self {
        let id_str = record.id.to_string();
        let short_id = if id_str.len() > 8 { &id_str[..8] } else { &id_str };
        let local: DateTime<Local> = DateTime::from(record.performed_at);

        Self {
            index,
            time: local.format("%Y-%m-%d %H:%M:%S").to_string(),
            id: short_id.to_string(),
            expression: record.expression(),
            result: record.result.to_string(),
        }
    }
}

pub fn print_result(record: &Calculation) {
    println!();
    println!("{}", "=".repeat(40));
    println!("CALCULATION RESULT");
    println!("{}", "=".repeat(40));
    println!("{} = {}", record.expression(), record.result);
    println!("{}", "=".repeat(40));
}

pub fn print_day_report(report: &DayReport) {
    println!("\n\x1b[1;36m=== Calculations for Day {} ===\x1b[0m", report.day);
    print_day_table(&report.calculations);

    let stats = &report.stats;
    println!("Day {} Statistics:", report.day);
    println!("  Total calculations: {}", stats.count);
    println!("  Sum of results: {:.2}", stats.sum);
    println!("  Average result: {:.2}", stats.average);
    println!("  Min result: {:.2}", stats.min);
    println!("  Max result: {:.2}", stats.max);
}

pub fn print_all_reports(reports: &[DayReport]) {
    println!("\n\x1b[1;36m=== All Calculation History ===\x1b[0m");
    for report in reports {
        println!(
            "\nDay {} ({} calculations):",
            report.day,
            report.calculations.len()
        );
        print_day_table(&report.calculations);
    }
}

fn print_day_table(calculations: &[Calculation]) {
    let rows: Vec<CalculationRow> = calculations
        .iter()
        .enumerate()
        .map(|(i, record)| CalculationRow::from_record(i + 1, record))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    println!("{}", table);
}
