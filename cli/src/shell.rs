use std::io::{self, BufRead, Write};

use anyhow::Result;
use reckon_core::{
    current_day, parse_day, parse_menu_choice, parse_number, parse_operator, CalculateUseCase,
    HistoryService, MemoryHistoryRepository, MenuChoice, Operator,
};

use crate::history;
use crate::stats;

pub struct Shell {
    service: HistoryService<MemoryHistoryRepository>,
}

impl Shell {
    pub fn new(service: HistoryService<MemoryHistoryRepository>) -> Self {
        Self { service }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            print_menu();
            let line = read_line("Choose an option (1-6): ")?;

            let choice = match parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };

            let outcome = match choice {
                MenuChoice::Calculate => self.calculate(),
                MenuChoice::ViewToday => self.view_day(current_day()),
                MenuChoice::ViewDay => self.view_chosen_day(),
                MenuChoice::ViewAll => self.view_all(),
                MenuChoice::ViewStats => self.view_stats(),
                MenuChoice::Exit => {
                    println!("Thank you for using the calculator!");
                    return Ok(());
                }
            };

            // A failing action reports and drops back to the menu instead
            // of ending the session.
            if let Err(e) = outcome {
                println!("An unexpected error occurred: {}", e);
            }
        }
    }

    fn calculate(&mut self) -> Result<()> {
        println!();
        println!("Please enter two numbers and choose an operation.");
        println!();

        let operand1 = prompt_number("Enter the first number: ")?;
        let operand2 = prompt_number("Enter the second number: ")?;
        let operator = prompt_operator()?;

        match CalculateUseCase::new(&mut self.service).execute(operand1, operand2, operator) {
            Ok(record) => history::print_result(&record),
            // Zero divisor: the attempt is discarded, nothing recorded.
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn view_day(&self, day: u32) -> Result<()> {
        match self.service.day_report(day)? {
            Some(report) => history::print_day_report(&report),
            None => println!("No calculations found for day {}", day),
        }
        Ok(())
    }

    fn view_chosen_day(&self) -> Result<()> {
        let line = read_line("Enter day of month (1-31): ")?;
        match parse_day(&line) {
            Ok(day) => self.view_day(day),
            // A bad day selection reports once and returns to the menu.
            Err(e) => {
                println!("Error: {}", e);
                Ok(())
            }
        }
    }

    fn view_all(&self) -> Result<()> {
        let reports = self.service.all_reports()?;
        if reports.is_empty() {
            println!("No calculation history available.");
        } else {
            history::print_all_reports(&reports);
        }
        Ok(())
    }

    fn view_stats(&self) -> Result<()> {
        let all = self.service.all_stats()?;
        if all.is_empty() {
            println!("No statistics available.");
        } else {
            stats::print_daily_stats(&all);
        }
        Ok(())
    }
}

fn print_menu() {
    println!();
    println!("{}", "=".repeat(50));
    println!("CALCULATOR MENU");
    println!("{}", "=".repeat(50));
    println!("1. Perform calculation");
    println!("2. View today's calculations");
    println!("3. View calculations for specific day");
    println!("4. View all calculation history");
    println!("5. View daily statistics");
    println!("6. Exit");
    println!("{}", "=".repeat(50));
}

fn prompt_number(prompt: &str) -> Result<f64> {
    loop {
        let line = read_line(prompt)?;
        match parse_number(&line) {
            Ok(n) => return Ok(n),
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn prompt_operator() -> Result<Operator> {
    println!();
    println!("Available operations:");
    println!("1. Addition (+)");
    println!("2. Subtraction (-)");
    println!("3. Multiplication (*)");
    println!("4. Division (/)");

    loop {
        let line = read_line("\nChoose an operation (1-4 or +, -, *, /): ")?;
        match parse_operator(&line) {
            Ok(op) => return Ok(op),
            Err(e) => println!("Error: {}", e),
        }
    }
}

/// Blocking line read. A closed stdin behaves like an interrupt: farewell
/// and a clean exit.
fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        println!("\nCalculator terminated by user.");
        std::process::exit(0);
    }
    Ok(input)
}
