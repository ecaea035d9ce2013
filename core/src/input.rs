use crate::model::calculation::Operator;
use anyhow::{anyhow, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Calculate,
    ViewToday,
    ViewDay,
    ViewAll,
    ViewStats,
    Exit,
}

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice> {
    match input.trim() {
        "1" => Ok(MenuChoice::Calculate),
        "2" => Ok(MenuChoice::ViewToday),
        "3" => Ok(MenuChoice::ViewDay),
        "4" => Ok(MenuChoice::ViewAll),
        "5" => Ok(MenuChoice::ViewStats),
        "6" => Ok(MenuChoice::Exit),
        _ => Err(anyhow!("Invalid choice. Please select 1-6.")),
    }
}

pub fn parse_number(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("Please enter a valid number (e.g., 5, 3.14, -2)"))
}

/// Accepts the numeric submenu index (1=+, 2=-, 3=*, 4=/) or the direct
/// operator symbol.
pub fn parse_operator(input: &str) -> Result<Operator> {
    let symbol = match input.trim() {
        "1" => "+",
        "2" => "-",
        "3" => "*",
        "4" => "/",
        other => other,
    };

    Operator::from_symbol(symbol)
        .map_err(|_| anyhow!("Please choose a valid operation (1-4 or +, -, *, /)"))
}

pub fn parse_day(input: &str) -> Result<u32> {
    let day: u32 = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("Please enter a valid day number"))?;

    if !(1..=31).contains(&day) {
        return Err(anyhow!("Day must be between 1 and 31"));
    }
    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1").unwrap(), MenuChoice::Calculate);
        assert_eq!(parse_menu_choice(" 2 ").unwrap(), MenuChoice::ViewToday);
        assert_eq!(parse_menu_choice("3").unwrap(), MenuChoice::ViewDay);
        assert_eq!(parse_menu_choice("4").unwrap(), MenuChoice::ViewAll);
        assert_eq!(parse_menu_choice("5").unwrap(), MenuChoice::ViewStats);
        assert_eq!(parse_menu_choice("6\n").unwrap(), MenuChoice::Exit);

        assert!(parse_menu_choice("7").is_err());
        assert!(parse_menu_choice("exit").is_err());
        assert!(parse_menu_choice("").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("5").unwrap(), 5.0);
        assert_eq!(parse_number(" 3.14 ").unwrap(), 3.14);
        assert_eq!(parse_number("-2\n").unwrap(), -2.0);

        assert!(parse_number("abc").is_err());
        assert!(parse_number("").is_err());
        assert!(parse_number("1,5").is_err());
    }

    #[test]
    fn test_parse_operator_symbols() {
        assert_eq!(parse_operator("+").unwrap(), Operator::Add);
        assert_eq!(parse_operator("-").unwrap(), Operator::Subtract);
        assert_eq!(parse_operator("*").unwrap(), Operator::Multiply);
        assert_eq!(parse_operator(" / ").unwrap(), Operator::Divide);
    }

    #[test]
    fn test_parse_operator_menu_indices() {
        assert_eq!(parse_operator("1").unwrap(), Operator::Add);
        assert_eq!(parse_operator("2").unwrap(), Operator::Subtract);
        assert_eq!(parse_operator("3").unwrap(), Operator::Multiply);
        assert_eq!(parse_operator("4").unwrap(), Operator::Divide);
    }

    #[test]
    fn test_parse_operator_rejects_unknown() {
        assert!(parse_operator("%").is_err());
        assert!(parse_operator("5").is_err());
        assert!(parse_operator("add").is_err());
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("1").unwrap(), 1);
        assert_eq!(parse_day(" 31 ").unwrap(), 31);
        assert_eq!(parse_day("15\n").unwrap(), 15);

        assert!(parse_day("0").is_err());
        assert!(parse_day("32").is_err());
        assert!(parse_day("-3").is_err());
        assert!(parse_day("abc").is_err());
    }
}
