pub mod model;
pub mod repository;
pub mod input;
pub mod eval;
pub mod time;
pub mod service;
pub mod usecase;

pub use model::calculation::{Calculation, Operator};
pub use model::stats::DayStats;
pub use repository::{HistoryRepository, MemoryHistoryRepository};
pub use input::{parse_day, parse_menu_choice, parse_number, parse_operator, MenuChoice};
pub use eval::{evaluate, validate};
pub use time::current_day;
pub use service::history_service::HistoryService;
pub use service::dto::DayReport;
pub use usecase::calculate::CalculateUseCase;
