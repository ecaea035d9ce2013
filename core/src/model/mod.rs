pub mod calculation;
pub mod stats;

// Re-export
pub use calculation::{Calculation, Operator};
pub use stats::DayStats;
