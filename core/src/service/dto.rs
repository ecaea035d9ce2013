use serde::{Deserialize, Serialize};

use crate::model::calculation::Calculation;
use crate::model::stats::DayStats;

/// Everything recorded for one day, ready for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayReport {
    pub day: u32,
    pub calculations: Vec<Calculation>,
    pub stats: DayStats,
}
