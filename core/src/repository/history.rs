use std::collections::BTreeMap;

use anyhow::Result;

use crate::model::calculation::Calculation;
use crate::model::stats::DayStats;

pub trait HistoryRepository {
    /// Appends a record to the day's sequence and applies the incremental
    /// statistics update for that day.
    fn append(&mut self, day: u32, record: Calculation) -> Result<()>;
    /// Records for one day, in insertion order. Empty when the day has none.
    fn records(&self, day: u32) -> Result<Vec<Calculation>>;
    /// Statistics for one day. `None` when the day has no records.
    fn stats(&self, day: u32) -> Result<Option<DayStats>>;
    /// Days with at least one record, ascending.
    fn days(&self) -> Result<Vec<u32>>;
}

/// Process-lifetime store. Created empty, mutated only through `append`,
/// discarded at exit. A day key exists in `stats` iff it exists in
/// `history` with at least one record.
#[derive(Debug, Default)]
pub struct MemoryHistoryRepository {
    history: BTreeMap<u32, Vec<Calculation>>,
    stats: BTreeMap<u32, DayStats>,
}

impl MemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRepository for MemoryHistoryRepository {
    fn append(&mut self, day: u32, record: Calculation) -> Result<()> {
        let result = record.result;
        self.history.entry(day).or_default().push(record);
        self.stats.entry(day).or_default().record(result);
        Ok(())
    }

    fn records(&self, day: u32) -> Result<Vec<Calculation>> {
        Ok(self.history.get(&day).cloned().unwrap_or_default())
    }

    fn stats(&self, day: u32) -> Result<Option<DayStats>> {
        Ok(self.stats.get(&day).cloned())
    }

    fn days(&self) -> Result<Vec<u32>> {
        Ok(self.history.keys().copied().collect())
    }
}
