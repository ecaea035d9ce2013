use crate::model::calculation::{Calculation, Operator};
use crate::model::stats::DayStats;
use crate::repository::HistoryRepository;
use crate::service::dto::DayReport;
use crate::time;
use anyhow::{anyhow, Result};

pub struct HistoryService<R: HistoryRepository> {
    repo: R,
}

impl<R: HistoryRepository> HistoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Files the calculation under the local calendar day of its own
    /// timestamp. The caller never supplies a day.
    pub fn record(
        &mut self,
        operand1: f64,
        operand2: f64,
        operator: Operator,
        result: f64,
    ) -> Result<Calculation> {
        let record = Calculation::new(operand1, operand2, operator, result);
        let day = time::day_of(&record.performed_at);
        self.repo.append(day, record.clone())?;
        Ok(record)
    }

    pub fn day_report(&self, day: u32) -> Result<Option<DayReport>> {
        let calculations = self.repo.records(day)?;
        if calculations.is_empty() {
            return Ok(None);
        }

        let stats = self
            .repo
            .stats(day)?
            .ok_or_else(|| anyhow!("Missing statistics for day {}", day))?;

        Ok(Some(DayReport {
            day,
            calculations,
            stats,
        }))
    }

    /// Reports for every day with at least one record, ascending by day.
    pub fn all_reports(&self) -> Result<Vec<DayReport>> {
        let mut reports = Vec::new();
        for day in self.repo.days()? {
            if let Some(report) = self.day_report(day)? {
                reports.push(report);
            }
        }
        Ok(reports)
    }

    /// Statistics for every day with at least one record, ascending by day.
    pub fn all_stats(&self) -> Result<Vec<(u32, DayStats)>> {
        let mut all = Vec::new();
        for day in self.repo.days()? {
            if let Some(stats) = self.repo.stats(day)? {
                all.push((day, stats));
            }
        }
        Ok(all)
    }
}
