use crate::eval;
use crate::model::calculation::{Calculation, Operator};
use crate::repository::HistoryRepository;
use crate::service::history_service::HistoryService;
use anyhow::Result;

/// The calculation path: validate, evaluate, record. A validation failure
/// (zero divisor) leaves the history untouched.
pub struct CalculateUseCase<'a, R: HistoryRepository> {
    history: &'a mut HistoryService<R>,
}

impl<'a, R: HistoryRepository> CalculateUseCase<'a, R> {
    pub fn new(history: &'a mut HistoryService<R>) -> Self {
        Self { history }
    }

    pub fn execute(
        &mut self,
        operand1: f64,
        operand2: f64,
        operator: Operator,
    ) -> Result<Calculation> {
        let result = eval::evaluate(operand1, operand2, operator)?;
        self.history.record(operand1, operand2, operator, result)
    }
}
