use serde::{Deserialize, Serialize};

/// Running statistics over the results recorded for one day. Updated
/// incrementally on each new result, never recomputed from scratch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayStats {
    pub count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl Default for DayStats {
    fn default() -> Self {
        // Infinity sentinels so the first recorded result wins both
        // the min and the max comparison.
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            average: 0.0,
        }
    }
}

impl DayStats {
    pub fn record(&mut self, result: f64) {
        self.count += 1;
        self.sum += result;
        self.min = self.min.min(result);
        self.max = self.max.max(result);
        self.average = self.sum / self.count as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state_sentinels() {
        let stats = DayStats::default();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.sum, 0.0);
        assert_eq!(stats.min, f64::INFINITY);
        assert_eq!(stats.max, f64::NEG_INFINITY);
        assert_eq!(stats.average, 0.0);
    }

    #[test]
    fn test_first_record_wins_min_and_max() {
        let mut stats = DayStats::default();
        stats.record(-2.5);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, -2.5);
        assert_eq!(stats.max, -2.5);
        assert_eq!(stats.average, -2.5);
    }

    #[test]
    fn test_incremental_updates_stay_consistent() {
        let results = [8.0, -3.0, 12.5, 0.0];
        let mut stats = DayStats::default();
        let mut expected_sum = 0.0;

        for (i, result) in results.iter().enumerate() {
            stats.record(*result);
            expected_sum += result;

            // Checked after every append, not only at the end.
            let recorded = &results[..=i];
            assert_eq!(stats.count, recorded.len() as u64);
            assert!((stats.sum - expected_sum).abs() < 1e-9);
            assert_eq!(stats.min, recorded.iter().cloned().fold(f64::INFINITY, f64::min));
            assert_eq!(stats.max, recorded.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
            assert!((stats.average - expected_sum / recorded.len() as f64).abs() < 1e-9);
        }
    }
}
