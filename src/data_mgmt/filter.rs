use super::models::Value;

/// Drops consecutive rows whose cumulative-yield indicator did not advance.
///
/// Holds exactly one scalar of state: the indicator value of the last row
/// examined (not the last row kept), initialised to 0 before the first row.
/// A genuine first reading of exactly 0 is therefore skipped unless
/// `include_zero` is set.
#[derive(Debug)]
pub struct ChangeFilter {
    include_zero: bool,
    last_indicator: f64,
}

impl ChangeFilter {
    pub fn new(include_zero: bool) -> Self {
        ChangeFilter {
            include_zero,
            last_indicator: 0.0,
        }
    }

    /// Decide whether to keep a row, given its indicator value. Updates the
    /// retained value on every call so that runs of unchanged readings
    /// collapse to their first occurrence.
    pub fn keep(&mut self, indicator: &Value) -> bool {
        let current = indicator.as_f64();
        let keep = self.include_zero || current != self.last_indicator;
        self.last_indicator = current;
        keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decisions(filter: &mut ChangeFilter, indicators: &[i64]) -> Vec<bool> {
        indicators
            .iter()
            .map(|i| filter.keep(&Value::Int(*i)))
            .collect()
    }

    #[test]
    fn test_strictly_increasing_keeps_every_row() {
        let mut filter = ChangeFilter::new(false);
        assert_eq!(
            decisions(&mut filter, &[100, 150, 151, 200]),
            vec![true, true, true, true]
        );
    }

    #[test]
    fn test_unchanged_runs_keep_only_first() {
        let mut filter = ChangeFilter::new(false);
        assert_eq!(
            decisions(&mut filter, &[100, 100, 100, 150, 150]),
            vec![true, false, false, true, false]
        );
    }

    #[test]
    fn test_include_zero_keeps_everything() {
        let mut filter = ChangeFilter::new(true);
        assert_eq!(
            decisions(&mut filter, &[100, 100, 0, 0]),
            vec![true, true, true, true]
        );
    }

    #[test]
    fn test_first_zero_reading_is_skipped() {
        // Initial state is 0, so a real first reading of 0 is dropped.
        let mut filter = ChangeFilter::new(false);
        assert_eq!(decisions(&mut filter, &[0, 100]), vec![false, true]);
    }

    #[test]
    fn test_compares_against_last_examined_not_last_kept() {
        // 100 is kept, the second 100 is dropped, and a third 100 is still
        // compared against the examined 100, not against the kept one.
        let mut filter = ChangeFilter::new(false);
        assert_eq!(
            decisions(&mut filter, &[100, 100, 100]),
            vec![true, false, false]
        );
    }
}
