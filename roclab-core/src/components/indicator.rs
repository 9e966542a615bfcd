//! Streaming indicator trait.
//!
//! Streaming indicators consume one observation at a time, in strict
//! chronological order, and emit at most one value per observation.

/// Trait for indicators fed one observation at a time.
///
/// `advance` commits the observation to the indicator's history; `probe`
/// evaluates the same observation against a copy of that history and must
/// return exactly what `advance` would, without changing any later result.
///
/// The first `lookback()` calls to `advance` return `None` (warmup).
pub trait StreamingIndicator: Send + Sync {
    /// Human-readable name (e.g., "roc_5").
    fn name(&self) -> &str;

    /// Number of observations consumed before the first value is produced.
    fn lookback(&self) -> usize;

    /// Commit `value` and return the indicator reading, or `None` during warmup.
    fn advance(&mut self, value: f64) -> Option<f64>;

    /// Reading `advance(value)` would produce, leaving the history untouched.
    fn probe(&self, value: f64) -> Option<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lag-1 difference, used to check the trait is object safe.
    struct LastDiff {
        last: Option<f64>,
    }

    impl StreamingIndicator for LastDiff {
        fn name(&self) -> &str {
            "last_diff"
        }

        fn lookback(&self) -> usize {
            1
        }

        fn advance(&mut self, value: f64) -> Option<f64> {
            let out = self.probe(value);
            self.last = Some(value);
            out
        }

        fn probe(&self, value: f64) -> Option<f64> {
            self.last.map(|prev| value - prev)
        }
    }

    #[test]
    fn trait_objects_can_be_stepped() {
        let mut indicators: Vec<Box<dyn StreamingIndicator>> =
            vec![Box::new(LastDiff { last: None })];
        let ind = &mut indicators[0];

        assert_eq!(ind.name(), "last_diff");
        assert_eq!(ind.advance(10.0), None);
        assert_eq!(ind.probe(13.0), Some(3.0));
        assert_eq!(ind.advance(12.0), Some(2.0));
    }
}
