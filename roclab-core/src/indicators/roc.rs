//! Rate of Change (ROC), streaming.
//!
//! Fractional price change against the observation `period` steps back.
//! ROC[t] = (value[t] - value[t-period]) / value[t-period]
//! Lookback: period (the first reading arrives with observation period + 1).
//!
//! A reading is produced only when the window was already full before the
//! observation arrived, i.e. the push evicted a value. That evicted value is
//! the denominator. A zero denominator yields inf or NaN, returned as-is.

use tracing::{debug, trace};

use crate::components::indicator::StreamingIndicator;
use crate::error::RocError;
use crate::window::PriceWindow;

/// Period used by `RocCalculator::default()`.
pub const DEFAULT_PERIOD: usize = 5;

/// Sliding-window momentum calculator.
///
/// Owns the last `period` observations. `advance` commits an observation;
/// `probe` answers "what would the reading be if the next observation were
/// `value`" against a scratch copy of the window.
#[derive(Debug, Clone)]
pub struct RocCalculator {
    window: PriceWindow,
    name: String,
}

impl RocCalculator {
    /// Create a calculator with an empty window.
    ///
    /// Returns `RocError::InvalidConfiguration` when `period == 0`.
    pub fn new(period: usize) -> Result<Self, RocError> {
        if period == 0 {
            return Err(RocError::InvalidConfiguration { period });
        }
        debug!(period, "roc calculator created");
        Ok(Self::with_period(period))
    }

    fn with_period(period: usize) -> Self {
        Self {
            window: PriceWindow::new(period),
            name: format!("roc_{period}"),
        }
    }

    pub fn period(&self) -> usize {
        self.window.capacity()
    }

    /// Commit `value` and return the new reading, or `None` during warmup.
    pub fn advance(&mut self, value: f64) -> Option<f64> {
        let was_full = self.window.is_full();
        let reading = step(&mut self.window, value);

        if !was_full && self.window.is_full() {
            debug!(
                name = %self.name,
                "window full, next observation produces a reading"
            );
        }
        trace!(name = %self.name, value, ?reading, "roc advance");

        reading
    }

    /// Reading `advance(value)` would return in the current state.
    ///
    /// Works on a value copy of the window, dropped before returning.
    pub fn probe(&self, value: f64) -> Option<f64> {
        let mut scratch = self.window.clone();
        step(&mut scratch, value)
    }

    /// Number of buffered observations (never more than `period`).
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    /// True when the next `advance` or `probe` is guaranteed to yield `Some`.
    pub fn is_warm(&self) -> bool {
        self.window.is_full()
    }

    /// Buffered observations, oldest-first.
    pub fn observations(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.window.iter()
    }

    /// Drop all history, returning to the freshly constructed state.
    pub fn reset(&mut self) {
        self.window.clear();
        debug!(name = %self.name, "roc calculator reset");
    }
}

impl Default for RocCalculator {
    fn default() -> Self {
        Self::with_period(DEFAULT_PERIOD)
    }
}

impl StreamingIndicator for RocCalculator {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period()
    }

    fn advance(&mut self, value: f64) -> Option<f64> {
        RocCalculator::advance(self, value)
    }

    fn probe(&self, value: f64) -> Option<f64> {
        RocCalculator::probe(self, value)
    }
}

/// Shared step for `advance` and `probe`: push, then divide by the evicted value.
fn step(window: &mut PriceWindow, value: f64) -> Option<f64> {
    let evicted = window.push(value);
    if !window.is_full() {
        return None;
    }
    let past = evicted?;
    Some((value - past) / past)
}

/// Scale a fractional reading to percent. Non-finite input passes through.
pub fn as_percent(fraction: f64) -> f64 {
    fraction * 100.0
}
