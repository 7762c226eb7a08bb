use crate::utils::error::{Result, UtilsError};
use serde::{Deserialize, Serialize};

/// Half-open interval `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(UtilsError::invalid_argument(format!(
                "interval bounds must be finite, got [{}, {})",
                low, high
            )));
        }
        if low > high {
            return Err(UtilsError::invalid_argument(format!(
                "interval low bound {} is greater than high bound {}",
                low, high
            )));
        }
        if !(high - low).is_finite() {
            return Err(UtilsError::invalid_argument(format!(
                "width of [{}, {}) overflows",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = UtilsError;

    fn try_from((low, high): (f64, f64)) -> Result<Self> {
        Interval::new(low, high)
    }
}

/// Non-empty, ascending, non-overlapping sequence of intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new(intervals: Vec<Interval>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(UtilsError::invalid_argument("interval set is empty"));
        }

        for (index, pair) in intervals.windows(2).enumerate() {
            if pair[0].high > pair[1].low {
                return Err(UtilsError::invalid_argument(format!(
                    "intervals #{} [{}, {}) and #{} [{}, {}) overlap or are not sorted",
                    index,
                    pair[0].low,
                    pair[0].high,
                    index + 1,
                    pair[1].low,
                    pair[1].high
                )));
            }
        }

        // 總長不超過首尾跨度；跨度有限，取樣就不會得到 inf/NaN
        let span = intervals[intervals.len() - 1].high - intervals[0].low;
        if !span.is_finite() {
            return Err(UtilsError::invalid_argument(format!(
                "span of the interval set [{}, {}) overflows",
                intervals[0].low,
                intervals[intervals.len() - 1].high
            )));
        }

        let set = Self { intervals };
        if set.total_size() <= 0.0 {
            return Err(UtilsError::invalid_argument(
                "interval set does not cover any value",
            ));
        }

        Ok(set)
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let intervals = pairs
            .iter()
            .copied()
            .map(Interval::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(intervals)
    }

    pub fn total_size(&self) -> f64 {
        self.intervals.iter().map(Interval::width).sum()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.intervals.iter().any(|interval| interval.contains(value))
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }
}

/// Optional `<img>` dimensions; `None` leaves the attribute out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupOptions {
    pub images_width: Option<u32>,
    pub images_height: Option<u32>,
}

/// One URI found in a text, with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriMatch<'t> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}
