//! Time-varying attribute values.

use crate::DynamicModel;
use crate::error::{Error, Result};

/// Closed interval `[low, high]` on the graph's time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInterval {
    low: f64,
    high: f64,
}

impl TimeInterval {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(Error::InvalidInterval { low, high });
        }
        Ok(Self { low, high })
    }

    /// The whole time axis.
    pub const fn unbounded() -> Self {
        Self {
            low: f64::NEG_INFINITY,
            high: f64::INFINITY,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, t: f64) -> bool {
        self.low <= t && t <= self.high
    }

    pub fn intersects(&self, other: &TimeInterval) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

/// Aggregation policy collapsing the values of a series over an interval into one scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Estimator {
    #[default]
    First,
    Last,
    Average,
    Median,
    Sum,
    Min,
    Max,
}

impl Estimator {
    /// Aggregates `values`, given in time order. Empty input yields `None`.
    pub fn estimate(self, values: &[f64]) -> Option<f64> {
        let (&first, _) = values.split_first()?;
        let out = match self {
            Self::First => first,
            Self::Last => values[values.len() - 1],
            Self::Average => values.iter().sum::<f64>() / values.len() as f64,
            Self::Median => {
                let mut sorted = values.to_vec();
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                } else {
                    sorted[mid]
                }
            }
            Self::Sum => values.iter().sum(),
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };
        Some(out)
    }
}

/// A floating-point value that changes over time, one value per interval.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicSeries {
    entries: Vec<(TimeInterval, f64)>,
}

impl DynamicSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value; entries stay ordered by interval start, then end.
    pub fn with(mut self, interval: TimeInterval, value: f64) -> Self {
        self.insert(interval, value);
        self
    }

    pub fn insert(&mut self, interval: TimeInterval, value: f64) {
        let at = self.entries.partition_point(|(iv, _)| {
            iv.low < interval.low || (iv.low == interval.low && iv.high <= interval.high)
        });
        self.entries.insert(at, (interval, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&TimeInterval, f64)> {
        self.entries.iter().map(|(iv, v)| (iv, *v))
    }

    /// Value over `interval` under `estimator`, from every entry intersecting it.
    pub fn value(&self, interval: &TimeInterval, estimator: Estimator) -> Option<f64> {
        let values: Vec<f64> = self
            .entries
            .iter()
            .filter(|(iv, _)| iv.intersects(interval))
            .map(|(_, v)| *v)
            .collect();
        estimator.estimate(&values)
    }
}

/// In-memory [`DynamicModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicSettings {
    pub dynamic: bool,
    pub visible_interval: TimeInterval,
    pub estimator: Estimator,
}

impl DynamicSettings {
    pub fn new(visible_interval: TimeInterval, estimator: Estimator) -> Self {
        Self {
            dynamic: true,
            visible_interval,
            estimator,
        }
    }

    /// A graph that does not vary over time.
    pub fn static_graph() -> Self {
        Self {
            dynamic: false,
            visible_interval: TimeInterval::unbounded(),
            estimator: Estimator::default(),
        }
    }
}

impl DynamicModel for DynamicSettings {
    fn is_dynamic_graph(&self) -> bool {
        self.dynamic
    }

    fn visible_interval(&self) -> TimeInterval {
        self.visible_interval
    }

    fn estimator(&self) -> Estimator {
        self.estimator
    }
}
