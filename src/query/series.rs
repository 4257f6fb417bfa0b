//! Plot-ready series

use serde::{Deserialize, Serialize};

use super::scale::{axis_scale, AxisScale, RESIDUAL_SERIES};
use crate::record::MetricValue;

/// One curve handed to a plotting consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    label: String,
    metric: String,
    values: Vec<f64>,
    scale: AxisScale,
}

impl Series {
    /// Build a series from queried metric values.
    #[must_use]
    pub fn from_metric(
        label: impl Into<String>,
        metric_name: impl Into<String>,
        values: &[MetricValue],
    ) -> Self {
        let metric = metric_name.into();
        Self {
            label: label.into(),
            scale: axis_scale(&metric),
            metric,
            values: values.iter().map(MetricValue::as_f64).collect(),
        }
    }

    /// Build a series from a residual trace.
    #[must_use]
    pub fn residual(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            metric: RESIDUAL_SERIES.to_string(),
            values,
            scale: AxisScale::Log,
        }
    }

    /// Get the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the metric name.
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Get the values in iteration order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the axis scale.
    #[must_use]
    pub const fn scale(&self) -> AxisScale {
        self.scale
    }

    /// 1-based iteration numbers for the x axis.
    #[must_use]
    pub fn iterations(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.values.len()
    }

    /// Summary statistics.
    #[must_use]
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary::of(&self.values)
    }
}

/// Length, sum and range of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Number of values
    pub len: usize,
    /// Sum of values
    pub sum: f64,
    /// Smallest value, `None` when empty
    pub min: Option<f64>,
    /// Largest value, `None` when empty
    pub max: Option<f64>,
}

impl SeriesSummary {
    /// Summarize a slice of values.
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        Self {
            len: values.len(),
            sum: values.iter().sum(),
            min: values.iter().copied().reduce(f64::min),
            max: values.iter().copied().reduce(f64::max),
        }
    }
}
