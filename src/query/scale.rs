//! Axis scale lookup
//!
//! Plotting consumers draw converging error norms on a log axis and counters or
//! O(1) quantities on a linear axis. The choice depends on the metric name only.

use serde::{Deserialize, Serialize};

/// Y-axis scale for a metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisScale {
    /// Linear axis
    Linear,
    /// Logarithmic axis
    Log,
}

/// Name of the residual trace series
pub const RESIDUAL_SERIES: &str = "residual";

/// Metrics plotted on a linear axis. Every other name, residuals included,
/// uses [`AxisScale::Log`].
pub const LINEAR_METRICS: &[&str] = &[
    "Eigenvalue",
    "Dom",
    "Iter_WGS_K_Cumulative",
    "Iter_WGS_K_Maximum",
    "Iter_WGS_K_Maximum_Group",
    "Iter_WGS_K_Minimum",
    "Iter_WGS_K_Minimum_Group",
];

/// Axis scale for a metric name.
#[must_use]
pub fn axis_scale(metric_name: &str) -> AxisScale {
    if LINEAR_METRICS.contains(&metric_name) {
        AxisScale::Linear
    } else {
        AxisScale::Log
    }
}
