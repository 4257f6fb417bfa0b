//! Iteration Record - one row of the MOCEX iteration table

use serde::{Deserialize, Serialize};

use super::{Metric, MetricValue, SolverTag};

/// Metrics carried by every iteration row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationMetrics {
    /// Wall time of the iteration
    pub seconds: f64,
    /// Iteration number
    pub itr: u32,
    /// Eigenvalue estimate
    pub eigenvalue: f64,
    /// Eigenvalue error
    pub error: f64,
    /// RMS fission source error
    pub fission_error: f64,
    /// RMS flux error
    pub flux_error: f64,
    /// Estimated dominance ratio
    pub dominance_ratio: f64,
    /// Largest relative within-group residual
    pub wgs_error_max: f64,
    /// Group of `wgs_error_max`
    pub wgs_error_group: u32,
    /// Total inner iterations
    pub wgs_iter_cumulative: u32,
    /// Most inner iterations on one group
    pub wgs_iter_max: u32,
    /// Group of `wgs_iter_max`
    pub wgs_iter_max_group: u32,
    /// Fewest inner iterations on one group
    pub wgs_iter_min: u32,
    /// Group of `wgs_iter_min`
    pub wgs_iter_min_group: u32,
}

/// A tagged iteration row.
///
/// The schema is fixed at construction: every record exposes all of
/// [`Metric::ALL`], so lookups by metric never miss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    tag: SolverTag,
    metrics: IterationMetrics,
}

impl IterationRecord {
    /// Create a new iteration record.
    #[must_use]
    pub const fn new(tag: SolverTag, metrics: IterationMetrics) -> Self {
        Self { tag, metrics }
    }

    /// Get the subsystem that wrote the row.
    #[must_use]
    pub const fn tag(&self) -> SolverTag {
        self.tag
    }

    /// Get the typed metrics.
    #[must_use]
    pub const fn metrics(&self) -> &IterationMetrics {
        &self.metrics
    }

    /// Get one metric value.
    #[must_use]
    pub fn get(&self, metric: Metric) -> MetricValue {
        let m = &self.metrics;
        match metric {
            Metric::Seconds => MetricValue::Float(m.seconds),
            Metric::Itr => MetricValue::Int(m.itr.into()),
            Metric::Eigenvalue => MetricValue::Float(m.eigenvalue),
            Metric::Error => MetricValue::Float(m.error),
            Metric::FissErr => MetricValue::Float(m.fission_error),
            Metric::FluxErr => MetricValue::Float(m.flux_error),
            Metric::Dom => MetricValue::Float(m.dominance_ratio),
            Metric::ErrorWgsKMaximum => MetricValue::Float(m.wgs_error_max),
            Metric::ErrorWgsKGroup => MetricValue::Int(m.wgs_error_group.into()),
            Metric::IterWgsKCumulative => MetricValue::Int(m.wgs_iter_cumulative.into()),
            Metric::IterWgsKMaximum => MetricValue::Int(m.wgs_iter_max.into()),
            Metric::IterWgsKMaximumGroup => MetricValue::Int(m.wgs_iter_max_group.into()),
            Metric::IterWgsKMinimum => MetricValue::Int(m.wgs_iter_min.into()),
            Metric::IterWgsKMinimumGroup => MetricValue::Int(m.wgs_iter_min_group.into()),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_metrics(itr: u32) -> IterationMetrics {
    IterationMetrics {
        seconds: 0.5,
        itr,
        eigenvalue: 1.0,
        error: 1e-4,
        fission_error: 1e-3,
        flux_error: 1e-3,
        dominance_ratio: 0.9,
        wgs_error_max: 5e-4,
        wgs_error_group: 2,
        wgs_iter_cumulative: 14,
        wgs_iter_max: 7,
        wgs_iter_max_group: 3,
        wgs_iter_min: 2,
        wgs_iter_min_group: 1,
    }
}
