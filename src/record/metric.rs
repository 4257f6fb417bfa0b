//! Metric names and values
//!
//! The metric set is fixed by the MOCEX iteration table. Names match the
//! column labels users pass on the command line, spaces included.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Storage type of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Floating point quantity
    Float,
    /// Counter or group index
    Int,
}

/// One metric of an iteration row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Wall time of the iteration
    Seconds,
    /// Iteration number (MOC) or cumulative outer count (CMFD)
    Itr,
    /// Eigenvalue estimate
    Eigenvalue,
    /// Eigenvalue error
    Error,
    /// RMS fission source error
    FissErr,
    /// RMS flux error
    FluxErr,
    /// Estimated dominance ratio
    Dom,
    /// Largest relative within-group residual
    ErrorWgsKMaximum,
    /// Group holding the largest within-group residual
    ErrorWgsKGroup,
    /// Total inner iterations in the outer iteration
    IterWgsKCumulative,
    /// Most inner iterations spent on one group
    IterWgsKMaximum,
    /// Group that needed the most inner iterations
    IterWgsKMaximumGroup,
    /// Fewest inner iterations spent on one group
    IterWgsKMinimum,
    /// Group that needed the fewest inner iterations
    IterWgsKMinimumGroup,
}

impl Metric {
    /// All metrics in table column order.
    pub const ALL: [Self; 14] = [
        Self::Seconds,
        Self::Itr,
        Self::Eigenvalue,
        Self::Error,
        Self::FissErr,
        Self::FluxErr,
        Self::Dom,
        Self::ErrorWgsKMaximum,
        Self::ErrorWgsKGroup,
        Self::IterWgsKCumulative,
        Self::IterWgsKMaximum,
        Self::IterWgsKMaximumGroup,
        Self::IterWgsKMinimum,
        Self::IterWgsKMinimumGroup,
    ];

    /// Column name as printed by the solver.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Seconds => "Seconds",
            Self::Itr => "Itr",
            Self::Eigenvalue => "Eigenvalue",
            Self::Error => "Error",
            Self::FissErr => "Fiss Err",
            Self::FluxErr => "Flux Err",
            Self::Dom => "Dom",
            Self::ErrorWgsKMaximum => "Error_WGS_K_Maximum",
            Self::ErrorWgsKGroup => "Error_WGS_K_Group",
            Self::IterWgsKCumulative => "Iter_WGS_K_Cumulative",
            Self::IterWgsKMaximum => "Iter_WGS_K_Maximum",
            Self::IterWgsKMaximumGroup => "Iter_WGS_K_Maximum_Group",
            Self::IterWgsKMinimum => "Iter_WGS_K_Minimum",
            Self::IterWgsKMinimumGroup => "Iter_WGS_K_Minimum_Group",
        }
    }

    /// Storage type of the metric.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Itr
            | Self::ErrorWgsKGroup
            | Self::IterWgsKCumulative
            | Self::IterWgsKMaximum
            | Self::IterWgsKMaximumGroup
            | Self::IterWgsKMinimum
            | Self::IterWgsKMinimumGroup => ValueKind::Int,
            _ => ValueKind::Float,
        }
    }

    /// Look up a metric by column name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.name() == name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::NotFound(format!("{s} can not be found")))
    }
}

/// A metric value, keeping integers exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Integer counter or index
    Int(i64),
    /// Floating point quantity
    Float(f64),
}

impl MetricValue {
    /// Value as `f64` for plotting and summaries.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Integer value, if this is a counter.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
