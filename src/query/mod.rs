//! Metric queries over a parsed iteration table
//!
//! ## Query modes
//!
//! - `MOC`: rows written by the transport sweep (MOCEX and LEGACY)
//! - `CMFD`: rows written by the diffusion acceleration
//! - `MIX`: every row, in the order the solver printed them
//!
//! A query reduces one [`RecordCollection`] to a single metric sequence, which
//! becomes a [`Series`] for plotting consumers.
//!
//! ## Example
//!
//! ```rust
//! use mocex_trace::query::{QueryMode, SeriesQuery};
//!
//! # fn main() -> mocex_trace::Result<()> {
//! let query = SeriesQuery::new("MIX".parse::<QueryMode>()?, "Fiss Err");
//! assert_eq!(query.mode(), QueryMode::Mix);
//! # Ok(())
//! # }
//! ```

mod scale;
mod series;

pub use scale::{axis_scale, AxisScale, LINEAR_METRICS, RESIDUAL_SERIES};
pub use series::{Series, SeriesSummary};

use std::fmt;
use std::str::FromStr;

use crate::record::{MetricValue, RecordCollection, SolverTag};
use crate::{Error, Result};

/// Which rows a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
    /// Rows of one subsystem
    Tag(SolverTag),
    /// All rows in log order
    Mix,
}

impl QueryMode {
    /// Transport sweep rows.
    pub const MOC: Self = Self::Tag(SolverTag::Moc);
    /// Diffusion acceleration rows.
    pub const CMFD: Self = Self::Tag(SolverTag::Cmfd);

    /// Tag filter of this mode, `None` for `MIX`.
    #[must_use]
    pub const fn tag(&self) -> Option<SolverTag> {
        match self {
            Self::Tag(tag) => Some(*tag),
            Self::Mix => None,
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::Mix => f.write_str("MIX"),
        }
    }
}

impl FromStr for QueryMode {
    type Err = Error;

    /// Parse `MOC`, `CMFD` or `MIX`.
    fn from_str(s: &str) -> Result<Self> {
        if s == "MIX" {
            return Ok(Self::Mix);
        }
        s.parse().map(Self::Tag)
    }
}

/// A metric query against one record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesQuery {
    mode: QueryMode,
    metric: String,
}

impl SeriesQuery {
    /// Create a query.
    #[must_use]
    pub fn new(mode: QueryMode, metric_name: impl Into<String>) -> Self {
        Self {
            mode,
            metric: metric_name.into(),
        }
    }

    /// Get the query mode.
    #[must_use]
    pub const fn mode(&self) -> QueryMode {
        self.mode
    }

    /// Get the metric name.
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Run the query.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an empty collection or an unknown
    /// metric name.
    pub fn run(&self, collection: &RecordCollection) -> Result<Vec<MetricValue>> {
        match self.mode.tag() {
            Some(tag) => collection.filter(tag, &self.metric),
            None => collection.select(&self.metric),
        }
    }

    /// Run the query and label the result for plotting.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn series(&self, label: impl Into<String>, collection: &RecordCollection) -> Result<Series> {
        let values = self.run(collection)?;
        Ok(Series::from_metric(label, self.metric.as_str(), &values))
    }
}
