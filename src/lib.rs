//! # mocex-trace: convergence histories from MOCEX solver logs
//!
//! MOCEX prints its eigenvalue solve as free-form text: a banner, an iteration
//! table where transport (MOC) and acceleration (CMFD) rows interleave, and,
//! at higher verbosity, a narrative trace of every inner linear solve. This
//! crate recovers structured data from that text.
//!
//! ## Modes
//!
//! - **Iteration table**: [`TabularLogParser`] builds a [`RecordCollection`]
//!   of tagged rows; [`SeriesQuery`] reduces it to one metric sequence.
//! - **Residual trace**: [`ResidualLogParser`] extracts the normalized
//!   residual history of one (outer iteration, energy group) pair.
//!
//! Both read the region between `BEGINNING OF EIGENVALUE SOLVE` and
//! `[ MOCEX ]`; see [`ParserConfig`] for the knobs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mocex_trace::parser::{LogParser, TabularLogParser};
//! use mocex_trace::query::{QueryMode, SeriesQuery};
//!
//! let records = TabularLogParser::new().parse_file("mocex.out")?;
//! let series = SeriesQuery::new(QueryMode::MOC, "Fiss Err").series("mocex.out", &records)?;
//! println!("{} iterations, scale {:?}", series.values().len(), series.scale());
//! # Ok::<(), mocex_trace::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod parser;
pub mod query;
pub mod record;

pub use config::ParserConfig;
pub use error::{Error, FormatError, Result};
pub use parser::{LogParser, ResidualLogParser, TabularLogParser};
pub use query::{QueryMode, Series, SeriesQuery};
pub use record::{IterationRecord, Metric, MetricValue, RecordCollection, SolverTag};
