//! Iteration record model
//!
//! ```text
//! RecordCollection (1 per logfile) ──< IterationRecord (N, log order)
//!                                          │
//!                                          ├── SolverTag (MOC | CMFD)
//!                                          └── IterationMetrics (fixed schema)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mocex_trace::record::{Metric, MetricValue, RecordCollection, SolverTag};
//!
//! let collection = RecordCollection::new();
//! assert!(collection.is_empty());
//! assert_eq!(SolverTag::classify("LEGACY"), Some(SolverTag::Moc));
//! assert_eq!("Fiss Err".parse::<Metric>().unwrap(), Metric::FissErr);
//! ```

mod collection;
pub(crate) mod iteration_record;
mod metric;
mod tag;

pub use collection::RecordCollection;
pub use iteration_record::{IterationMetrics, IterationRecord};
pub use metric::{Metric, MetricValue, ValueKind};
pub use tag::SolverTag;
