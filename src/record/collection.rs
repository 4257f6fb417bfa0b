//! Record Collection - the iteration table of one logfile

use serde::Serialize;

use super::{IterationRecord, Metric, MetricValue, SolverTag};
use crate::{Error, Result};

/// Append-only sequence of iteration records in log order.
///
/// MOC and CMFD rows stay interleaved exactly as the solver printed them;
/// per-subsystem views are produced by [`filter`](Self::filter).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordCollection {
    records: Vec<IterationRecord>,
}

impl RecordCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: IterationRecord) {
        self.records.push(record);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record was parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in log order.
    pub fn iter(&self) -> std::slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }

    /// Get all records.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Count records written by one subsystem.
    #[must_use]
    pub fn count_tag(&self, tag: SolverTag) -> usize {
        self.records.iter().filter(|r| r.tag() == tag).count()
    }

    /// Values of `metric_name` for records with `tag`, in log order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the collection is empty or the metric
    /// name is not part of the iteration table.
    pub fn filter(&self, tag: SolverTag, metric_name: &str) -> Result<Vec<MetricValue>> {
        let metric = self.resolve(metric_name)?;
        Ok(self.values(Some(tag), metric))
    }

    /// Values of `metric_name` for every record, in log order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`filter`](Self::filter).
    pub fn select(&self, metric_name: &str) -> Result<Vec<MetricValue>> {
        let metric = self.resolve(metric_name)?;
        Ok(self.values(None, metric))
    }

    /// Typed variant of `filter`/`select`; `None` keeps every tag.
    #[must_use]
    pub fn values(&self, tag: Option<SolverTag>, metric: Metric) -> Vec<MetricValue> {
        self.records
            .iter()
            .filter(|r| tag.map_or(true, |t| r.tag() == t))
            .map(|r| r.get(metric))
            .collect()
    }

    fn resolve(&self, metric_name: &str) -> Result<Metric> {
        if self.records.is_empty() {
            return Err(Error::NotFound(
                "record collection is empty, no value to filter".to_string(),
            ));
        }
        metric_name.parse()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a IterationRecord;
    type IntoIter = std::slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
