//! Iteration table parser
//!
//! Data rows are `|`-separated. Field 0 names the subsystem; fields 1-11 hold
//! the metrics, three of them as `value group` pairs:
//!
//! ```text
//! MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7 3|5 2|
//! tag   sec  itr keff  err     fiss    flux    dom  wgs err   cum max min
//! ```

use std::io::BufRead;
use std::str::FromStr;

use tracing::{debug, trace};

use super::{LogParser, SolveBlock};
use crate::config::ParserConfig;
use crate::error::FormatError;
use crate::record::{IterationMetrics, IterationRecord, Metric, RecordCollection, SolverTag};
use crate::{Error, Result};

/// Fields a data row must have after splitting on `|`
pub const MIN_FIELDS: usize = 12;

/// Parser for the MOC/CMFD iteration table.
#[derive(Debug, Clone, Default)]
pub struct TabularLogParser {
    config: ParserConfig,
}

impl TabularLogParser {
    /// Create a parser for the default MOCEX layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom markers.
    #[must_use]
    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Get the parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl LogParser for TabularLogParser {
    type Output = RecordCollection;

    fn parse_reader<R: BufRead>(&self, reader: R) -> Result<RecordCollection> {
        let mut collection = RecordCollection::new();
        let mut skipped = 0usize;

        for line in SolveBlock::open(reader, &self.config)? {
            let line = line?;
            match parse_line(line.number, &line.text)? {
                Some(record) => collection.push(record),
                None => {
                    skipped += 1;
                    trace!(line = line.number, "skipping unclassified line");
                }
            }
        }

        debug!(
            records = collection.len(),
            moc = collection.count_tag(SolverTag::Moc),
            cmfd = collection.count_tag(SolverTag::Cmfd),
            skipped,
            "parsed iteration table"
        );
        Ok(collection)
    }
}

/// Parse one solve-block line.
///
/// Returns `Ok(None)` for lines that belong to neither subsystem.
///
/// # Errors
///
/// Returns a [`FormatError`] if a classified row is short or holds a value
/// that does not parse.
pub fn parse_line(line_no: usize, text: &str) -> Result<Option<IterationRecord>> {
    let fields: Vec<&str> = text.trim_end().split('|').collect();
    let Some(tag) = SolverTag::classify(fields[0]) else {
        return Ok(None);
    };
    if fields.len() < MIN_FIELDS {
        return Err(FormatError::TooFewFields {
            line: line_no,
            expected: MIN_FIELDS,
            found: fields.len(),
        }
        .into());
    }

    let row = Row {
        line: line_no,
        fields: &fields,
    };
    let wgs_error = row.tokens(8, 2)?;
    let wgs_iter = row.iteration_pairs()?;
    let metrics = IterationMetrics {
        seconds: row.value(fields[1], Metric::Seconds)?,
        itr: row.value(fields[2], Metric::Itr)?,
        eigenvalue: row.value(fields[3], Metric::Eigenvalue)?,
        error: row.value(fields[4], Metric::Error)?,
        fission_error: row.value(fields[5], Metric::FissErr)?,
        flux_error: row.value(fields[6], Metric::FluxErr)?,
        dominance_ratio: row.value(fields[7], Metric::Dom)?,
        wgs_error_max: row.value(wgs_error[0], Metric::ErrorWgsKMaximum)?,
        wgs_error_group: row.value(wgs_error[1], Metric::ErrorWgsKGroup)?,
        wgs_iter_cumulative: row.value(fields[9], Metric::IterWgsKCumulative)?,
        wgs_iter_max: row.value(wgs_iter[0], Metric::IterWgsKMaximum)?,
        wgs_iter_max_group: row.value(wgs_iter[1], Metric::IterWgsKMaximumGroup)?,
        wgs_iter_min: row.value(wgs_iter[2], Metric::IterWgsKMinimum)?,
        wgs_iter_min_group: row.value(wgs_iter[3], Metric::IterWgsKMinimumGroup)?,
    };

    Ok(Some(IterationRecord::new(tag, metrics)))
}

struct Row<'a> {
    line: usize,
    fields: &'a [&'a str],
}

impl<'a> Row<'a> {
    /// Whitespace tokens of one `value group` field.
    fn tokens(&self, index: usize, expected: usize) -> Result<Vec<&'a str>> {
        self.require(index, expected, self.split(index))
    }

    /// `max group min group` from fields 10 and 11.
    ///
    /// Some solver builds split the max pair across a `|` (`|7|3|5 2|` instead
    /// of `|7 3|5 2|`). Only that exact shape is read shifted: both fields hold
    /// one token and the min pair follows in field 12. Anything else needs two
    /// tokens in each field.
    fn iteration_pairs(&self) -> Result<[&'a str; 4]> {
        let max = self.split(10);
        let next = self.split(11);
        if max.len() == 1 && next.len() == 1 {
            let min = self.tokens(12, 2)?;
            return Ok([max[0], next[0], min[0], min[1]]);
        }
        let max = self.require(10, 2, max)?;
        let min = self.require(11, 2, next)?;
        Ok([max[0], max[1], min[0], min[1]])
    }

    fn split(&self, index: usize) -> Vec<&'a str> {
        self.fields
            .get(index)
            .map_or_else(Vec::new, |field| field.split_whitespace().collect())
    }

    fn require(&self, index: usize, expected: usize, tokens: Vec<&'a str>) -> Result<Vec<&'a str>> {
        if tokens.len() < expected {
            return Err(FormatError::TooFewTokens {
                line: self.line,
                field: index,
                expected,
                found: tokens.len(),
            }
            .into());
        }
        Ok(tokens)
    }

    fn value<T: FromStr>(&self, raw: &str, metric: Metric) -> Result<T> {
        let raw = raw.trim();
        raw.parse().map_err(|_| {
            Error::from(FormatError::InvalidValue {
                line: self.line,
                name: metric.name().to_string(),
                value: raw.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MetricValue;

    const ROW: &str = "MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7|3|5 2|2 1|";

    #[test]
    fn test_parse_reference_row() {
        let record = parse_line(1, ROW).unwrap().unwrap();
        assert_eq!(record.tag(), SolverTag::Moc);
        assert_eq!(record.get(Metric::Itr), MetricValue::Int(3));
        assert_eq!(record.get(Metric::Eigenvalue), MetricValue::Float(1.00012));
        assert_eq!(record.get(Metric::ErrorWgsKMaximum), MetricValue::Float(5.0e-04));
        assert_eq!(record.get(Metric::ErrorWgsKGroup), MetricValue::Int(2));
        assert_eq!(record.get(Metric::IterWgsKCumulative), MetricValue::Int(14));
        // `|7|3|5 2|` shape: max pair split across fields 10 and 11
        assert_eq!(record.get(Metric::IterWgsKMaximum), MetricValue::Int(7));
        assert_eq!(record.get(Metric::IterWgsKMaximumGroup), MetricValue::Int(3));
        assert_eq!(record.get(Metric::IterWgsKMinimum), MetricValue::Int(5));
        assert_eq!(record.get(Metric::IterWgsKMinimumGroup), MetricValue::Int(2));
    }

    #[test]
    fn test_padded_columns() {
        let row = "  CMFD  |   0.10 |  12 | 0.99871 | 1.0E-04 | 2.0E-03 | 3.0E-03 | 0.5 | 1.0E-05   4 |  30 |  9  1 |  1  7 |";
        let record = parse_line(9, row).unwrap().unwrap();
        assert_eq!(record.tag(), SolverTag::Cmfd);
        assert_eq!(record.metrics().itr, 12);
        assert_eq!(record.metrics().wgs_iter_min_group, 7);
    }

    #[test]
    fn test_legacy_is_moc() {
        let row = ROW.replacen("MOCEX", "LEGACY", 1);
        let record = parse_line(1, &row).unwrap().unwrap();
        assert_eq!(record.tag(), SolverTag::Moc);
    }

    #[test]
    fn test_chatter_is_skipped() {
        assert!(parse_line(1, "  Sweeping 48 angles").unwrap().is_none());
        assert!(parse_line(1, "").unwrap().is_none());
        assert!(parse_line(1, "----+-----+----").unwrap().is_none());
    }

    #[test]
    fn test_short_row_is_fatal() {
        let result = parse_line(5, "MOCEX|0.52|3|1.00012|");
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TooFewFields {
                line: 5,
                expected: MIN_FIELDS,
                found: 5
            }))
        ));
    }

    #[test]
    fn test_missing_group_token() {
        let row = "MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04|14|7 3|5 2|2 1|";
        let result = parse_line(2, row);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TooFewTokens { field: 8, found: 1, .. }))
        ));
    }

    #[test]
    fn test_truncated_iteration_pairs() {
        let row = "MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7|3|";
        let result = parse_line(3, row);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TooFewTokens {
                field: 12,
                expected: 2,
                found: 0,
                ..
            }))
        ));
    }

    #[test]
    fn test_max_pair_missing_group_is_fatal() {
        // field 10 lacks its group; the min pair must not slide into its place
        let row = "MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7|5 2|3 4|";
        let result = parse_line(6, row);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TooFewTokens {
                line: 6,
                field: 10,
                expected: 2,
                found: 1,
            }))
        ));
    }

    #[test]
    fn test_min_pair_missing_group_is_fatal() {
        let row = "MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7 3|5|2 1|";
        let result = parse_line(7, row);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TooFewTokens { field: 11, found: 1, .. }))
        ));
    }

    #[test]
    fn test_split_max_pair_needs_min_pair() {
        let row = "MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7|3|5|";
        let result = parse_line(8, row);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TooFewTokens { field: 12, found: 1, .. }))
        ));
    }

    #[test]
    fn test_non_numeric_value() {
        let row = ROW.replacen("|3|", "|three|", 1);
        let result = parse_line(4, &row);
        match result {
            Err(Error::Format(FormatError::InvalidValue { line, name, value })) => {
                assert_eq!(line, 4);
                assert_eq!(name, "Itr");
                assert_eq!(value, "three");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
