//! Iteration table parsing against a recorded MOCEX log
//!
//! The sample log has a banner that mentions CMFD, interleaved MOC/CMFD/LEGACY
//! rows, narrative GMRES output inside the solve block, and trailing rows
//! after the end marker.

use mocex_trace::parser::{LogParser, TabularLogParser};
use mocex_trace::record::{Metric, MetricValue, SolverTag};
use mocex_trace::{Error, FormatError, ParserConfig};

const SAMPLE: &str = include_str!("data/mocex_sample.out");

// =============================================================================
// Row extraction
// =============================================================================

#[test]
fn test_sample_record_count_and_order() {
    let records = TabularLogParser::new().parse_str(SAMPLE).unwrap();

    assert_eq!(records.len(), 6);
    let tags: Vec<SolverTag> = records.iter().map(|r| r.tag()).collect();
    assert_eq!(
        tags,
        vec![
            SolverTag::Moc,
            SolverTag::Cmfd,
            SolverTag::Moc,
            SolverTag::Cmfd,
            SolverTag::Moc,
            SolverTag::Cmfd,
        ]
    );
}

#[test]
fn test_sample_first_row_values() {
    let records = TabularLogParser::new().parse_str(SAMPLE).unwrap();
    let first = &records.records()[0];

    assert_eq!(first.get(Metric::Seconds), MetricValue::Float(0.52));
    assert_eq!(first.get(Metric::Itr), MetricValue::Int(1));
    assert_eq!(first.get(Metric::Eigenvalue), MetricValue::Float(1.00012));
    assert_eq!(first.get(Metric::FissErr), MetricValue::Float(3.3e-4));
    assert_eq!(first.get(Metric::ErrorWgsKGroup), MetricValue::Int(2));
    assert_eq!(first.get(Metric::IterWgsKCumulative), MetricValue::Int(6));
    assert_eq!(first.get(Metric::IterWgsKMinimumGroup), MetricValue::Int(3));
}

#[test]
fn test_legacy_row_is_moc() {
    let records = TabularLogParser::new().parse_str(SAMPLE).unwrap();
    let fifth = &records.records()[4];
    assert_eq!(fifth.tag(), SolverTag::Moc);
    assert_eq!(fifth.metrics().itr, 3);
}

#[test]
fn test_rows_after_end_marker_are_ignored() {
    let records = TabularLogParser::new().parse_str(SAMPLE).unwrap();
    // The truncated CMFD summary row after `[ MOCEX ]` would be fatal if read
    assert_eq!(records.count_tag(SolverTag::Cmfd), 3);
}

#[test]
fn test_parse_file_matches_parse_str() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/mocex_sample.out");
    let from_file = TabularLogParser::new().parse_file(path).unwrap();
    let from_str = TabularLogParser::new().parse_str(SAMPLE).unwrap();
    assert_eq!(from_file, from_str);
}

#[test]
fn test_parsing_is_deterministic() {
    let parser = TabularLogParser::new();
    let a = parser.parse_str(SAMPLE).unwrap();
    let b = parser.parse_str(SAMPLE).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Markers and header
// =============================================================================

#[test]
fn test_missing_begin_marker() {
    let log = "MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7 3|5 2|\n";
    let result = TabularLogParser::new().parse_str(log);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::MissingBeginMarker { .. }))
    ));
}

#[test]
fn test_header_lines_are_not_data() {
    // A data row placed inside the 3-line header is skipped
    let log = "\
BEGINNING OF EIGENVALUE SOLVE
MOCEX|0.1|1|1.0|1e-3|1e-3|1e-3|0.9|1e-3 1|3|2 1|1 2|
header two
header three
MOCEX|0.1|2|1.0|1e-3|1e-3|1e-3|0.9|1e-3 1|3|2 1|1 2|
";
    let records = TabularLogParser::new().parse_str(log).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records.records()[0].metrics().itr, 2);
}

#[test]
fn test_custom_markers() {
    let log = "\
=== SOLVE ===
MOCEX|0.1|1|1.0|1e-3|1e-3|1e-3|0.9|1e-3 1|3|2 1|1 2|
=== END ===
MOCEX|0.1|2|1.0|1e-3|1e-3|1e-3|0.9|1e-3 1|3|2 1|1 2|
";
    let config = ParserConfig::new()
        .begin_marker("=== SOLVE")
        .end_marker("=== END")
        .header_lines(0);
    let records = TabularLogParser::with_config(config).parse_str(log).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_empty_solve_block() {
    let log = "BEGINNING OF EIGENVALUE SOLVE\nh1\nh2\nh3\n[ MOCEX ]\n";
    let records = TabularLogParser::new().parse_str(log).unwrap();
    assert!(records.is_empty());
}

// =============================================================================
// Malformed rows
// =============================================================================

#[test]
fn test_short_row_aborts_parse() {
    let log = "\
BEGINNING OF EIGENVALUE SOLVE
h1
h2
h3
MOCEX|0.1|1|1.0|1e-3|1e-3|1e-3|0.9|1e-3 1|3|2 1|1 2|
CMFD|0.1|1|1.0|
MOCEX|0.1|2|1.0|1e-3|1e-3|1e-3|0.9|1e-3 1|3|2 1|1 2|
";
    let result = TabularLogParser::new().parse_str(log);
    match result {
        Err(Error::Format(FormatError::TooFewFields { line, found, .. })) => {
            assert_eq!(line, 6);
            assert_eq!(found, 5);
        }
        other => panic!("expected TooFewFields, got {other:?}"),
    }
}

#[test]
fn test_missing_max_group_does_not_shift_columns() {
    let log = "\
BEGINNING OF EIGENVALUE SOLVE
h1
h2
h3
MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7|5 2|3 4|
";
    let result = TabularLogParser::new().parse_str(log);
    match result {
        Err(Error::Format(FormatError::TooFewTokens {
            line,
            field,
            expected,
            found,
        })) => {
            assert_eq!((line, field, expected, found), (5, 10, 2, 1));
        }
        other => panic!("expected TooFewTokens, got {other:?}"),
    }
}

#[test]
fn test_split_max_pair_is_accepted() {
    let log = "\
BEGINNING OF EIGENVALUE SOLVE
h1
h2
h3
MOCEX|0.52|3|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7|3|5 2|2 1|
";
    let records = TabularLogParser::new().parse_str(log).unwrap();
    let metrics = records.records()[0].metrics();
    assert_eq!(
        (
            metrics.wgs_iter_max,
            metrics.wgs_iter_max_group,
            metrics.wgs_iter_min,
            metrics.wgs_iter_min_group
        ),
        (7, 3, 5, 2)
    );
}

#[test]
fn test_unclassified_chatter_is_tolerated() {
    let log = "\
BEGINNING OF EIGENVALUE SOLVE
h1
h2
h3
  sweeping 48 polar angles
  | stray | pipes | here |
MOCEX|0.1|1|1.0|1e-3|1e-3|1e-3|0.9|1e-3 1|3|2 1|1 2|
";
    let records = TabularLogParser::new().parse_str(log).unwrap();
    assert_eq!(records.len(), 1);
}
