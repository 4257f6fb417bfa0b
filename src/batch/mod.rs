//! Multi-file parsing
//!
//! Logfiles share no state, so they are parsed independently (in parallel
//! with the `rayon` feature). Results keep the order of the input paths and
//! one malformed file never affects the others.

use std::path::{Path, PathBuf};

use tracing::{debug, info_span, warn};

use crate::parser::LogParser;
use crate::Result;

/// Outcome of parsing one logfile.
#[derive(Debug)]
pub struct FileOutcome<T> {
    /// Path that was parsed
    pub path: PathBuf,
    /// Parse result for that path
    pub result: Result<T>,
}

impl<T> FileOutcome<T> {
    /// Whether the file parsed cleanly.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Parse every path with `parser`.
///
/// # Example
///
/// ```rust,no_run
/// use mocex_trace::batch::parse_files;
/// use mocex_trace::parser::TabularLogParser;
///
/// let outcomes = parse_files(&TabularLogParser::new(), &["mocex_1.out", "mocex_2.out"]);
/// for outcome in &outcomes {
///     match &outcome.result {
///         Ok(records) => println!("{}: {} rows", outcome.path.display(), records.len()),
///         Err(e) => eprintln!("{}: {e}", outcome.path.display()),
///     }
/// }
/// ```
#[cfg(feature = "rayon")]
pub fn parse_files<P, S>(parser: &P, paths: &[S]) -> Vec<FileOutcome<P::Output>>
where
    P: LogParser + Sync,
    P::Output: Send,
    S: AsRef<Path> + Sync,
{
    use rayon::prelude::*;

    paths
        .par_iter()
        .map(|path| parse_one(parser, path.as_ref()))
        .collect()
}

/// Parse every path with `parser`, one after another.
#[cfg(not(feature = "rayon"))]
pub fn parse_files<P, S>(parser: &P, paths: &[S]) -> Vec<FileOutcome<P::Output>>
where
    P: LogParser,
    S: AsRef<Path>,
{
    paths
        .iter()
        .map(|path| parse_one(parser, path.as_ref()))
        .collect()
}

fn parse_one<P: LogParser>(parser: &P, path: &Path) -> FileOutcome<P::Output> {
    let span = info_span!("parse_file", path = %path.display());
    let _guard = span.enter();

    let result = parser.parse_file(path);
    match &result {
        Ok(_) => debug!("parsed"),
        Err(e) => warn!(error = %e, "parse failed"),
    }

    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TabularLogParser;
    use crate::Error;

    #[test]
    fn test_missing_file_is_io_error() {
        let outcomes = parse_files(
            &TabularLogParser::new(),
            &["/nonexistent/mocex-trace/missing.out"],
        );
        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].is_ok());
        assert!(matches!(outcomes[0].result, Err(Error::Io(_))));
    }

    #[test]
    fn test_empty_path_list() {
        let paths: [&str; 0] = [];
        let outcomes = parse_files(&TabularLogParser::new(), &paths);
        assert!(outcomes.is_empty());
    }
}
