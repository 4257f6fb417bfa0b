//! MOCEX log parsers
//!
//! Two modes read the same solve block (see [`SolveBlock`]):
//!
//! - [`TabularLogParser`]: the interleaved MOC/CMFD iteration table, one
//!   [`IterationRecord`](crate::record::IterationRecord) per data row.
//! - [`ResidualLogParser`]: the normalized inner-solve residual trace of one
//!   (outer, group) pair.
//!
//! ## Example
//!
//! ```rust
//! use mocex_trace::parser::{LogParser, TabularLogParser};
//!
//! # fn main() -> mocex_trace::Result<()> {
//! let log = "\
//! setup banner
//!  BEGINNING OF EIGENVALUE SOLVE
//!  Solver|Seconds|Itr|Eigenvalue|Error|Fiss Err|Flux Err|Dom|WGS Err Grp|Cum|Max Grp|Min Grp|
//!  ------+-------+---+----------+-----+--------+--------+---+-----------+---+-------+-------+
//!
//! MOCEX|0.52|1|1.00012|2.1e-05|3.3e-04|1.0e-03|0.98|5.0e-04 2|14|7 3|5 2|
//! [ MOCEX ] solve complete
//! ";
//! let records = TabularLogParser::new().parse_str(log)?;
//! assert_eq!(records.len(), 1);
//! # Ok(())
//! # }
//! ```

mod block;
mod residual;
mod tabular;

pub use block::{BlockLine, SolveBlock};
pub use residual::{ResidualLogParser, ResidualTarget, ScanState, ScanStep};
pub use tabular::{parse_line, TabularLogParser, MIN_FIELDS};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Result;

/// A single-pass parser over one logfile.
pub trait LogParser {
    /// What one logfile parses into.
    type Output;

    /// Parse from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns a format error for malformed content or an IO error from the
    /// reader.
    fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Self::Output>;

    /// Parse an in-memory log.
    ///
    /// # Errors
    ///
    /// Same as [`parse_reader`](Self::parse_reader).
    fn parse_str(&self, text: &str) -> Result<Self::Output> {
        self.parse_reader(text.as_bytes())
    }

    /// Parse a logfile from disk.
    ///
    /// The file is closed when parsing ends, early stop and errors included.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened or read.
    fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Self::Output> {
        let file = File::open(path.as_ref())?;
        self.parse_reader(BufReader::new(file))
    }
}
