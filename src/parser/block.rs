//! Solve block locator
//!
//! Both parsers read the same region of a logfile: everything after the begin
//! marker and its header, up to (not including) the end marker line.

use std::io::{BufRead, Lines};

use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::FormatError;
use crate::Result;

/// One line inside the solve block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLine {
    /// 1-based line number in the whole file
    pub number: usize,
    /// Line content without the newline
    pub text: String,
}

/// Iterator over the lines of a solve block.
///
/// Stops at the end marker, at end of input, or after yielding an IO error.
pub struct SolveBlock<'c, R> {
    lines: Lines<R>,
    line_no: usize,
    end_marker: &'c str,
    finished: bool,
}

impl<'c, R: BufRead> SolveBlock<'c, R> {
    /// Skip the preamble and header of `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingBeginMarker`] if no line contains the
    /// begin marker, or an IO error from the reader.
    pub fn open(reader: R, config: &'c ParserConfig) -> Result<Self> {
        let mut lines = reader.lines();
        let mut line_no = 0;

        loop {
            let Some(line) = lines.next() else {
                return Err(FormatError::MissingBeginMarker {
                    marker: config.begin().to_string(),
                }
                .into());
            };
            line_no += 1;
            if line?.contains(config.begin()) {
                break;
            }
        }
        debug!(line = line_no, "found begin marker");

        for _ in 0..config.header_line_count() {
            match lines.next() {
                Some(line) => {
                    line?;
                    line_no += 1;
                }
                None => break,
            }
        }

        Ok(Self {
            lines,
            line_no,
            end_marker: config.end(),
            finished: false,
        })
    }

    /// Number of the last line consumed.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for SolveBlock<'_, R> {
    type Item = Result<BlockLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.lines.next() {
            None => {
                self.finished = true;
                warn!(line = self.line_no, "log ended before end marker");
                None
            }
            Some(Err(e)) => {
                self.finished = true;
                Some(Err(e.into()))
            }
            Some(Ok(text)) => {
                self.line_no += 1;
                if text.contains(self.end_marker) {
                    self.finished = true;
                    debug!(line = self.line_no, "found end marker");
                    return None;
                }
                Some(Ok(BlockLine {
                    number: self.line_no,
                    text,
                }))
            }
        }
    }
}
