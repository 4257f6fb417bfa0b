//! Parser configuration
//!
//! Defaults reproduce the MOCEX log layout. Overrides exist for logs written by
//! patched solver builds and for the outer-iteration numbering question (see
//! [`ParserConfig::outer_origin`]).

use serde::{Deserialize, Serialize};

/// Line fragment that opens the solve block
pub const BEGIN_MARKER: &str = "BEGINNING OF EIGENVALUE SOLVE";

/// Line fragment that closes the solve block
pub const END_MARKER: &str = "[ MOCEX ]";

/// Column-title/separator lines following the begin marker
pub const HEADER_LINES: usize = 3;

/// Settings shared by both log parsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    begin_marker: String,
    end_marker: String,
    header_lines: usize,
    outer_origin: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            begin_marker: BEGIN_MARKER.to_string(),
            end_marker: END_MARKER.to_string(),
            header_lines: HEADER_LINES,
            outer_origin: 0,
        }
    }
}

impl ParserConfig {
    /// Create a configuration with MOCEX defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the begin marker.
    #[must_use]
    pub fn begin_marker(mut self, marker: impl Into<String>) -> Self {
        self.begin_marker = marker.into();
        self
    }

    /// Set the end marker.
    #[must_use]
    pub fn end_marker(mut self, marker: impl Into<String>) -> Self {
        self.end_marker = marker.into();
        self
    }

    /// Set how many header lines follow the begin marker.
    #[must_use]
    pub const fn header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }

    /// Set the value of the outer counter before the first CMFD line.
    ///
    /// With the default of 0, outer `n` is the segment after the `n`-th CMFD
    /// line. With 1, the segment before any CMFD line is outer 1.
    #[must_use]
    pub const fn outer_origin(mut self, origin: u32) -> Self {
        self.outer_origin = origin;
        self
    }

    /// Get the begin marker.
    #[must_use]
    pub fn begin(&self) -> &str {
        &self.begin_marker
    }

    /// Get the end marker.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end_marker
    }

    /// Get the header line count.
    #[must_use]
    pub const fn header_line_count(&self) -> usize {
        self.header_lines
    }

    /// Get the initial outer counter.
    #[must_use]
    pub const fn initial_outer(&self) -> u32 {
        self.outer_origin
    }
}
