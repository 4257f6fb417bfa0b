//! Inner-solve residual trace parser
//!
//! The narrative part of a MOCEX log carries no indices. The outer iteration is
//! the number of CMFD lines seen so far (plus the configured origin) and the
//! group is the number of `Group` headers seen inside the target outer
//! iteration. Both counters only move forward, so every scan starts at the top
//! of the solve block.

use std::io::BufRead;

use tracing::{debug, trace};

use super::{LogParser, SolveBlock};
use crate::config::ParserConfig;
use crate::error::FormatError;
use crate::{Error, Result};

const OUTER_BOUNDARY: &str = "CMFD";
const GROUP_HEADER: &str = "Group";
const RHS_NORM: &str = "Right Hand Side Norm";
const RESIDUAL: &str = "residual";
const CONVERGENCE: &str = "convergence";

/// The (outer, group) pair whose residual trace is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidualTarget {
    /// Outer iteration index
    pub outer: u32,
    /// Energy group index (1-based, as printed in `Group` headers)
    pub group: u32,
}

impl ResidualTarget {
    /// Create a target.
    #[must_use]
    pub const fn new(outer: u32, group: u32) -> Self {
        Self { outer, group }
    }
}

/// What a single line meant to the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanStep {
    /// Keep reading
    Continue,
    /// A normalized residual sample for the target pair
    Sample(f64),
    /// The target group's inner solve converged
    Converged,
}

/// Running counters of a residual scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanState {
    current_outer: u32,
    current_group: u32,
    rhs_norm: Option<f64>,
}

impl ScanState {
    /// Start a scan with the outer counter at `outer_origin`.
    #[must_use]
    pub const fn new(outer_origin: u32) -> Self {
        Self {
            current_outer: outer_origin,
            current_group: 0,
            rhs_norm: None,
        }
    }

    /// Outer iteration the scan is in.
    #[must_use]
    pub const fn current_outer(&self) -> u32 {
        self.current_outer
    }

    /// Group headers seen inside the target outer iteration.
    #[must_use]
    pub const fn current_group(&self) -> u32 {
        self.current_group
    }

    /// Right hand side norm of the target group, once printed.
    #[must_use]
    pub const fn rhs_norm(&self) -> Option<f64> {
        self.rhs_norm
    }

    /// Feed one solve-block line.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] on a `Group` header whose index disagrees
    /// with the counter, a residual before any right hand side norm or after a
    /// norm that is not positive, or a trailing token that is not a number.
    pub fn advance(&mut self, line_no: usize, line: &str, target: ResidualTarget) -> Result<ScanStep> {
        if line.contains(OUTER_BOUNDARY) {
            self.current_outer = self.current_outer.saturating_add(1);
            trace!(line = line_no, outer = self.current_outer, "outer boundary");
            return Ok(ScanStep::Continue);
        }

        if self.current_outer != target.outer {
            return Ok(ScanStep::Continue);
        }

        if line.contains(GROUP_HEADER) {
            self.current_group = self.current_group.saturating_add(1);
            let found: u32 = trailing(line_no, line, "group index")?;
            if found != self.current_group {
                return Err(FormatError::GroupMismatch {
                    line: line_no,
                    expected: self.current_group,
                    found,
                }
                .into());
            }
            trace!(line = line_no, group = found, "group header");
            return Ok(ScanStep::Continue);
        }

        if self.current_group != target.group {
            return Ok(ScanStep::Continue);
        }

        if line.contains(RHS_NORM) {
            self.rhs_norm = Some(trailing(line_no, line, RHS_NORM)?);
        } else if line.contains(RESIDUAL) {
            let raw: f64 = trailing(line_no, line, RESIDUAL)?;
            let norm = self
                .rhs_norm
                .ok_or(FormatError::MissingRhsNorm { line: line_no })?;
            if norm.is_nan() || norm <= 0.0 {
                return Err(FormatError::NonPositiveRhsNorm { line: line_no, norm }.into());
            }
            return Ok(ScanStep::Sample(raw / norm));
        } else if line.contains(CONVERGENCE) {
            return Ok(ScanStep::Converged);
        }

        Ok(ScanStep::Continue)
    }
}

/// Parse the last whitespace-separated token of `line`.
fn trailing<T: std::str::FromStr>(line_no: usize, line: &str, name: &str) -> Result<T> {
    let raw = line.split_whitespace().next_back().unwrap_or_default();
    raw.parse().map_err(|_| {
        Error::from(FormatError::InvalidValue {
            line: line_no,
            name: name.to_string(),
            value: raw.to_string(),
        })
    })
}

/// Parser for the normalized residual trace of one (outer, group) pair.
#[derive(Debug, Clone)]
pub struct ResidualLogParser {
    config: ParserConfig,
    target: ResidualTarget,
}

impl ResidualLogParser {
    /// Create a parser for the default MOCEX layout.
    #[must_use]
    pub fn new(outer: u32, group: u32) -> Self {
        Self::with_config(ResidualTarget::new(outer, group), ParserConfig::default())
    }

    /// Create a parser with custom markers or outer origin.
    #[must_use]
    pub const fn with_config(target: ResidualTarget, config: ParserConfig) -> Self {
        Self { config, target }
    }

    /// Get the targeted pair.
    #[must_use]
    pub const fn target(&self) -> ResidualTarget {
        self.target
    }

    /// Get the parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl LogParser for ResidualLogParser {
    type Output = Vec<f64>;

    fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<f64>> {
        let mut state = ScanState::new(self.config.initial_outer());
        let mut residuals = Vec::new();

        for line in SolveBlock::open(reader, &self.config)? {
            let line = line?;
            match state.advance(line.number, &line.text, self.target)? {
                ScanStep::Continue => {}
                ScanStep::Sample(value) => residuals.push(value),
                ScanStep::Converged => {
                    debug!(line = line.number, "target group converged");
                    break;
                }
            }
        }

        debug!(
            outer = self.target.outer,
            group = self.target.group,
            samples = residuals.len(),
            "parsed residual trace"
        );
        Ok(residuals)
    }
}
