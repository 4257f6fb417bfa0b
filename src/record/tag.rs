//! Solver subsystem tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Subsystem that wrote a log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverTag {
    /// Transport sweep (MOCEX and LEGACY rows)
    #[serde(rename = "MOC")]
    Moc,
    /// Diffusion acceleration
    #[serde(rename = "CMFD")]
    Cmfd,
}

impl SolverTag {
    /// All tags in declaration order.
    pub const ALL: [Self; 2] = [Self::Moc, Self::Cmfd];

    /// Classify the first `|`-separated field of a data row.
    ///
    /// Returns `None` for chatter that belongs to neither subsystem.
    #[must_use]
    pub fn classify(first_field: &str) -> Option<Self> {
        if first_field.contains("MOCEX") || first_field.contains("LEGACY") {
            Some(Self::Moc)
        } else if first_field.contains("CMFD") {
            Some(Self::Cmfd)
        } else {
            None
        }
    }

    /// Display name used in logs and queries.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Moc => "MOC",
            Self::Cmfd => "CMFD",
        }
    }
}

impl fmt::Display for SolverTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MOC" => Ok(Self::Moc),
            "CMFD" => Ok(Self::Cmfd),
            other => Err(Error::UnknownTag(other.to_string())),
        }
    }
}
