//! Two-valued acquisition phase selector.

use crate::error::ProcessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which transform to apply. Supplied once per request; no other value is
/// valid. Case normalization, if any, is the caller's concern — parsing
/// compares the exact lowercase literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Arterial,
    Venous,
}

impl Phase {
    /// The literal string form used on the wire and in configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Arterial => "arterial",
            Phase::Venous => "venous",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arterial" => Ok(Phase::Arterial),
            "venous" => Ok(Phase::Venous),
            other => Err(ProcessError::InvalidPhase(other.to_string())),
        }
    }
}
