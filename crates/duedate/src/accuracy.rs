//! The accuracy ladder.
//!
//! Every [`Date`](crate::Date) sits on exactly one rung. The ordering of the
//! rungs is only used to pick a common representation for two operands; it is
//! not a numeric scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Precision of a date's underlying representation, from least to most accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    /// A symbolic value such as `soon` with no calendar instant behind it.
    Fuzzy,
    /// A calendar day.
    Date,
    /// A naive date and time of day, sub-second precision.
    DateTime,
    /// A date and time of day carrying the local UTC offset.
    Timezone,
}

impl Accuracy {
    /// Concrete accuracies in the order used to settle on a shared representation.
    ///
    /// The least precise accuracy present between two operands wins, so a day
    /// is never given a time of day it did not have.
    pub const CONCRETE: [Accuracy; 3] = [Accuracy::Date, Accuracy::DateTime, Accuracy::Timezone];

    pub fn as_str(self) -> &'static str {
        match self {
            Accuracy::Fuzzy => "fuzzy",
            Accuracy::Date => "date",
            Accuracy::DateTime => "datetime",
            Accuracy::Timezone => "timezone",
        }
    }

    pub fn is_concrete(self) -> bool {
        !matches!(self, Accuracy::Fuzzy)
    }

    /// The accuracy both operands should be cast to before comparing them.
    pub fn common(a: Accuracy, b: Accuracy) -> Accuracy {
        Accuracy::CONCRETE
            .into_iter()
            .find(|acc| *acc == a || *acc == b)
            .unwrap_or(Accuracy::Fuzzy)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Accuracy {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fuzzy" => Ok(Accuracy::Fuzzy),
            "date" => Ok(Accuracy::Date),
            "datetime" => Ok(Accuracy::DateTime),
            "timezone" => Ok(Accuracy::Timezone),
            other => Err(DateError::InvalidDate(format!("unknown accuracy '{other}'"))),
        }
    }
}
