//! Event record and recurrence kinds.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often an event repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// A token we did not recognize, kept verbatim as read.
    /// The expander treats these events as one-off.
    Other(String),
}

impl Recurrence {
    /// Map a lowercased tag token to a recurrence kind.
    /// An empty token means the event does not repeat.
    pub fn from_token(token: &str) -> Option<Recurrence> {
        match token {
            "" => None,
            "daily" => Some(Recurrence::Daily),
            "weekly" => Some(Recurrence::Weekly),
            "monthly" => Some(Recurrence::Monthly),
            "yearly" => Some(Recurrence::Yearly),
            other => Some(Recurrence::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Yearly => "yearly",
            Recurrence::Other(token) => token,
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A calendar event.
///
/// Doubles as a stored record, where `date` is the anchor (first) occurrence
/// of a recurring event, and as one concrete occurrence produced by expanding
/// such a record against a date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    /// May contain embedded line breaks; stored escaped on disk.
    pub description: String,
    /// Where the record came from, e.g. "global/holidays".
    pub source: String,
    pub recurring: Option<Recurrence>,
    /// Last possible occurrence (inclusive); only meaningful when recurring.
    pub end_date: Option<NaiveDate>,
}
