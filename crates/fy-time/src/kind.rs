//! `YearKind` — the two supported financial-year layouts.

use std::str::FromStr;

use fy_core::errors::{Error, Result};

/// The layout of a financial year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum YearKind {
    /// Twelve calendar-month periods.
    Calendar,
    /// Thirteen four-week periods over 52 or 53 business weeks.
    Business,
}

impl YearKind {
    /// Number of periods the year divides into: 12 for calendar, 13 for
    /// business.
    pub fn periods(self) -> u32 {
        match self {
            YearKind::Calendar => 12,
            YearKind::Business => 13,
        }
    }

    /// Return `true` for the business layout.
    pub fn is_business(self) -> bool {
        matches!(self, YearKind::Business)
    }
}

impl FromStr for YearKind {
    type Err = Error;

    /// Parse `"calendar"` or `"business"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "calendar" => Ok(YearKind::Calendar),
            "business" => Ok(YearKind::Business),
            _ => Err(Error::Config("Invalid Financial Year Type.".into())),
        }
    }
}

impl std::fmt::Display for YearKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearKind::Calendar => write!(f, "calendar"),
            YearKind::Business => write!(f, "business"),
        }
    }
}
