//! Error types for the financial-year crates.
//!
//! Two failure families cover the whole library: configuration errors
//! (invalid year type, disallowed start date, business-only operation on a
//! calendar year) and range errors (unknown period/week id, date outside the
//! year, malformed date string).  Callers match on the variants; the
//! `Display` text is stable and asserted on by the test suite.

use chrono::NaiveDate;
use thiserror::Error;

/// The top-level error type used throughout the financial-year crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid financial-year configuration: unknown year type, a disallowed
    /// start date, or a business-only operation on a calendar year.
    #[error("{0}")]
    Config(String),

    /// A period id outside `1..=periods`.
    #[error("There is no period with id: {0}.")]
    NoSuchPeriod(u32),

    /// A business-week id outside `1..=weeks`.
    #[error("There is no week with id: {0}.")]
    NoSuchWeek(u32),

    /// A queried date that does not belong to the financial year.
    #[error("The requested date {0} is out of range of the current financial year.")]
    DateOutOfRange(NaiveDate),

    /// A date string that does not parse as ISO-8601 `YYYY-MM-DD`.
    #[error("Invalid date string '{0}'. Not a valid ISO-8601 (YYYY-MM-DD) date.")]
    Format(String),
}

/// Shorthand `Result` type used throughout the financial-year crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error if a condition does not hold.
///
/// # Example
/// ```
/// use fy_core::{ensure, errors::{Error, Result}};
/// fn period_id(id: u32) -> Result<u32> {
///     ensure!((1..=12).contains(&id), Error::NoSuchPeriod(id));
///     Ok(id)
/// }
/// assert!(period_id(3).is_ok());
/// assert!(period_id(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return early with a configuration error built from a format string.
///
/// # Example
/// ```
/// use fy_core::{fail, errors::Result};
/// fn unsupported() -> Result<()> {
///     fail!("Invalid Financial Year Type.");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Config(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_is_stable() {
        assert_eq!(
            Error::NoSuchPeriod(14).to_string(),
            "There is no period with id: 14."
        );
        assert_eq!(
            Error::NoSuchWeek(54).to_string(),
            "There is no week with id: 54."
        );
        let d = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
        assert_eq!(
            Error::DateOutOfRange(d).to_string(),
            "The requested date 2018-12-31 is out of range of the current financial year."
        );
        assert_eq!(
            Error::Format("31-01-2019".into()).to_string(),
            "Invalid date string '31-01-2019'. Not a valid ISO-8601 (YYYY-MM-DD) date."
        );
        assert_eq!(
            Error::Config("Invalid Financial Year Type.".into()).to_string(),
            "Invalid Financial Year Type."
        );
    }
}
