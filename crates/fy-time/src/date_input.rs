//! Date arguments: native `chrono` values or ISO-8601 `YYYY-MM-DD` strings.

use chrono::{NaiveDate, NaiveDateTime};
use fy_core::errors::{Error, Result};

/// A date argument to [`FinancialYear`](crate::FinancialYear) constructors
/// and queries.
///
/// Implemented for [`NaiveDate`], [`NaiveDateTime`] (time-of-day is
/// discarded, normalizing to midnight), and string types holding an ISO-8601
/// `YYYY-MM-DD` date.
pub trait DateInput {
    /// Resolve to a plain calendar date.
    ///
    /// # Errors
    /// [`Error::Format`] if a string argument is not a valid `YYYY-MM-DD`
    /// date.
    fn into_date(self) -> Result<NaiveDate>;
}

impl DateInput for NaiveDate {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(self)
    }
}

impl DateInput for NaiveDateTime {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(self.date())
    }
}

impl DateInput for &str {
    fn into_date(self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(self, "%Y-%m-%d").map_err(|_| Error::Format(self.to_owned()))
    }
}

impl DateInput for String {
    fn into_date(self) -> Result<NaiveDate> {
        self.as_str().into_date()
    }
}

impl DateInput for &String {
    fn into_date(self) -> Result<NaiveDate> {
        self.as_str().into_date()
    }
}
