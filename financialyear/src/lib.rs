//! # financialyear
//!
//! Date arithmetic for financial years: a year starting on any date,
//! divided either into 12 calendar-month periods or into 13 four-week
//! periods over 52/53 seven-day business weeks.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than on `fy-core` / `fy-time` directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! financialyear = "0.1"
//! ```
//!
//! ```rust
//! use financialyear::FinancialYear;
//!
//! let fy = FinancialYear::calendar("2019-01-01")?;
//! let second = fy.period(2)?;
//! assert_eq!(second.start().to_string(), "2019-02-01");
//! assert_eq!(second.end().to_string(), "2019-02-28");
//! assert_eq!(fy.period_id_for("2019-02-07")?, 2);
//!
//! let fy = FinancialYear::business("2019-01-01", true)?;
//! assert_eq!(fy.weeks(), Some(53));
//! assert_eq!(fy.end_date().to_string(), "2020-01-06");
//! # Ok::<(), financialyear::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use fy_core as core;

/// Financial-year date arithmetic.
pub use fy_time as time;

pub use fy_core::{Error, Result};
pub use fy_time::{DateInput, DateSpan, FinancialYear, YearKind};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn kind_parses_from_configuration_strings() {
        let kind: YearKind = "business".parse().unwrap();
        let fy = FinancialYear::new(kind, "2019-01-01", false).unwrap();
        assert_eq!(fy.end_date(), date(2019, 12, 30));
    }

    #[test]
    fn period_days_can_be_iterated() {
        let fy = FinancialYear::business(date(2019, 1, 1), false).unwrap();
        let week: Vec<_> = fy.business_week(1).unwrap().iter_days().collect();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2019, 1, 1));
        assert_eq!(week[6], date(2019, 1, 7));
    }
}
