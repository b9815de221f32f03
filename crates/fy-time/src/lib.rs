//! # fy-time
//!
//! Financial-year date arithmetic: year kinds, period and business-week
//! bounds, and date containment queries.
//!
//! A financial year starts on an arbitrary date and is divided either into
//! 12 calendar-month periods (*calendar* kind) or into 13 four-week periods
//! over 52/53 seven-day business weeks (*business* kind).  [`FinancialYear`]
//! derives every boundary from the start date alone and answers lookups such
//! as "which period does this date fall in?".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Date arguments accepted by constructors and queries.
pub mod date_input;

/// Financial-year layout (calendar / business).
pub mod kind;

/// Inclusive date ranges.
pub mod span;

/// The `FinancialYear` calculator.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date_input::DateInput;
pub use kind::YearKind;
pub use span::DateSpan;
pub use year::FinancialYear;
