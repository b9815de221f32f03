//! `FinancialYear` — the financial-year calculator.
//!
//! A financial year is anchored at an arbitrary start date and divided
//! either into 12 calendar-month periods (calendar kind) or into 13
//! four-week periods over 52/53 seven-day business weeks (business kind).
//! The end date and every period/week boundary derive from the start date
//! alone.  Instances are immutable: "changing" the start date or the week
//! count returns a new, re-validated instance, so the end date can never go
//! stale.

use chrono::{Datelike, Days, Months, NaiveDate};
use fy_core::errors::{Error, Result};
use fy_core::{ensure, fail};

use crate::date_input::DateInput;
use crate::kind::YearKind;
use crate::span::DateSpan;

/// Start dates whose day-of-month does not exist in every month are
/// rejected for calendar years, keeping monthly boundaries well-defined.
const MAX_CALENDAR_START_DAY: u32 = 28;

/// A single financial year: start date, derived end date, and the period /
/// business-week structure implied by its [`YearKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FinancialYear {
    kind: YearKind,
    start: NaiveDate,
    end: NaiveDate,
    /// `Some(52 | 53)` for business years, `None` for calendar years.
    weeks: Option<u32>,
}

impl FinancialYear {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Create a financial year of the given kind.
    ///
    /// `start` is a [`NaiveDate`], a [`chrono::NaiveDateTime`] (normalized
    /// to midnight), or an ISO-8601 `YYYY-MM-DD` string.
    /// `fifty_three_weeks` selects a 53-week business year; it is ignored
    /// for calendar years.
    ///
    /// # Errors
    /// * [`Error::Format`] for a malformed date string.
    /// * [`Error::Config`] for a calendar year starting on day 29, 30, or 31
    ///   of a month.
    pub fn new(kind: YearKind, start: impl DateInput, fifty_three_weeks: bool) -> Result<Self> {
        let start = start.into_date()?;
        let (weeks, next_start) = match kind {
            YearKind::Calendar => {
                ensure!(
                    start.day() <= MAX_CALENDAR_START_DAY,
                    Error::Config(
                        "This library does not support 29, 30, 31 as start dates of a month \
                         for calendar type financial year."
                            .into()
                    )
                );
                (None, start + Months::new(12))
            }
            YearKind::Business => {
                let weeks: u32 = if fifty_three_weeks { 53 } else { 52 };
                (Some(weeks), start + Days::new(u64::from(weeks) * 7))
            }
        };
        Ok(Self {
            kind,
            start,
            end: next_start - Days::new(1),
            weeks,
        })
    }

    /// Create a calendar-kind year (twelve monthly periods).
    pub fn calendar(start: impl DateInput) -> Result<Self> {
        Self::new(YearKind::Calendar, start, false)
    }

    /// Create a business-kind year (thirteen four-week periods).
    pub fn business(start: impl DateInput, fifty_three_weeks: bool) -> Result<Self> {
        Self::new(YearKind::Business, start, fifty_three_weeks)
    }

    /// Return a copy of this year anchored at a new start date, with the end
    /// date recomputed.
    pub fn with_start_date(&self, start: impl DateInput) -> Result<Self> {
        Self::new(self.kind, start.into_date()?, self.weeks == Some(53))
    }

    /// Return a copy of this business year with the 52/53-week flag changed
    /// and the end date recomputed.
    ///
    /// # Errors
    /// [`Error::Config`] for calendar years, which have no week structure.
    pub fn with_weeks(&self, fifty_three_weeks: bool) -> Result<Self> {
        if !self.kind.is_business() {
            fail!("Can not set the financial year weeks property for non business year type.");
        }
        Self::new(self.kind, self.start, fifty_three_weeks)
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The year's layout.
    pub fn kind(&self) -> YearKind {
        self.kind
    }

    /// First date of the financial year.
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the financial year (inclusive).
    ///
    /// Calendar years end 12 months minus one day after the start; business
    /// years end 52 or 53 weeks minus one day after the start.
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Number of periods: 12 for calendar years, 13 for business years.
    pub fn periods(&self) -> u32 {
        self.kind.periods()
    }

    /// Number of business weeks (52 or 53), or `None` for calendar years.
    pub fn weeks(&self) -> Option<u32> {
        self.weeks
    }

    /// Start date of the following financial year.  Always equals
    /// `end_date() + 1 day`.
    pub fn next_start_date(&self) -> NaiveDate {
        self.end + Days::new(1)
    }

    // ── Period queries ───────────────────────────────────────────────────────

    /// Bounds of period `id` (1-based).
    ///
    /// Calendar periods are whole months; business periods are four weeks,
    /// except the last one which runs to the end of the year (four or five
    /// weeks depending on the week count).
    ///
    /// # Errors
    /// [`Error::NoSuchPeriod`] if `id` is outside `1..=periods()`.
    pub fn period(&self, id: u32) -> Result<DateSpan> {
        ensure!((1..=self.periods()).contains(&id), Error::NoSuchPeriod(id));
        let end = if id == self.periods() {
            self.end
        } else {
            self.period_start(id + 1) - Days::new(1)
        };
        Ok(DateSpan::new(self.period_start(id), end))
    }

    /// First date of period `id`.  Period 1 starts exactly on the year's
    /// start date.
    pub fn first_date_of_period(&self, id: u32) -> Result<NaiveDate> {
        Ok(self.period(id)?.start())
    }

    /// Last date of period `id`.  The last period ends exactly on the year's
    /// end date.
    pub fn last_date_of_period(&self, id: u32) -> Result<NaiveDate> {
        Ok(self.period(id)?.end())
    }

    /// Period containing `date`.
    ///
    /// # Errors
    /// [`Error::DateOutOfRange`] if `date` does not belong to this year.
    pub fn period_id_for(&self, date: impl DateInput) -> Result<u32> {
        let date = date.into_date()?;
        self.validate_in_year(date)?;
        // Linear scan; at most 13 periods.
        for id in 1..self.periods() {
            if self.period(id)?.contains(date) {
                return Ok(id);
            }
        }
        // The periods partition the year, so anything else is in the last.
        Ok(self.periods())
    }

    // ── Business-week queries ────────────────────────────────────────────────

    /// Bounds of business week `id` (1-based).
    ///
    /// Every week spans seven days; the last week of the year ends exactly
    /// on the year's end date.
    ///
    /// # Errors
    /// * [`Error::Config`] for calendar years.
    /// * [`Error::NoSuchWeek`] if `id` is outside `1..=weeks`.
    pub fn business_week(&self, id: u32) -> Result<DateSpan> {
        let weeks = self.require_business()?;
        ensure!((1..=weeks).contains(&id), Error::NoSuchWeek(id));
        let start = self.start + Days::new(u64::from(id - 1) * 7);
        let end = if id == weeks {
            self.end
        } else {
            start + Days::new(6)
        };
        Ok(DateSpan::new(start, end))
    }

    /// First date of business week `id`.
    pub fn first_date_of_business_week(&self, id: u32) -> Result<NaiveDate> {
        Ok(self.business_week(id)?.start())
    }

    /// Last date of business week `id`.
    pub fn last_date_of_business_week(&self, id: u32) -> Result<NaiveDate> {
        Ok(self.business_week(id)?.end())
    }

    /// Bounds of the `n`-th (1–4) business week of period `period_id`.
    ///
    /// Business period `p` is made up of weeks `(p−1)·4 + 1` through `p·4`.
    ///
    /// # Errors
    /// * [`Error::Config`] for calendar years or `n` outside `1..=4`.
    /// * [`Error::NoSuchPeriod`] if `period_id` is outside `1..=13`.
    pub fn business_week_of_period(&self, period_id: u32, n: u32) -> Result<DateSpan> {
        self.require_business()?;
        ensure!(
            (1..=self.periods()).contains(&period_id),
            Error::NoSuchPeriod(period_id)
        );
        if !(1..=4).contains(&n) {
            fail!("A business period has 4 weeks. Requested week number: {n}.");
        }
        self.business_week((period_id - 1) * 4 + n)
    }

    /// Bounds of the 53rd business week.
    ///
    /// # Errors
    /// * [`Error::Config`] for calendar years.
    /// * [`Error::NoSuchWeek`] for a 52-week year.
    pub fn fifty_third_business_week(&self) -> Result<DateSpan> {
        self.business_week(53)
    }

    /// Business week containing `date`.
    ///
    /// # Errors
    /// * [`Error::Config`] for calendar years.
    /// * [`Error::DateOutOfRange`] if `date` does not belong to this year.
    pub fn business_week_id_for(&self, date: impl DateInput) -> Result<u32> {
        let weeks = self.require_business()?;
        let date = date.into_date()?;
        self.validate_in_year(date)?;
        for id in 1..weeks {
            if self.business_week(id)?.contains(date) {
                return Ok(id);
            }
        }
        Ok(weeks)
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn period_start(&self, id: u32) -> NaiveDate {
        match self.kind {
            YearKind::Calendar => self.start + Months::new(id - 1),
            YearKind::Business => self.start + Days::new(u64::from(id - 1) * 28),
        }
    }

    fn require_business(&self) -> Result<u32> {
        match self.weeks {
            Some(weeks) => Ok(weeks),
            None => Err(Error::Config(
                "Business weeks are set only for a business type financial year.".into(),
            )),
        }
    }

    fn validate_in_year(&self, date: NaiveDate) -> Result<()> {
        ensure!(
            self.start <= date && date <= self.end,
            Error::DateOutOfRange(date)
        );
        Ok(())
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} financial year [{}, {}]", self.kind, self.start, self.end)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
