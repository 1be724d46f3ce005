//! Billing result models.
//!
//! This module contains the [`SessionBill`] type and the [`SubInterval`] lines
//! it is made of.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RateBand, Session};

/// A contiguous span of a session billed at a single rate.
///
/// # Example
///
/// ```
/// use sitter_pay_engine::models::{RateBand, SubInterval};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let line = SubInterval {
///     begin: NaiveDateTime::parse_from_str("2021-01-01 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2021-01-02 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     band: RateBand::BedToMidnight,
///     rate: Decimal::new(800, 2),
///     billable_hours: Decimal::from(2),
///     charge: Decimal::new(1600, 2),
/// };
/// assert_eq!(line.rate * line.billable_hours, line.charge);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubInterval {
    /// Where the span begins.
    pub begin: NaiveDateTime,
    /// Where the span ends.
    pub end: NaiveDateTime,
    /// The portion of the night the span is billed as.
    pub band: RateBand,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// Whole hours billed after rounding.
    pub billable_hours: Decimal,
    /// The amount for this span (rate * billable_hours).
    pub charge: Decimal,
}

/// The itemized bill for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBill {
    /// The session that was billed.
    pub session: Session,
    /// The midnight boundary derived for the session.
    pub midnight: NaiveDateTime,
    /// The billed spans, in chronological order. Zero-length spans are omitted.
    pub sub_intervals: Vec<SubInterval>,
    /// The total amount due.
    pub total: Decimal,
}

impl SessionBill {
    /// Returns the total billable hours across all spans.
    pub fn billable_hours(&self) -> Decimal {
        self.sub_intervals.iter().map(|s| s.billable_hours).sum()
    }

    /// Returns the billed spans falling into a given band.
    pub fn lines_for(&self, band: RateBand) -> impl Iterator<Item = &SubInterval> {
        self.sub_intervals.iter().filter(move |s| s.band == band)
    }
}
