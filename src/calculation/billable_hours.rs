//! Billable hour conversion.
//!
//! Caregivers are paid for whole hours only. This module turns the elapsed
//! time of a span into a whole number of billable hours using the configured
//! rounding strategy.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts the span from `begin` to `end` into whole billable hours.
///
/// The elapsed time is split into whole hours and leftover minutes (both
/// truncated toward zero, seconds are ignored), combined into a fractional
/// hour value and rounded to zero decimal places with `strategy`. Spans that
/// run backwards would produce a negative count and are billed as zero hours.
///
/// # Example
///
/// ```
/// use sitter_pay_engine::calculation::billable_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::{Decimal, RoundingStrategy};
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let begin = parse("2021-01-01 22:30:00");
/// let end = parse("2021-01-02 00:00:00");
///
/// assert_eq!(billable_hours(begin, end, RoundingStrategy::ToZero), Decimal::from(1));
/// assert_eq!(billable_hours(begin, end, RoundingStrategy::MidpointAwayFromZero), Decimal::from(2));
/// assert_eq!(billable_hours(end, begin, RoundingStrategy::ToZero), Decimal::ZERO);
/// ```
pub fn billable_hours(
    begin: NaiveDateTime,
    end: NaiveDateTime,
    strategy: RoundingStrategy,
) -> Decimal {
    let fractional = fractional_hours(begin, end);
    let rounded = fractional.round_dp_with_strategy(0, strategy);
    rounded.max(Decimal::ZERO)
}

/// Returns the elapsed hours between two datetimes at minute precision.
///
/// May be negative when `end` is before `begin`.
pub fn fractional_hours(begin: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let elapsed = end - begin;
    let whole_hours = elapsed.num_hours();
    let leftover_minutes = elapsed.num_minutes() - whole_hours * 60;

    Decimal::from(whole_hours) + Decimal::from(leftover_minutes) / Decimal::from(60)
}
