//! Session billing.
//!
//! This module provides the [`SessionBiller`], which holds the rate and
//! rounding configuration and computes what is due for an overnight session.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, trace, warn};

use crate::config::BillerConfig;
use crate::error::EngineResult;
use crate::models::{RateSchedule, RoundingPolicy, Session, SessionBill, SubInterval};

use super::billable_hours::billable_hours;
use super::segmentation::segment_session;

/// Computes the amount due for overnight sessions.
///
/// A biller holds three hourly rates (before bedtime, bedtime to midnight,
/// after midnight) and the rounding policy used to turn partial hours into
/// whole billable hours. It is a plain value; share it across threads behind
/// a lock, or clone a snapshot, if the configuration is mutated concurrently.
///
/// # Example
///
/// ```
/// use sitter_pay_engine::calculation::SessionBiller;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let biller = SessionBiller::new();
///
/// let due = biller.total_due(
///     parse("2021-01-01 17:00:00"),
///     parse("2021-01-01 22:00:00"),
///     parse("2021-01-02 04:00:00"),
/// );
/// // 5h x 12 + 2h x 8 + 4h x 16
/// assert_eq!(due, Decimal::from(140));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionBiller {
    rates: RateSchedule,
    rounding: RoundingPolicy,
    strategy: RoundingStrategy,
}

impl SessionBiller {
    /// Creates a biller with the default rates (12.00, 8.00, 16.00) and
    /// truncating rounding.
    pub fn new() -> Self {
        Self::from_schedule(RateSchedule::default())
    }

    /// Creates a biller with explicit hourly rates and truncating rounding.
    pub fn with_rates(pre_bed: Decimal, bed_to_midnight: Decimal, post_midnight: Decimal) -> Self {
        Self::from_schedule(RateSchedule::new(pre_bed, bed_to_midnight, post_midnight))
    }

    /// Creates a biller from a rate schedule, with truncating rounding.
    pub fn from_schedule(rates: RateSchedule) -> Self {
        Self {
            rates,
            rounding: RoundingPolicy::Down,
            strategy: RoundingStrategy::ToZero,
        }
    }

    /// Creates a biller from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the configuration names the `exact`
    /// rounding policy.
    pub fn from_config(config: &BillerConfig) -> EngineResult<Self> {
        let mut biller = Self::from_schedule(config.rates);
        biller.set_rounding_policy(config.rounding)?;
        Ok(biller)
    }

    /// Returns the hourly rate charged before bedtime.
    pub fn pre_bed_rate(&self) -> Decimal {
        self.rates.pre_bed
    }

    /// Sets the hourly rate charged before bedtime.
    pub fn set_pre_bed_rate(&mut self, rate: Decimal) {
        self.rates.pre_bed = rate;
    }

    /// Returns the hourly rate charged between bedtime and midnight.
    pub fn bed_to_midnight_rate(&self) -> Decimal {
        self.rates.bed_to_midnight
    }

    /// Sets the hourly rate charged between bedtime and midnight.
    pub fn set_bed_to_midnight_rate(&mut self, rate: Decimal) {
        self.rates.bed_to_midnight = rate;
    }

    /// Returns the hourly rate charged after midnight.
    pub fn post_midnight_rate(&self) -> Decimal {
        self.rates.post_midnight
    }

    /// Sets the hourly rate charged after midnight.
    pub fn set_post_midnight_rate(&mut self, rate: Decimal) {
        self.rates.post_midnight = rate;
    }

    /// Returns all three rates.
    pub fn rate_schedule(&self) -> &RateSchedule {
        &self.rates
    }

    /// Returns the rounding policy applied to partial hours.
    pub fn rounding_policy(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Sets the rounding policy applied to partial hours.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for [`RoundingPolicy::Exact`]; the
    /// current policy is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use sitter_pay_engine::calculation::SessionBiller;
    /// use sitter_pay_engine::models::RoundingPolicy;
    ///
    /// let mut biller = SessionBiller::new();
    /// biller.set_rounding_policy(RoundingPolicy::HalfUp).unwrap();
    ///
    /// assert!(biller.set_rounding_policy(RoundingPolicy::Exact).is_err());
    /// assert_eq!(biller.rounding_policy(), RoundingPolicy::HalfUp);
    /// ```
    pub fn set_rounding_policy(&mut self, policy: RoundingPolicy) -> EngineResult<()> {
        let strategy = policy.strategy().inspect_err(|err| {
            warn!(policy = %policy, error = %err, "Rejected rounding policy");
        })?;
        self.rounding = policy;
        self.strategy = strategy;
        Ok(())
    }

    /// Bills a single span at one rate under the current rounding policy.
    ///
    /// Backwards spans bill as zero. A charge beyond the decimal range
    /// saturates at `Decimal::MAX` (or `Decimal::MIN` for negative rates).
    pub fn sub_total_due(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        rate: Decimal,
    ) -> Decimal {
        rate.saturating_mul(billable_hours(begin, end, self.strategy))
    }

    /// Computes the total due for a session.
    ///
    /// Inputs are not validated. For a session whose `end` is not after its
    /// `start` the result is zero; for other inputs outside the evening
    /// precondition the result is unspecified but never bills a span at a
    /// negative number of hours.
    ///
    /// Never panics: charges and the running total saturate at the decimal
    /// range limits instead of overflowing.
    pub fn total_due(
        &self,
        start: NaiveDateTime,
        bedtime: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Decimal {
        self.itemize(start, bedtime, end).total
    }

    /// Computes the itemized bill for a session given its three timestamps.
    pub fn itemize(
        &self,
        start: NaiveDateTime,
        bedtime: NaiveDateTime,
        end: NaiveDateTime,
    ) -> SessionBill {
        self.bill(&Session::new(start, bedtime, end))
    }

    /// Computes the itemized bill for a session.
    ///
    /// Every span produced by segmentation is charged; spans with no length
    /// are left out of the returned lines since they never carry a charge.
    pub fn bill(&self, session: &Session) -> SessionBill {
        let midnight = session.midnight();

        let (total, sub_intervals) = segment_session(session).into_iter().fold(
            (Decimal::ZERO, Vec::new()),
            |(total, mut lines), span| {
                let rate = self.rates.rate_for(span.band);
                let hours = billable_hours(span.begin, span.end, self.strategy);
                let charge = rate.saturating_mul(hours);

                trace!(
                    begin = %span.begin,
                    end = %span.end,
                    band = %span.band,
                    rate = %rate,
                    hours = %hours,
                    "Billed sub-interval"
                );

                if span.has_length() {
                    lines.push(SubInterval {
                        begin: span.begin,
                        end: span.end,
                        band: span.band,
                        rate,
                        billable_hours: hours,
                        charge,
                    });
                }

                (total.saturating_add(charge), lines)
            },
        );

        debug!(
            start = %session.start,
            bedtime = %session.bedtime,
            end = %session.end,
            midnight = %midnight,
            rounding = %self.rounding,
            total = %total,
            "Computed session bill"
        );

        SessionBill {
            session: *session,
            midnight,
            sub_intervals,
            total,
        }
    }
}

impl Default for SessionBiller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::RateBand;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const TODAY: &str = "2021-01-01";
    const TOMORROW: &str = "2021-01-02";

    // ==========================================================================
    // Configuration surface
    // ==========================================================================
    #[test]
    fn test_default_rates_and_rounding() {
        let biller = SessionBiller::default();
        assert_eq!(biller.pre_bed_rate(), dec("12.00"));
        assert_eq!(biller.bed_to_midnight_rate(), dec("8.00"));
        assert_eq!(biller.post_midnight_rate(), dec("16.00"));
        assert_eq!(biller.rounding_policy(), RoundingPolicy::Down);
    }

    #[test]
    fn test_with_rates() {
        let biller = SessionBiller::with_rates(dec("12.33"), dec("8.50"), dec("15.85"));
        assert_eq!(
            biller.rate_schedule(),
            &RateSchedule::new(dec("12.33"), dec("8.50"), dec("15.85"))
        );
    }

    #[test]
    fn test_rate_setters_accept_any_value() {
        let mut biller = SessionBiller::new();
        biller.set_pre_bed_rate(dec("0"));
        biller.set_bed_to_midnight_rate(dec("-3.25"));
        biller.set_post_midnight_rate(dec("99.99"));

        assert_eq!(biller.pre_bed_rate(), dec("0"));
        assert_eq!(biller.bed_to_midnight_rate(), dec("-3.25"));
        assert_eq!(biller.post_midnight_rate(), dec("99.99"));
    }

    #[test]
    fn test_set_exact_rounding_fails_and_keeps_policy() {
        let mut biller = SessionBiller::new();
        biller.set_rounding_policy(RoundingPolicy::Ceiling).unwrap();

        let result = biller.set_rounding_policy(RoundingPolicy::Exact);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
        assert_eq!(biller.rounding_policy(), RoundingPolicy::Ceiling);
    }

    #[test]
    fn test_every_supported_policy_is_accepted() {
        let mut biller = SessionBiller::new();
        for policy in RoundingPolicy::ALL {
            if policy == RoundingPolicy::Exact {
                continue;
            }
            biller.set_rounding_policy(policy).unwrap();
            assert_eq!(biller.rounding_policy(), policy);
        }
    }

    #[test]
    fn test_biller_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SessionBiller>();
    }

    // ==========================================================================
    // Sub-total
    // ==========================================================================
    #[test]
    fn test_sub_total_due_whole_hours() {
        let biller = SessionBiller::new();
        let begin = make_datetime(TODAY, "17:00:00");
        let end = make_datetime(TODAY, "22:00:00");

        assert_eq!(biller.sub_total_due(begin, end, dec("12.00")), dec("60.00"));
    }

    #[test]
    fn test_sub_total_due_follows_rounding() {
        let mut biller = SessionBiller::new();
        let begin = make_datetime(TODAY, "22:30:00");
        let end = make_datetime(TOMORROW, "00:00:00");

        assert_eq!(biller.sub_total_due(begin, end, dec("8")), dec("8"));
        biller.set_rounding_policy(RoundingPolicy::HalfUp).unwrap();
        assert_eq!(biller.sub_total_due(begin, end, dec("8")), dec("16"));
    }

    #[test]
    fn test_sub_total_due_backwards_is_zero() {
        let biller = SessionBiller::new();
        let begin = make_datetime(TOMORROW, "01:00:00");
        let end = make_datetime(TOMORROW, "00:00:00");

        assert_eq!(biller.sub_total_due(begin, end, dec("16")), Decimal::ZERO);
    }

    // ==========================================================================
    // Itemized bill
    // ==========================================================================
    #[test]
    fn test_itemize_standard_session() {
        let biller = SessionBiller::new();
        let bill = biller.itemize(
            make_datetime(TODAY, "17:00:00"),
            make_datetime(TODAY, "22:00:00"),
            make_datetime(TOMORROW, "04:00:00"),
        );

        assert_eq!(bill.midnight, make_datetime(TOMORROW, "00:00:00"));
        assert_eq!(bill.sub_intervals.len(), 3);

        let pre = &bill.sub_intervals[0];
        assert_eq!(pre.band, RateBand::PreBed);
        assert_eq!(pre.billable_hours, dec("5"));
        assert_eq!(pre.charge, dec("60"));

        let bed = &bill.sub_intervals[1];
        assert_eq!(bed.band, RateBand::BedToMidnight);
        assert_eq!(bed.billable_hours, dec("2"));
        assert_eq!(bed.charge, dec("16"));

        let post = &bill.sub_intervals[2];
        assert_eq!(post.band, RateBand::PostMidnight);
        assert_eq!(post.billable_hours, dec("4"));
        assert_eq!(post.charge, dec("64"));

        assert_eq!(bill.total, dec("140"));
        assert_eq!(bill.billable_hours(), dec("11"));
    }

    #[test]
    fn test_itemize_omits_zero_length_spans() {
        let biller = SessionBiller::new();
        let bill = biller.itemize(
            make_datetime(TODAY, "21:00:00"),
            make_datetime(TODAY, "20:00:00"),
            make_datetime(TOMORROW, "04:00:00"),
        );

        assert_eq!(bill.sub_intervals.len(), 2);
        assert!(bill.lines_for(RateBand::PreBed).next().is_none());
        assert_eq!(bill.total, dec("88"));
    }

    #[test]
    fn test_total_matches_sum_of_lines() {
        let mut biller = SessionBiller::new();
        biller.set_rounding_policy(RoundingPolicy::HalfUp).unwrap();
        let bill = biller.itemize(
            make_datetime(TODAY, "17:20:00"),
            make_datetime(TODAY, "22:30:00"),
            make_datetime(TOMORROW, "03:45:00"),
        );

        let sum: Decimal = bill.sub_intervals.iter().map(|s| s.charge).sum();
        assert_eq!(bill.total, sum);
        assert_eq!(bill.total, dec("140"));
    }

    #[test]
    fn test_reversed_session_bills_nothing() {
        let biller = SessionBiller::new();
        let due = biller.total_due(
            make_datetime(TOMORROW, "04:00:00"),
            make_datetime(TODAY, "22:00:00"),
            make_datetime(TODAY, "17:00:00"),
        );
        assert_eq!(due, Decimal::ZERO);
    }

    #[test]
    fn test_huge_rate_saturates_instead_of_panicking() {
        let biller = SessionBiller::with_rates(Decimal::MAX, dec("8"), dec("16"));
        let due = biller.total_due(
            make_datetime(TODAY, "17:00:00"),
            make_datetime(TODAY, "22:00:00"),
            make_datetime(TOMORROW, "04:00:00"),
        );
        assert_eq!(due, Decimal::MAX);

        let sub_total = biller.sub_total_due(
            make_datetime(TODAY, "17:00:00"),
            make_datetime(TODAY, "22:00:00"),
            Decimal::MIN,
        );
        assert_eq!(sub_total, Decimal::MIN);
    }

    #[test]
    fn test_bill_matches_total_due() {
        let biller = SessionBiller::new();
        let session = Session::new(
            make_datetime(TODAY, "18:00:00"),
            make_datetime(TODAY, "21:00:00"),
            make_datetime(TOMORROW, "02:00:00"),
        );

        assert_eq!(
            biller.bill(&session).total,
            biller.total_due(session.start, session.bedtime, session.end)
        );
    }
}
