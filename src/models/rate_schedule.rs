//! Rate schedule model and related types.
//!
//! This module defines the [`RateSchedule`] holding the three hourly rates of
//! an overnight session, and the [`RateBand`] naming which of them applies.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the portion of the night a sub-interval falls into.
///
/// # Example
///
/// ```
/// use sitter_pay_engine::models::RateBand;
///
/// let band = RateBand::PostMidnight;
/// assert_eq!(band.to_string(), "post-midnight");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    /// From the session start until bedtime.
    PreBed,
    /// From bedtime until midnight.
    BedToMidnight,
    /// From midnight until the session end.
    PostMidnight,
}

impl RateBand {
    /// Determines the band for a position in the session.
    ///
    /// A position equal to `bedtime` is already past bedtime, and a position
    /// equal to `midnight` is already past midnight, so each boundary belongs
    /// to the band that follows it.
    ///
    /// # Example
    ///
    /// ```
    /// use sitter_pay_engine::models::RateBand;
    /// use chrono::NaiveDateTime;
    ///
    /// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let bedtime = parse("2021-01-01 22:00:00");
    /// let midnight = parse("2021-01-02 00:00:00");
    ///
    /// assert_eq!(RateBand::at(parse("2021-01-01 17:00:00"), bedtime, midnight), RateBand::PreBed);
    /// assert_eq!(RateBand::at(bedtime, bedtime, midnight), RateBand::BedToMidnight);
    /// assert_eq!(RateBand::at(midnight, bedtime, midnight), RateBand::PostMidnight);
    /// ```
    pub fn at(position: NaiveDateTime, bedtime: NaiveDateTime, midnight: NaiveDateTime) -> Self {
        if position >= midnight {
            RateBand::PostMidnight
        } else if position >= bedtime {
            RateBand::BedToMidnight
        } else {
            RateBand::PreBed
        }
    }
}

impl std::fmt::Display for RateBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateBand::PreBed => write!(f, "pre-bed"),
            RateBand::BedToMidnight => write!(f, "bed-to-midnight"),
            RateBand::PostMidnight => write!(f, "post-midnight"),
        }
    }
}

/// The three hourly rates charged over an overnight session.
///
/// Rates are not validated; zero and negative values are accepted.
///
/// # Example
///
/// ```
/// use sitter_pay_engine::models::{RateBand, RateSchedule};
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::default();
/// assert_eq!(schedule.rate_for(RateBand::PreBed), Decimal::new(1200, 2));
/// assert_eq!(schedule.rate_for(RateBand::BedToMidnight), Decimal::new(800, 2));
/// assert_eq!(schedule.rate_for(RateBand::PostMidnight), Decimal::new(1600, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// The hourly rate charged before bedtime.
    pub pre_bed: Decimal,
    /// The hourly rate charged after bedtime but before midnight.
    pub bed_to_midnight: Decimal,
    /// The hourly rate charged after midnight.
    pub post_midnight: Decimal,
}

impl RateSchedule {
    /// Creates a schedule from three hourly rates.
    pub fn new(pre_bed: Decimal, bed_to_midnight: Decimal, post_midnight: Decimal) -> Self {
        Self {
            pre_bed,
            bed_to_midnight,
            post_midnight,
        }
    }

    /// Returns the hourly rate for a band.
    pub fn rate_for(&self, band: RateBand) -> Decimal {
        match band {
            RateBand::PreBed => self.pre_bed,
            RateBand::BedToMidnight => self.bed_to_midnight,
            RateBand::PostMidnight => self.post_midnight,
        }
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            pre_bed: Decimal::new(1200, 2),
            bed_to_midnight: Decimal::new(800, 2),
            post_midnight: Decimal::new(1600, 2),
        }
    }
}
