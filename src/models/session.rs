//! Session model.
//!
//! This module defines the [`Session`] struct for representing a single
//! overnight engagement bounded by a start and end time.

use chrono::{Days, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One overnight work session.
///
/// The billing algorithm assumes, without checking, that `start` is in the
/// evening (at or after 17:00), that `end` is no later than 04:00 on the
/// following day, and that `start` is before `end`. `bedtime` may fall
/// anywhere, including before `start` or after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// When the session started.
    pub start: NaiveDateTime,
    /// When the child went to bed.
    pub bedtime: NaiveDateTime,
    /// When the session ended.
    pub end: NaiveDateTime,
}

impl Session {
    /// Creates a session from its three timestamps.
    pub fn new(start: NaiveDateTime, bedtime: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            bedtime,
            end,
        }
    }

    /// Returns the midnight the session crosses.
    ///
    /// When the start hour is strictly past noon (13:00 or later), midnight is
    /// the start of the next calendar day. Otherwise the session is taken to
    /// have started after midnight already, and midnight is the start of the
    /// start's own day. A start during the 12:00 hour therefore anchors to its
    /// own date; such a start is outside the evening precondition.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitter_pay_engine::models::Session;
    /// use chrono::NaiveDateTime;
    ///
    /// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let evening = Session::new(
    ///     parse("2021-01-01 17:00:00"),
    ///     parse("2021-01-01 22:00:00"),
    ///     parse("2021-01-02 04:00:00"),
    /// );
    /// assert_eq!(evening.midnight(), parse("2021-01-02 00:00:00"));
    ///
    /// let after_midnight = Session::new(
    ///     parse("2021-01-02 01:00:00"),
    ///     parse("2021-01-01 20:00:00"),
    ///     parse("2021-01-02 04:00:00"),
    /// );
    /// assert_eq!(after_midnight.midnight(), parse("2021-01-02 00:00:00"));
    /// ```
    pub fn midnight(&self) -> NaiveDateTime {
        let start_date = self.start.date();
        let midnight_date = if self.start.hour() > 12 {
            start_date + Days::new(1)
        } else {
            start_date
        };
        midnight_date.and_time(NaiveTime::MIN)
    }
}
