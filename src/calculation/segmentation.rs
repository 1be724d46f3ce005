//! Session segmentation logic.
//!
//! This module splits a session into contiguous spans at its start, bedtime,
//! midnight and end boundaries, and works out which rate band each span
//! belongs to.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{RateBand, Session};

/// Identifies which of the four session boundaries a timestamp is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    /// The session start.
    Start,
    /// The child's bedtime.
    Bedtime,
    /// The midnight the session crosses.
    Midnight,
    /// The session end.
    End,
}

/// A boundary timestamp tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// When the boundary occurs.
    pub at: NaiveDateTime,
    /// Which boundary this is.
    pub kind: BoundaryKind,
}

/// An unbilled span produced by walking a session's boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Where the span begins.
    pub begin: NaiveDateTime,
    /// Where the span ends. May precede `begin` for out-of-order boundaries.
    pub end: NaiveDateTime,
    /// The rate band of the span, taken from its `begin`.
    pub band: RateBand,
}

impl Span {
    /// Returns true if the span covers some time.
    pub fn has_length(&self) -> bool {
        self.end > self.begin
    }
}

/// Returns the four session boundaries in chronological order.
///
/// Sorting is stable, so coinciding boundaries keep the order start,
/// bedtime, midnight, end.
pub fn sorted_boundaries(session: &Session) -> [Boundary; 4] {
    let mut boundaries = [
        Boundary {
            at: session.start,
            kind: BoundaryKind::Start,
        },
        Boundary {
            at: session.bedtime,
            kind: BoundaryKind::Bedtime,
        },
        Boundary {
            at: session.midnight(),
            kind: BoundaryKind::Midnight,
        },
        Boundary {
            at: session.end,
            kind: BoundaryKind::End,
        },
    ];
    boundaries.sort_by_key(|b| b.at);
    boundaries
}

/// Walks a session's sorted boundaries and returns the spans to bill.
///
/// Starting from the session start, each boundary after the earliest one
/// closes a span that opens at the current position. The current position
/// only moves forward, so a boundary lying behind it yields a backwards span
/// which bills as zero hours. The walk stops once the position reaches the
/// session end.
///
/// The result includes zero-length and backwards spans; callers decide
/// whether to report them.
///
/// # Example
///
/// ```
/// use sitter_pay_engine::calculation::segment_session;
/// use sitter_pay_engine::models::{RateBand, Session};
/// use chrono::NaiveDateTime;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let session = Session::new(
///     parse("2021-01-01 17:00:00"),
///     parse("2021-01-01 22:00:00"),
///     parse("2021-01-02 04:00:00"),
/// );
///
/// let spans = segment_session(&session);
/// let bands: Vec<_> = spans.iter().map(|s| s.band).collect();
/// assert_eq!(
///     bands,
///     vec![RateBand::PreBed, RateBand::BedToMidnight, RateBand::PostMidnight]
/// );
/// ```
pub fn segment_session(session: &Session) -> Vec<Span> {
    let midnight = session.midnight();
    let boundaries = sorted_boundaries(session);

    let (_, spans) = boundaries.iter().skip(1).fold(
        (session.start, Vec::with_capacity(3)),
        |(position, mut spans), boundary| {
            if position >= session.end {
                return (position, spans);
            }

            spans.push(Span {
                begin: position,
                end: boundary.at,
                band: RateBand::at(position, session.bedtime, midnight),
            });

            (position.max(boundary.at), spans)
        },
    );

    spans
}
