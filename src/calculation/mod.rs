//! Calculation logic for the overnight pay engine.
//!
//! This module contains the calculation functions for billing an overnight
//! session: segmenting the session at its bedtime and midnight boundaries,
//! converting each span into whole billable hours, and the
//! [`SessionBiller`] that ties them together.

mod billable_hours;
mod segmentation;
mod session_biller;

pub use billable_hours::{billable_hours, fractional_hours};
pub use segmentation::{Boundary, BoundaryKind, Span, segment_session, sorted_boundaries};
pub use session_biller::SessionBiller;
