//! Core data models for the overnight pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod rate_schedule;
mod rounding_policy;
mod session;
mod session_bill;

pub use rate_schedule::{RateBand, RateSchedule};
pub use rounding_policy::RoundingPolicy;
pub use session::Session;
pub use session_bill::{SessionBill, SubInterval};
