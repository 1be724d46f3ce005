//! Overnight Pay Engine for caregivers
//!
//! This crate computes what a caregiver is owed for one overnight session,
//! billing the time before bedtime, between bedtime and midnight, and after
//! midnight at three separate hourly rates.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
