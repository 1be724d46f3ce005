//! Configuration loading for the overnight pay engine.
//!
//! This module provides functionality for loading biller configuration
//! (hourly rates and rounding policy) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use sitter_pay_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default.yaml").unwrap();
//! let biller = loader.biller().unwrap();
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::BillerConfig;
