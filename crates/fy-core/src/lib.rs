//! # fy-core
//!
//! Error definitions shared by the financial-year workspace crates.
//!
//! Every failure mode in the workspace is a value of the single
//! [`errors::Error`] enum; library code never panics on bad input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
