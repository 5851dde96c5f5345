//! Utility types and functions for the property-list codec.
//!
//! This module contains fundamental types used throughout the library:
//! - [`ClWord`] - Native property slot type and per-kind slot conversions
//! - [`Error`] / [`Result`] - Error handling

mod error;
mod word;

pub use error::*;
pub use word::*;
