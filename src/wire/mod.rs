//! Low-level flat property-list layer.
//!
//! A property list is the literal argument/return shape at the native
//! boundary: an array of pointer-sized words, alternating key and
//! value, terminated by a single zero word. This module owns that
//! layout - building it, parsing it, and nothing else. Typed
//! interpretation of the pairs lives in [`crate::core`].

pub mod keys;

mod list;
mod parse;

pub use list::{ListBuilder, PropertyList, RawProperty};
pub use parse::{pairs, PairCursor};
