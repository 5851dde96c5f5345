//! Pipe property schema.
//!
//! The native registry currently defines no pipe property keys, so this
//! schema recognizes nothing: every pair routes through the additional
//! bucket. A degenerate but valid instance of the codec - it proves the
//! passthrough path alone upholds the round-trip contract.

use std::fmt;

use crate::core::{format_set, AdditionalProperties, PropertySet, SchemaEntry};

/// Sparse property set for creating a pipe.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipeProperties {
    /// Every pair of a pipe list; no keys are recognized yet.
    pub additional: AdditionalProperties,
}

impl PipeProperties {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }
}

const PIPE_SCHEMA: &[SchemaEntry<PipeProperties>] = &[];

impl PropertySet for PipeProperties {
    const KIND: &'static str = "pipe";

    fn schema() -> &'static [SchemaEntry<Self>] {
        PIPE_SCHEMA
    }

    fn additional(&self) -> &AdditionalProperties {
        &self.additional
    }

    fn additional_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional
    }
}

impl fmt::Display for PipeProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_set(self, f)
    }
}
