//! # clprops
//!
//! Typed property-list codec for OpenCL-style object creation APIs.
//!
//! Native creation calls (`clCreateContext`, `clCreatePipe`,
//! `clCreateSamplerWithProperties`, and their relatives) take their
//! configuration as a flat array of pointer-sized words: alternating
//! key/value pairs terminated by a zero word. This crate converts
//! between that wire shape and sparse, typed Rust structs - in both
//! directions, bit-for-bit, with unrecognized keys carried through for
//! forward compatibility.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (native word, slot conversions, errors)
//! - [`wire`] - Low-level flat-list layer (keys, builder, parser)
//! - [`core`] - Shared codec engine (tagged values, schema tables)
//! - [`props`] - Schema instances (context, sampler, pipe)
//!
//! ## Example
//!
//! ```
//! use clprops::prelude::*;
//!
//! let mut props = ContextProperties::with_platform(PlatformId::from_raw(0x1000));
//! props.interop_user_sync = Some(true);
//!
//! let list = props.to_property_list()?;
//! assert_eq!(list.as_words(), &[0x1084, 0x1000, 0x1085, 1, 0]);
//!
//! let back = ContextProperties::from_property_list(list.as_words())?;
//! assert_eq!(back, props);
//! # Ok::<(), clprops::Error>(())
//! ```

pub mod core;
pub mod props;
pub mod util;
pub mod wire;

// Re-export commonly used types
pub use crate::core::{AdditionalProperties, PropKind, PropValue, PropertySet};
pub use crate::util::{ClWord, Error, Result};
pub use crate::wire::{PropertyList, RawProperty};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{AdditionalProperties, PropKind, PropValue, PropertySet};
    pub use crate::props::{
        AddressingMode, ContextProperties, FilterMode, PipeProperties, PlatformId,
        SamplerProperties,
    };
    pub use crate::util::{ClWord, Error, Result};
    pub use crate::wire::{PropertyList, RawProperty};
}
