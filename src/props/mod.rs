//! Property schema instances, one per native object kind.
//!
//! Each kind applies the engine in [`crate::core`] to its own fixed key
//! table:
//! - [`ContextProperties`] - context creation (largest table)
//! - [`SamplerProperties`] - sampler creation (enumerants and floats)
//! - [`PipeProperties`] - pipe creation (no recognized keys; pure passthrough)

mod context;
mod pipe;
mod sampler;
mod types;

pub use context::ContextProperties;
pub use pipe::PipeProperties;
pub use sampler::SamplerProperties;
pub use types::{AddressingMode, FilterMode, PlatformId};
