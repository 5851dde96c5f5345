//! Sampler property schema.

use std::fmt;

use super::{AddressingMode, FilterMode};
use crate::core::{format_set, AdditionalProperties, PropKind, PropValue, PropertySet, SchemaEntry};
use crate::wire::keys;

/// Sparse property set for creating a sampler.
///
/// The LOD bounds are genuine 32-bit floats carried bit-exactly in
/// their word slots, including NaN payloads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SamplerProperties {
    /// Whether image coordinates are normalized to `[0, 1]`.
    pub normalized_coords: Option<bool>,
    /// How out-of-range coordinates are handled.
    pub addressing_mode: Option<AddressingMode>,
    /// Filter used when sampling.
    pub filter_mode: Option<FilterMode>,
    /// Filter used between mip levels.
    pub mip_filter_mode_khr: Option<FilterMode>,
    /// Minimum level of detail.
    pub lod_min_khr: Option<f32>,
    /// Maximum level of detail.
    pub lod_max_khr: Option<f32>,
    /// Pairs for keys this schema does not recognize.
    pub additional: AdditionalProperties,
}

impl SamplerProperties {
    /// Create a set with the three core fields, the common case.
    pub fn new(
        normalized_coords: Option<bool>,
        addressing_mode: Option<AddressingMode>,
        filter_mode: Option<FilterMode>,
    ) -> Self {
        Self {
            normalized_coords,
            addressing_mode,
            filter_mode,
            ..Self::default()
        }
    }
}

/// Key table in encode order.
const SAMPLER_SCHEMA: &[SchemaEntry<SamplerProperties>] = &[
    SchemaEntry {
        key: keys::SAMPLER_NORMALIZED_COORDS,
        name: "NormalizedCoords",
        kind: PropKind::Boolean,
        get: |s| s.normalized_coords.map(PropValue::Bool),
        set: |s, v| match v {
            PropValue::Bool(b) => {
                s.normalized_coords = Some(b);
                true
            }
            _ => false,
        },
    },
    SchemaEntry {
        key: keys::SAMPLER_ADDRESSING_MODE,
        name: "AddressingMode",
        kind: PropKind::Enumerant,
        get: |s| s.addressing_mode.map(|m| PropValue::Enum(m.to_word())),
        set: |s, v| match v {
            PropValue::Enum(w) => match AddressingMode::from_word(w) {
                Some(mode) => {
                    s.addressing_mode = Some(mode);
                    true
                }
                None => false,
            },
            _ => false,
        },
    },
    SchemaEntry {
        key: keys::SAMPLER_FILTER_MODE,
        name: "FilterMode",
        kind: PropKind::Enumerant,
        get: |s| s.filter_mode.map(|m| PropValue::Enum(m.to_word())),
        set: |s, v| match v {
            PropValue::Enum(w) => match FilterMode::from_word(w) {
                Some(mode) => {
                    s.filter_mode = Some(mode);
                    true
                }
                None => false,
            },
            _ => false,
        },
    },
    SchemaEntry {
        key: keys::SAMPLER_MIP_FILTER_MODE_KHR,
        name: "MipFilterModeKHR",
        kind: PropKind::Enumerant,
        get: |s| s.mip_filter_mode_khr.map(|m| PropValue::Enum(m.to_word())),
        set: |s, v| match v {
            PropValue::Enum(w) => match FilterMode::from_word(w) {
                Some(mode) => {
                    s.mip_filter_mode_khr = Some(mode);
                    true
                }
                None => false,
            },
            _ => false,
        },
    },
    SchemaEntry {
        key: keys::SAMPLER_LOD_MIN_KHR,
        name: "LodMinKHR",
        kind: PropKind::Float,
        get: |s| s.lod_min_khr.map(PropValue::Float),
        set: |s, v| match v {
            PropValue::Float(x) => {
                s.lod_min_khr = Some(x);
                true
            }
            _ => false,
        },
    },
    SchemaEntry {
        key: keys::SAMPLER_LOD_MAX_KHR,
        name: "LodMaxKHR",
        kind: PropKind::Float,
        get: |s| s.lod_max_khr.map(PropValue::Float),
        set: |s, v| match v {
            PropValue::Float(x) => {
                s.lod_max_khr = Some(x);
                true
            }
            _ => false,
        },
    },
];

impl PropertySet for SamplerProperties {
    const KIND: &'static str = "sampler";

    fn schema() -> &'static [SchemaEntry<Self>] {
        SAMPLER_SCHEMA
    }

    fn additional(&self) -> &AdditionalProperties {
        &self.additional
    }

    fn additional_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional
    }
}

impl fmt::Display for SamplerProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_set(self, f)
    }
}
