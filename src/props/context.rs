//! Context property schema.

use std::fmt;

use super::PlatformId;
use crate::core::{format_set, AdditionalProperties, PropKind, PropValue, PropertySet, SchemaEntry};
use crate::util::ClWord;
use crate::wire::keys;

/// Sparse property set for creating a context.
///
/// Every field is independently optional; only present fields are
/// encoded. The interop handles (GL, EGL, D3D, ...) are opaque
/// pointer-sized words owned by the respective native APIs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextProperties {
    /// Platform to create the context on.
    pub platform: Option<PlatformId>,
    /// OpenGL context handle for sharing.
    pub gl_context_khr: Option<ClWord>,
    /// EGL display handle.
    pub egl_display_khr: Option<ClWord>,
    /// GLX display handle.
    pub glx_display_khr: Option<ClWord>,
    /// WGL device context handle.
    pub wgl_hdc_khr: Option<ClWord>,
    /// CGL share group handle.
    pub cgl_share_group_khr: Option<ClWord>,
    /// Whether the application synchronizes sharing with native APIs
    /// itself instead of relying on implicit synchronization.
    pub interop_user_sync: Option<bool>,
    /// Direct3D 10 device handle.
    pub d3d10_device_khr: Option<ClWord>,
    /// Direct3D 11 device handle.
    pub d3d11_device_khr: Option<ClWord>,
    /// Direct3D 9 adapter handle.
    pub adapter_d3d9_khr: Option<ClWord>,
    /// Direct3D 9Ex adapter handle.
    pub adapter_d3d9ex_khr: Option<ClWord>,
    /// DXVA adapter handle.
    pub adapter_dxva_khr: Option<ClWord>,
    /// Bitfield selecting which memory kinds the implementation
    /// zero-initializes.
    pub memory_initialize_khr: Option<i64>,
    /// Whether the context may be terminated.
    pub terminate_khr: Option<bool>,
    /// Pairs for keys this schema does not recognize.
    pub additional: AdditionalProperties,
}

impl ContextProperties {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set for the common single-platform case.
    pub fn with_platform(platform: PlatformId) -> Self {
        Self { platform: Some(platform), ..Self::default() }
    }
}

// Entry for a plain opaque-handle field stored as a raw word.
macro_rules! handle_entry {
    ($key:expr, $name:literal, $field:ident) => {
        SchemaEntry {
            key: $key,
            name: $name,
            kind: PropKind::OpaqueHandle,
            get: |s| s.$field.map(PropValue::Handle),
            set: |s, v| match v {
                PropValue::Handle(w) => {
                    s.$field = Some(w);
                    true
                }
                _ => false,
            },
        }
    };
}

/// Key table in encode order.
const CONTEXT_SCHEMA: &[SchemaEntry<ContextProperties>] = &[
    SchemaEntry {
        key: keys::CONTEXT_PLATFORM,
        name: "Platform",
        kind: PropKind::OpaqueHandle,
        get: |s| s.platform.map(|p| PropValue::Handle(p.raw())),
        set: |s, v| match v {
            PropValue::Handle(w) => {
                s.platform = Some(PlatformId::from_raw(w));
                true
            }
            _ => false,
        },
    },
    handle_entry!(keys::GL_CONTEXT_KHR, "GlContextKHR", gl_context_khr),
    handle_entry!(keys::EGL_DISPLAY_KHR, "EglDisplayKHR", egl_display_khr),
    handle_entry!(keys::GLX_DISPLAY_KHR, "GlxDisplayKHR", glx_display_khr),
    handle_entry!(keys::WGL_HDC_KHR, "WglHdcKHR", wgl_hdc_khr),
    handle_entry!(keys::CGL_SHAREGROUP_KHR, "CglShareGroupKHR", cgl_share_group_khr),
    SchemaEntry {
        key: keys::CONTEXT_INTEROP_USER_SYNC,
        name: "InteropUserSync",
        kind: PropKind::Boolean,
        get: |s| s.interop_user_sync.map(PropValue::Bool),
        set: |s, v| match v {
            PropValue::Bool(b) => {
                s.interop_user_sync = Some(b);
                true
            }
            _ => false,
        },
    },
    handle_entry!(keys::CONTEXT_D3D10_DEVICE_KHR, "D3D10DeviceKHR", d3d10_device_khr),
    handle_entry!(keys::CONTEXT_D3D11_DEVICE_KHR, "D3D11DeviceKHR", d3d11_device_khr),
    handle_entry!(keys::CONTEXT_ADAPTER_D3D9_KHR, "AdapterD3D9KHR", adapter_d3d9_khr),
    handle_entry!(keys::CONTEXT_ADAPTER_D3D9EX_KHR, "AdapterD3D9ExKHR", adapter_d3d9ex_khr),
    handle_entry!(keys::CONTEXT_ADAPTER_DXVA_KHR, "AdapterDxvaKHR", adapter_dxva_khr),
    SchemaEntry {
        key: keys::CONTEXT_MEMORY_INITIALIZE_KHR,
        name: "MemoryInitializeKHR",
        kind: PropKind::Integer,
        get: |s| s.memory_initialize_khr.map(PropValue::Int),
        set: |s, v| match v {
            PropValue::Int(i) => {
                s.memory_initialize_khr = Some(i);
                true
            }
            _ => false,
        },
    },
    SchemaEntry {
        key: keys::CONTEXT_TERMINATE_KHR,
        name: "TerminateKHR",
        kind: PropKind::Boolean,
        get: |s| s.terminate_khr.map(PropValue::Bool),
        set: |s, v| match v {
            PropValue::Bool(b) => {
                s.terminate_khr = Some(b);
                true
            }
            _ => false,
        },
    },
];

impl PropertySet for ContextProperties {
    const KIND: &'static str = "context";

    fn schema() -> &'static [SchemaEntry<Self>] {
        CONTEXT_SCHEMA
    }

    fn additional(&self) -> &AdditionalProperties {
        &self.additional
    }

    fn additional_mut(&mut self) -> &mut AdditionalProperties {
        &mut self.additional
    }
}

impl fmt::Display for ContextProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_set(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_encodes_to_sentinel_only() {
        let list = ContextProperties::new().to_property_list().unwrap();
        assert_eq!(list.as_words(), &[0]);
    }

    #[test]
    fn test_encode_follows_schema_order_not_assignment_order() {
        // Assign in reverse of the table order; layout must not care.
        let mut props = ContextProperties::new();
        props.terminate_khr = Some(true);
        props.gl_context_khr = Some(0x77);
        props.platform = Some(PlatformId::from_raw(0x1000));

        let list = props.to_property_list().unwrap();
        assert_eq!(
            list.as_words(),
            &[
                keys::CONTEXT_PLATFORM,
                0x1000,
                keys::GL_CONTEXT_KHR,
                0x77,
                keys::CONTEXT_TERMINATE_KHR,
                1,
                0,
            ]
        );
    }

    #[test]
    fn test_roundtrip_all_fields() {
        let mut props = ContextProperties::with_platform(PlatformId::from_raw(0xAA));
        props.gl_context_khr = Some(1);
        props.egl_display_khr = Some(2);
        props.glx_display_khr = Some(3);
        props.wgl_hdc_khr = Some(4);
        props.cgl_share_group_khr = Some(5);
        props.interop_user_sync = Some(false);
        props.d3d10_device_khr = Some(6);
        props.d3d11_device_khr = Some(7);
        props.adapter_d3d9_khr = Some(8);
        props.adapter_d3d9ex_khr = Some(9);
        props.adapter_dxva_khr = Some(10);
        props.memory_initialize_khr = Some(0b11);
        props.terminate_khr = Some(true);

        let list = props.to_property_list().unwrap();
        let back = ContextProperties::from_property_list(list.as_words()).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn test_unknown_key_lands_in_additional() {
        let words = [keys::CONTEXT_PLATFORM, 0x1, 0x9999, 42, 0];
        let props = ContextProperties::from_property_list(&words).unwrap();

        assert_eq!(props.platform, Some(PlatformId::from_raw(0x1)));
        assert_eq!(props.additional.len(), 1);
        assert_eq!(props.additional.as_slice()[0].key, 0x9999);
        assert_eq!(props.additional.as_slice()[0].value, 42);
    }

    #[test]
    fn test_interop_sync_nonzero_decodes_true_but_encodes_one() {
        let words = [keys::CONTEXT_INTEROP_USER_SYNC, 2, 0];
        let props = ContextProperties::from_property_list(&words).unwrap();
        assert_eq!(props.interop_user_sync, Some(true));

        let reencoded = props.to_property_list().unwrap();
        assert_eq!(reencoded.as_words(), &[keys::CONTEXT_INTEROP_USER_SYNC, 1, 0]);
    }

    #[test]
    fn test_display_skips_absent_fields() {
        let mut props = ContextProperties::with_platform(PlatformId::from_raw(0xAB));
        props.interop_user_sync = Some(true);

        let s = props.to_string();
        assert_eq!(s, "Platform: 0xab, InteropUserSync: true");
    }

    #[test]
    fn test_display_empty_set_is_empty_string() {
        assert_eq!(ContextProperties::new().to_string(), "");
    }
}
