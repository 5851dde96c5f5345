//! Schema tables and the encode/decode engine shared by all object kinds.

use std::fmt;

use tracing::{debug, trace};

use super::{AdditionalProperties, PropKind, PropValue};
use crate::util::{ClWord, Result};
use crate::wire::{pairs, ListBuilder, PropertyList};

/// One row of a property schema: a native key, its value shape, and the
/// accessors that connect it to a field of the sparse set `S`.
///
/// Tables of these are `const` per object kind; their order is the
/// encode order, so the emitted word layout is deterministic no matter
/// in which order the caller assigned fields.
pub struct SchemaEntry<S> {
    /// Native property key.
    pub key: ClWord,
    /// Field name used in diagnostics.
    pub name: &'static str,
    /// Value shape for this key.
    pub kind: PropKind,
    /// Read the field; `None` when absent.
    pub get: fn(&S) -> Option<PropValue>,
    /// Store a decoded value. Returns `false` when the value has no
    /// typed representation (an unrecognized enumerant); the engine
    /// then keeps the raw pair in the additional bucket instead of
    /// dropping it.
    pub set: fn(&mut S, PropValue) -> bool,
}

impl<S> fmt::Debug for SchemaEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaEntry")
            .field("key", &format_args!("{:#x}", self.key))
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A sparse, typed property set with a fixed schema.
///
/// Implementors supply the schema table and access to their additional
/// bucket; the encode/decode/format algorithms are shared default
/// methods. Both directions are pure: they read their input and
/// allocate a fresh output, nothing else.
pub trait PropertySet: Default + Sized + 'static {
    /// Diagnostic name of the object kind ("context", "sampler", ...).
    const KIND: &'static str;

    /// Fixed key table for this object kind, in encode order.
    fn schema() -> &'static [SchemaEntry<Self>];

    /// Pairs the schema does not recognize, in encounter order.
    fn additional(&self) -> &AdditionalProperties;

    /// Mutable access to the passthrough bucket.
    fn additional_mut(&mut self) -> &mut AdditionalProperties;

    /// Encode into a flat, zero-terminated property list.
    ///
    /// Present fields are emitted in schema order, then every
    /// additional pair verbatim, then the sentinel. An empty set
    /// encodes to exactly `[0]`. Fails only with
    /// [`UnsupportedValueWidth`](crate::util::Error::UnsupportedValueWidth).
    fn to_property_list(&self) -> Result<PropertyList> {
        let mut builder = ListBuilder::new();
        for entry in Self::schema() {
            if let Some(value) = (entry.get)(self) {
                builder.push(entry.key, value.to_word()?);
            }
        }
        for pair in self.additional().iter() {
            builder.push_raw(*pair);
        }
        trace!(
            "encoded {} property list: {} pairs",
            Self::KIND,
            builder.num_pairs()
        );
        Ok(builder.finish())
    }

    /// Decode a flat property list back into a sparse set.
    ///
    /// Every pair of the input is accounted for exactly once: schema
    /// keys become typed fields, everything else lands in the
    /// additional bucket in encounter order. Fails with
    /// [`MalformedPropertyList`](crate::util::Error::MalformedPropertyList)
    /// on pairing or termination violations.
    fn from_property_list(words: &[ClWord]) -> Result<Self> {
        let mut set = Self::default();
        for pair in pairs(words) {
            let pair = pair?;
            match Self::schema().iter().find(|e| e.key == pair.key) {
                Some(entry) => {
                    let value = entry.kind.decode(pair.value);
                    if !(entry.set)(&mut set, value) {
                        debug!(
                            "{} property {} has unrecognized value {:#x}, keeping raw",
                            Self::KIND,
                            entry.name,
                            pair.value
                        );
                        set.additional_mut().push(pair);
                    }
                }
                None => {
                    trace!(
                        "unknown {} property key {:#x}, keeping raw",
                        Self::KIND,
                        pair.key
                    );
                    set.additional_mut().push(pair);
                }
            }
        }
        Ok(set)
    }
}

/// Render the present fields of a set as `Name: value` segments joined
/// by `", "`, followed by the additional pairs in raw hex. Absent
/// fields contribute nothing, separators included.
pub fn format_set<S: PropertySet>(set: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for entry in S::schema() {
        if let Some(value) = (entry.get)(set) {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", entry.name, value)?;
            first = false;
        }
    }
    for pair in set.additional().iter() {
        if !first {
            f.write_str(", ")?;
        }
        write!(f, "{:#x}: {:#x}", pair.key, pair.value)?;
        first = false;
    }
    Ok(())
}
