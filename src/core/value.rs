//! Tagged property values and their one-word codec.

use std::fmt;

use crate::util::{self, ClWord, Result};

/// Value shape of a schema key, fixed at schema-definition time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropKind {
    /// Pointer-sized native handle, round-tripped without interpretation.
    OpaqueHandle,
    /// Word encoded as 0/1; decode treats any nonzero word as true.
    Boolean,
    /// Signed integer, checked against the native word width.
    Integer,
    /// Word-sized enum discriminant.
    Enumerant,
    /// 32-bit IEEE-754 bit pattern in the low bits of the word.
    Float,
}

impl PropKind {
    /// Returns the name of this kind as a string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpaqueHandle => "handle",
            Self::Boolean => "bool",
            Self::Integer => "int",
            Self::Enumerant => "enum",
            Self::Float => "float",
        }
    }

    /// Decode one value word into a typed value.
    ///
    /// Closed switch over the tag; the inverse of [`PropValue::to_word`]
    /// for every word either side can produce.
    #[inline]
    pub fn decode(self, w: ClWord) -> PropValue {
        match self {
            Self::OpaqueHandle => PropValue::Handle(w),
            Self::Boolean => PropValue::Bool(util::word_to_bool(w)),
            Self::Integer => PropValue::Int(util::word_to_i64(w)),
            Self::Enumerant => PropValue::Enum(w),
            Self::Float => PropValue::Float(util::word_to_f32(w)),
        }
    }
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed property value occupying exactly one native word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropValue {
    /// Opaque native handle.
    Handle(ClWord),
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Raw enum discriminant.
    Enum(ClWord),
    /// 32-bit float.
    Float(f32),
}

impl PropValue {
    /// The kind tag of this value.
    #[inline]
    pub const fn kind(&self) -> PropKind {
        match self {
            Self::Handle(_) => PropKind::OpaqueHandle,
            Self::Bool(_) => PropKind::Boolean,
            Self::Int(_) => PropKind::Integer,
            Self::Enum(_) => PropKind::Enumerant,
            Self::Float(_) => PropKind::Float,
        }
    }

    /// Encode into a single value word.
    ///
    /// Fails only for [`PropValue::Int`] values wider than the native
    /// word; nothing is ever silently truncated.
    #[inline]
    pub fn to_word(&self) -> Result<ClWord> {
        match *self {
            Self::Handle(w) => Ok(w),
            Self::Bool(v) => Ok(util::bool_to_word(v)),
            Self::Int(v) => util::i64_to_word(v),
            Self::Enum(w) => Ok(w),
            Self::Float(v) => Ok(util::f32_to_word(v)),
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Handle(w) => write!(f, "{w:#x}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Enum(w) => write!(f, "{w:#x}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
