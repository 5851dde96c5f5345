//! Native handle and enumerant types referenced by the schemas.

use std::fmt;

use crate::util::ClWord;

/// Opaque platform identifier.
///
/// Pointer-sized handle produced by platform enumeration; never
/// dereferenced here, only carried through property lists.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformId(ClWord);

impl PlatformId {
    /// Wrap a raw platform handle.
    #[inline]
    pub const fn from_raw(raw: ClWord) -> Self {
        Self(raw)
    }

    /// The raw handle word.
    #[inline]
    pub const fn raw(self) -> ClWord {
        self.0
    }
}

impl fmt::Debug for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlatformId({:#x})", self.0)
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Sampler addressing mode (cl_addressing_mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(isize)]
pub enum AddressingMode {
    /// CL_ADDRESS_NONE
    None = 0x1130,
    /// CL_ADDRESS_CLAMP_TO_EDGE
    ClampToEdge = 0x1131,
    /// CL_ADDRESS_CLAMP
    Clamp = 0x1132,
    /// CL_ADDRESS_REPEAT
    Repeat = 0x1133,
    /// CL_ADDRESS_MIRRORED_REPEAT
    MirroredRepeat = 0x1134,
}

impl AddressingMode {
    /// Parse a native discriminant. `None` for values this revision
    /// does not know.
    pub const fn from_word(w: ClWord) -> Option<Self> {
        match w {
            0x1130 => Some(Self::None),
            0x1131 => Some(Self::ClampToEdge),
            0x1132 => Some(Self::Clamp),
            0x1133 => Some(Self::Repeat),
            0x1134 => Some(Self::MirroredRepeat),
            _ => None,
        }
    }

    /// The native discriminant.
    #[inline]
    pub const fn to_word(self) -> ClWord {
        self as ClWord
    }

    /// Returns the name of this mode as a string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ClampToEdge => "clamp_to_edge",
            Self::Clamp => "clamp",
            Self::Repeat => "repeat",
            Self::MirroredRepeat => "mirrored_repeat",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sampler filter mode (cl_filter_mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(isize)]
pub enum FilterMode {
    /// CL_FILTER_NEAREST
    Nearest = 0x1140,
    /// CL_FILTER_LINEAR
    Linear = 0x1141,
}

impl FilterMode {
    /// Parse a native discriminant.
    pub const fn from_word(w: ClWord) -> Option<Self> {
        match w {
            0x1140 => Some(Self::Nearest),
            0x1141 => Some(Self::Linear),
            _ => None,
        }
    }

    /// The native discriminant.
    #[inline]
    pub const fn to_word(self) -> ClWord {
        self as ClWord
    }

    /// Returns the name of this mode as a string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
