//! Owned property lists and the builder that produces them.

use bytemuck::{Pod, Zeroable};
use smallvec::SmallVec;
use std::fmt;

use super::keys::SENTINEL;
use crate::util::{words_as_bytes, ClWord};

/// One raw key/value pair as it appears on the wire.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct RawProperty {
    /// Native property key.
    pub key: ClWord,
    /// Untyped value word.
    pub value: ClWord,
}

impl RawProperty {
    /// Create a raw pair.
    #[inline]
    pub const fn new(key: ClWord, value: ClWord) -> Self {
        Self { key, value }
    }
}

impl fmt::Debug for RawProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}: {:#x}", self.key, self.value)
    }
}

/// An owned, zero-terminated property list in native word layout.
///
/// The word sequence is exactly what the native creation call expects:
/// alternating key/value pairs followed by one zero word. An empty list
/// is the single word `[0]`.
#[derive(Clone, PartialEq, Eq)]
pub struct PropertyList {
    words: Vec<ClWord>,
}

impl PropertyList {
    /// The list as a word slice, sentinel included.
    #[inline]
    pub fn as_words(&self) -> &[ClWord] {
        &self.words
    }

    /// Pointer to the first word, for handing to a native call.
    #[inline]
    pub fn as_ptr(&self) -> *const ClWord {
        self.words.as_ptr()
    }

    /// Total number of word slots, sentinel included. Always odd.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no properties are set (the list is just the sentinel).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.len() == 1
    }

    /// Number of key/value pairs before the sentinel.
    #[inline]
    pub fn num_pairs(&self) -> usize {
        (self.words.len() - 1) / 2
    }

    /// The list as raw bytes in native layout.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        words_as_bytes(&self.words)
    }

    /// Consume the list, returning the underlying words.
    #[inline]
    pub fn into_words(self) -> Vec<ClWord> {
        self.words
    }
}

impl AsRef<[ClWord]> for PropertyList {
    fn as_ref(&self) -> &[ClWord] {
        &self.words
    }
}

impl fmt::Debug for PropertyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.words.iter().map(|w| format!("{w:#x}")))
            .finish()
    }
}

/// Builds a zero-terminated property list.
///
/// The builder owns its buffer and [`finish`](Self::finish) returns the
/// completed list; nothing is shared or mutated through the caller.
pub struct ListBuilder {
    words: SmallVec<[ClWord; 16]>,
}

impl ListBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { words: SmallVec::new() }
    }

    /// Append one key/value pair. The key must not be the sentinel;
    /// a zero key would truncate the list for every decoder.
    pub fn push(&mut self, key: ClWord, value: ClWord) {
        debug_assert!(key != SENTINEL, "property key 0 is the list terminator");
        self.words.push(key);
        self.words.push(value);
    }

    /// Append a raw pair unchanged.
    pub fn push_raw(&mut self, pair: RawProperty) {
        self.push(pair.key, pair.value);
    }

    /// Number of pairs appended so far.
    pub fn num_pairs(&self) -> usize {
        self.words.len() / 2
    }

    /// Terminate the list and return it.
    pub fn finish(mut self) -> PropertyList {
        self.words.push(SENTINEL);
        PropertyList { words: self.words.into_vec() }
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
