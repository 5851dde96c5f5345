//! Bounds-checked scanning of flat property lists.

use super::keys::is_sentinel;
use super::list::RawProperty;
use crate::util::{ClWord, Error, Result};

/// Iterate the key/value pairs of a zero-terminated word sequence.
///
/// Scanning stops at the first zero key; any slots after it are
/// ignored, matching the native convention. A key slot with no value
/// slot behind it, or exhaustion of the input without any zero key,
/// yields a [`Error::MalformedPropertyList`] instead of reading out of
/// bounds.
pub fn pairs(words: &[ClWord]) -> PairCursor<'_> {
    PairCursor { words, pos: 0, done: false }
}

/// Cursor over the pairs of a flat property list. See [`pairs`].
pub struct PairCursor<'a> {
    words: &'a [ClWord],
    pos: usize,
    done: bool,
}

impl Iterator for PairCursor<'_> {
    type Item = Result<RawProperty>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(&key) = self.words.get(self.pos) else {
            self.done = true;
            return Some(Err(Error::malformed(format!(
                "no terminating zero within {} slots",
                self.words.len()
            ))));
        };
        if is_sentinel(key) {
            self.done = true;
            return None;
        }
        let Some(&value) = self.words.get(self.pos + 1) else {
            self.done = true;
            return Some(Err(Error::malformed(format!(
                "key {key:#x} at slot {} has no value",
                self.pos
            ))));
        };
        self.pos += 2;
        Some(Ok(RawProperty { key, value }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(words: &[ClWord]) -> Result<Vec<RawProperty>> {
        pairs(words).collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(collect(&[0]).unwrap(), vec![]);
    }

    #[test]
    fn test_pairs_in_order() {
        let got = collect(&[0x1084, 5, 0x2008, 6, 0]).unwrap();
        assert_eq!(
            got,
            vec![RawProperty::new(0x1084, 5), RawProperty::new(0x2008, 6)]
        );
    }

    #[test]
    fn test_zero_value_is_not_a_terminator() {
        // Only a zero in key position ends the list.
        let got = collect(&[0x1084, 0, 0x2008, 6, 0]).unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].value, 0);
    }

    #[test]
    fn test_trailing_slots_after_sentinel_ignored() {
        let got = collect(&[0x1084, 5, 0, 0xDEAD, 0xBEEF]).unwrap();
        assert_eq!(got, vec![RawProperty::new(0x1084, 5)]);
    }

    #[test]
    fn test_missing_terminator() {
        assert!(collect(&[]).is_err());
        assert!(collect(&[0x1084, 5]).is_err());
    }

    #[test]
    fn test_key_without_value() {
        let err = collect(&[0x1084, 5, 0x2008]).unwrap_err();
        assert!(matches!(err, Error::MalformedPropertyList(_)));
        assert!(err.to_string().contains("0x2008"));
    }

    #[test]
    fn test_cursor_fused_after_error() {
        let mut cur = pairs(&[0x1084]);
        assert!(cur.next().unwrap().is_err());
        assert!(cur.next().is_none());
    }
}
