//! Splitting TXT data into DNS character-strings.
//!
//! A `<character-string>` on the wire is a length byte followed by at most 255
//! bytes of data ([RFC 1035 §3.3](https://tools.ietf.org/html/rfc1035#section-3.3)),
//! so longer text has to be carried as several strings in one TXT record.

use std::iter::FusedIterator;

/// Longest payload a single DNS character-string can carry.
pub const MAX_CHARACTER_STRING: usize = 255;

/// Iterator over the byte chunks of a string, see [`split_character_strings`].
#[derive(Debug, Clone)]
pub struct CharacterStrings<'s> {
    rest: &'s [u8],
    limit: usize,
    done: bool,
}

/// Split `s` into chunks of at most `limit` bytes.
///
/// Chunks are produced in order and concatenate back to exactly `s`. Text
/// that fits within `limit` (including the empty string) yields a single chunk.
///
/// Chunks are cut on byte boundaries, not `char` boundaries, matching the
/// wire format.
///
/// # Panics
///
/// Panics if `limit` is 0.
pub fn split_character_strings(s: &str, limit: usize) -> CharacterStrings<'_> {
    assert!(limit != 0, "character-string limit must be non-zero");
    CharacterStrings {
        rest: s.as_bytes(),
        limit,
        done: false,
    }
}

impl<'s> Iterator for CharacterStrings<'s> {
    type Item = &'s [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.rest.len() <= self.limit {
            self.done = true;
            return Some(std::mem::take(&mut self.rest));
        }

        let (chunk, rest) = self.rest.split_at(self.limit);
        self.rest = rest;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.done {
            0
        } else {
            self.rest.len().div_ceil(self.limit).max(1)
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for CharacterStrings<'_> {}

impl FusedIterator for CharacterStrings<'_> {}
