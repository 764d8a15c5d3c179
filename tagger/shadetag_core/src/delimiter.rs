//! Delimiter-based token splitting.
//!
//! A line is cut at every delimiter character. The pieces between delimiters
//! are tokens; delimiters themselves are never reported. Two adjacent
//! delimiters produce an empty piece, which [`Tokens`] skips.

use crate::Span;

/// Immutable set of characters that separate tokens.
///
/// ASCII members live in a 128-bit table for branch-free lookup; anything
/// else goes into a sorted slice searched by binary search. Shader sources
/// are overwhelmingly ASCII, so the slice is normally empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimiterSet {
    ascii: u128,
    other: Box<[char]>,
}

impl DelimiterSet {
    /// Build a set from its member characters.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut ascii = 0u128;
        let mut other = Vec::new();
        for c in chars {
            if c.is_ascii() {
                ascii |= 1u128 << u32::from(c);
            } else {
                other.push(c);
            }
        }
        other.sort_unstable();
        other.dedup();
        DelimiterSet {
            ascii,
            other: other.into_boxed_slice(),
        }
    }

    /// Delimiters for C-family languages (GLSL, OpenCL C).
    ///
    /// Whitespace, brackets, operators and punctuation. `_` is not a
    /// delimiter, so `__kernel` and `M_PI_F` stay whole.
    pub fn c_family() -> Self {
        Self::new(" \t\r\n\x0b\x0c(){}[]<>;,.:?+-*/%=!&|^~\"'#\\".chars())
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << u32::from(c)) != 0
        } else {
            self.other.binary_search(&c).is_ok()
        }
    }

    /// Split `text`, which starts at absolute offset `base`, into tokens.
    ///
    /// Tokens borrow from `text` only, so they may outlive the set.
    pub fn tokens<'t>(&self, text: &'t str, base: u32) -> Tokens<'_, 't> {
        Tokens {
            delimiters: self,
            text,
            base,
            pos: 0,
        }
    }
}

/// A maximal delimiter-free piece of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Absolute document offset of the first byte.
    pub offset: u32,
}

impl Token<'_> {
    /// Document span covered by the token.
    #[inline]
    pub fn span(&self) -> Span {
        // Token text comes from a line whose absolute end fits in u32.
        Span::with_len(
            self.offset,
            u32::try_from(self.text.len()).unwrap_or(u32::MAX),
        )
    }
}

/// Iterator over the non-empty tokens of one line, left to right.
#[derive(Clone, Debug)]
pub struct Tokens<'d, 't> {
    delimiters: &'d DelimiterSet,
    text: &'t str,
    base: u32,
    /// Byte position in `text` where the next piece starts.
    pos: usize,
}

impl<'t> Iterator for Tokens<'_, 't> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Token<'t>> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let piece_len = rest
                .char_indices()
                .find(|&(_, c)| self.delimiters.contains(c))
                .map_or(rest.len(), |(i, _)| i);
            let start = self.pos;

            // Step over the piece and the delimiter that ended it, if any.
            self.pos += piece_len;
            if let Some(delim) = self.text[self.pos..].chars().next() {
                self.pos += delim.len_utf8();
            }

            // Empty piece between two delimiters.
            if piece_len == 0 {
                continue;
            }

            let rel = u32::try_from(start).unwrap_or(u32::MAX);
            return Some(Token {
                text: &rest[..piece_len],
                offset: self.base.saturating_add(rel),
            });
        }
        None
    }
}
