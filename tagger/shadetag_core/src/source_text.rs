//! Host text access.
//!
//! The tagger never owns the document. It reads it through [`TextSource`],
//! which an editor host implements over its own buffer/snapshot type.
//! [`SourceText`] is the in-memory implementation used by the harness and
//! tests.

use crate::InvalidRangeError;
use crate::Span;

/// One line of a document, without its terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Absolute offset of the first byte of the line.
    pub start: u32,
    pub text: &'a str,
}

impl SourceLine<'_> {
    /// Document span covered by the line text (terminator excluded).
    pub fn span(&self) -> Span {
        Span::with_len(self.start, u32::try_from(self.text.len()).unwrap_or(u32::MAX))
    }
}

/// Read access to a document.
pub trait TextSource {
    /// The complete document text.
    fn text(&self) -> &str;

    /// The line containing `offset`.
    ///
    /// `offset == text().len()` resolves to the last line. Offsets past the
    /// end are an [`InvalidRangeError`].
    fn line_at(&self, offset: u32) -> Result<SourceLine<'_>, InvalidRangeError>;

    /// Document length in bytes.
    fn len(&self) -> u32 {
        u32::try_from(self.text().len()).unwrap_or(u32::MAX)
    }

    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// In-memory document with a precomputed line table.
#[derive(Clone, Debug)]
pub struct SourceText<'a> {
    text: &'a str,
    /// Byte offsets where each line starts. `line_starts[0]` is always 0.
    line_starts: Vec<u32>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            memchr::memchr_iter(b'\n', text.as_bytes())
                .filter_map(|i| u32::try_from(i + 1).ok()),
        );
        SourceText { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// All lines, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = SourceLine<'a>> + '_ {
        (0..self.line_starts.len()).map(move |idx| self.line(idx))
    }

    /// Convert a byte offset to a 1-based `(line, column)` pair.
    ///
    /// Columns count bytes. Offsets past the end land on the last line.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let idx = self.line_index(offset);
        let line = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        (line, offset - self.line_starts[idx] + 1)
    }

    fn line_index(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(i) => i,      // Exact match at line start
            Err(i) => i - 1, // Between line starts
        }
    }

    fn line(&self, idx: usize) -> SourceLine<'a> {
        let start = self.line_starts[idx];
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.text.len(), |&next| next as usize - 1);
        let raw = &self.text[start as usize..end];
        SourceLine {
            start,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        }
    }
}

impl TextSource for SourceText<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn line_at(&self, offset: u32) -> Result<SourceLine<'_>, InvalidRangeError> {
        if offset as usize > self.text.len() {
            return Err(InvalidRangeError {
                span: Span::new(offset, offset),
                len: self.len(),
            });
        }
        Ok(self.line(self.line_index(offset)))
    }
}

impl TextSource for str {
    fn text(&self) -> &str {
        self
    }

    fn line_at(&self, offset: u32) -> Result<SourceLine<'_>, InvalidRangeError> {
        let at = offset as usize;
        if at > self.len() {
            return Err(InvalidRangeError {
                span: Span::new(offset, offset),
                len: TextSource::len(self),
            });
        }
        let start = memchr::memrchr(b'\n', &self.as_bytes()[..at]).map_or(0, |i| i + 1);
        let end = memchr::memchr(b'\n', &self.as_bytes()[at..]).map_or(self.len(), |i| at + i);
        let raw = &self[start..end];
        Ok(SourceLine {
            start: u32::try_from(start).unwrap_or(u32::MAX),
            text: raw.strip_suffix('\r').unwrap_or(raw),
        })
    }
}
