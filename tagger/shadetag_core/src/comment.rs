//! Textual comment detection.
//!
//! There is no comment state machine. Whether an offset is inside a comment
//! is answered by looking backwards for the nearest markers:
//!
//! - **Block**: the last open marker before the offset is later than the last
//!   close marker before it (or there is no close marker at all).
//! - **Line**: a line marker appears between the start of the offset's line
//!   and the offset.
//!
//! Nesting is not tracked, and markers inside string literals count like any
//! other text, so `"*/"` in a string can end a block comment early.

use memchr::memmem;

/// Comment markers of a language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentSyntax {
    pub block_open: Box<str>,
    pub block_close: Box<str>,
    pub line: Box<str>,
}

impl CommentSyntax {
    /// `/* ... */` block comments and `//` line comments.
    pub fn c_style() -> Self {
        CommentSyntax {
            block_open: "/*".into(),
            block_close: "*/".into(),
            line: "//".into(),
        }
    }

    /// Is `offset` inside a block comment of `text`?
    ///
    /// Only markers that end at or before `offset` are considered.
    pub fn in_block_comment(&self, text: &str, offset: usize) -> bool {
        let before = &text.as_bytes()[..offset];
        let open = memmem::rfind(before, self.block_open.as_bytes());
        let close = memmem::rfind(before, self.block_close.as_bytes());
        // `None < Some(_)`, so a lone open marker counts as inside.
        open > close
    }

    /// Is `offset` inside a line comment that starts at or after `line_start`?
    pub fn in_line_comment(&self, text: &str, line_start: usize, offset: usize) -> bool {
        let window = &text.as_bytes()[line_start..offset];
        memmem::rfind(window, self.line.as_bytes()).is_some()
    }

    /// Either kind of comment.
    pub fn in_comment(&self, text: &str, line_start: usize, offset: usize) -> bool {
        self.in_block_comment(text, offset) || self.in_line_comment(text, line_start, offset)
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::c_style()
    }
}
