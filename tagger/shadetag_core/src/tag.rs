//! Classification output.

use std::fmt;

use crate::Span;

/// Semantic category of a tagged token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagCategory {
    /// Reserved word of the language (types, qualifiers, address spaces).
    Keyword,
    /// Predefined macro or constant (OpenCL C `M_PI_F`, `CLK_*`, ...).
    BuiltinMacro,
}

impl TagCategory {
    pub const fn name(self) -> &'static str {
        match self {
            TagCategory::Keyword => "keyword",
            TagCategory::BuiltinMacro => "builtin-macro",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified token, handed to the host for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TagResult {
    /// Absolute document offset of the token.
    pub offset: u32,
    /// Token length in bytes.
    pub len: u32,
    pub category: TagCategory,
}

impl TagResult {
    #[inline]
    pub fn span(&self) -> Span {
        Span::with_len(self.offset, self.len)
    }
}

impl fmt::Display for TagResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span(), self.category)
    }
}
