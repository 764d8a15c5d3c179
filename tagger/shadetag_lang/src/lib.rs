//! Language variants for the shadetag keyword tagger.
//!
//! Two variants ship:
//!
//! | Variant | Primary set | Secondary set |
//! |---------|-------------|---------------|
//! | [`Language::Glsl`] | GLSL keywords | none |
//! | [`Language::OpenCl`] | OpenCL C keywords + reserved types | predefined macros/constants |
//!
//! The tables are `const` arrays. They are frozen into a [`KeywordTagger`]
//! the first time a variant is used and shared for the rest of the process.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use shadetag_core::{KeywordSet, KeywordTagger};
use thiserror::Error;

pub mod glsl;
pub mod opencl;

/// A supported shading/compute language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Glsl,
    OpenCl,
}

/// Language name that is neither `glsl` nor `opencl`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown language `{0}` (expected `glsl` or `opencl`)")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::Glsl, Language::OpenCl];

    pub const fn name(self) -> &'static str {
        match self {
            Language::Glsl => "glsl",
            Language::OpenCl => "opencl",
        }
    }

    /// Guess the language from a file extension (without the dot).
    ///
    /// Covers the `.glsl` family and the per-stage extensions used by
    /// `glslang` (`vert`, `frag`, ...), plus `.cl` for OpenCL C.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext.to_ascii_lowercase().as_str() {
            "glsl" | "vert" | "frag" | "geom" | "tesc" | "tese" | "comp" | "vs" | "fs" | "gs" => {
                Some(Language::Glsl)
            }
            "cl" | "ocl" => Some(Language::OpenCl),
            _ => None,
        }
    }

    /// The process-wide tagger for this language.
    pub fn tagger(self) -> &'static KeywordTagger {
        static GLSL: OnceLock<KeywordTagger> = OnceLock::new();
        static OPENCL: OnceLock<KeywordTagger> = OnceLock::new();
        match self {
            Language::Glsl => GLSL.get_or_init(|| self.build_tagger()),
            Language::OpenCl => OPENCL.get_or_init(|| self.build_tagger()),
        }
    }

    /// Build a fresh tagger from the static tables.
    pub fn build_tagger(self) -> KeywordTagger {
        let tagger = match self {
            Language::Glsl => KeywordTagger::new(KeywordSet::new(glsl::KEYWORDS.iter().copied())),
            Language::OpenCl => {
                let keywords = opencl::KEYWORDS
                    .iter()
                    .chain(opencl::RESERVED_TYPES)
                    .copied();
                KeywordTagger::new(KeywordSet::new(keywords))
                    .with_builtins(KeywordSet::new(opencl::BUILTIN_CONSTANTS.iter().copied()))
            }
        };
        tracing::debug!(
            language = self.name(),
            keywords = tagger.keywords().len(),
            builtins = tagger.builtins().map_or(0, KeywordSet::len),
            "built keyword tables"
        );
        tagger
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "glsl" => Ok(Language::Glsl),
            "opencl" | "cl" => Ok(Language::OpenCl),
            _ => Err(UnknownLanguage(s.to_owned())),
        }
    }
}
