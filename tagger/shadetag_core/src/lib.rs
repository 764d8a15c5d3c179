//! Keyword tagging engine for editor syntax highlighting.
//!
//! `shadetag_core` classifies reserved words in source text on behalf of a
//! host editor. The host supplies the document text and the spans it wants
//! highlighted; the engine answers with a lazy sequence of [`TagResult`]s.
//!
//! # Pipeline
//!
//! For every requested [`Span`]:
//!
//! 1. Resolve the line containing the span's start ([`TextSource::line_at`]).
//! 2. Split that line on a [`DelimiterSet`] into [`Token`]s.
//! 3. Look each token up in the primary [`KeywordSet`] (category
//!    [`TagCategory::Keyword`]) and then the optional secondary set
//!    ([`TagCategory::BuiltinMacro`]).
//! 4. Drop matches that start inside a comment ([`CommentSyntax`]).
//! 5. Yield a tag for each survivor that overlaps the requested span.
//!
//! The classifier is stateless: the tables are frozen at construction and the
//! text is only read, so a [`KeywordTagger`] can be shared across threads.
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=shadetag_core=trace` to see every emitted and
//! suppressed token.

mod comment;
mod delimiter;
mod error;
mod keyword_set;
mod source_text;
mod span;
mod tag;
mod tagger;

pub use comment::CommentSyntax;
pub use delimiter::{DelimiterSet, Token, Tokens};
pub use error::InvalidRangeError;
pub use keyword_set::KeywordSet;
pub use source_text::{SourceLine, SourceText, TextSource};
pub use span::Span;
pub use tag::{TagCategory, TagResult};
pub use tagger::{KeywordTagger, Tags};
