//! Command-line host for the shadetag keyword tagger.
//!
//! Stands in for an editor: loads a file, asks the tagger about every line
//! (or about a byte range), and prints what would be highlighted.
//!
//! Enable tracing with `RUST_LOG=shadetag=debug,shadetag_core=trace`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Once;

use shadetag_core::{InvalidRangeError, SourceText, Span, TagResult, TextSource};
use shadetag_lang::{Language, UnknownLanguage};
use thiserror::Error;

/// Failures surfaced by the command-line host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
    #[error("cannot infer the language of `{}`; pass --lang=<glsl|opencl>", .0.display())]
    NoLanguage(PathBuf),
    #[error("malformed range `{0}` (expected <start>..<end>)")]
    BadRange(String),
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),
}

/// Options for [`tag_file`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// Language override; inferred from the extension when `None`.
    pub language: Option<Language>,
    /// Byte range to tag; the whole file when `None`.
    pub range: Option<Span>,
}

impl TagOptions {
    /// Parse `--lang=<name>` and `--range=<start>..<end>` arguments.
    pub fn parse(args: &[String]) -> Result<Self, HostError> {
        let mut options = TagOptions::default();
        for arg in args {
            if let Some(lang) = arg.strip_prefix("--lang=") {
                options.language = Some(lang.parse()?);
            } else if let Some(range) = arg.strip_prefix("--range=") {
                options.range = Some(parse_range(range)?);
            } else {
                tracing::warn!(arg = arg.as_str(), "ignoring unknown option");
            }
        }
        Ok(options)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Parse `<start>..<end>` into a span.
pub fn parse_range(s: &str) -> Result<Span, HostError> {
    let bad = || HostError::BadRange(s.to_owned());
    let (start, end) = s.split_once("..").ok_or_else(bad)?;
    let start = start.trim().parse().map_err(|_| bad())?;
    let end = end.trim().parse().map_err(|_| bad())?;
    Ok(Span::new(start, end))
}

/// Spans an editor would request to show `range`: one per line it touches,
/// clipped to the range.
///
/// A range outside the document is passed through unchanged so the tagger
/// reports it.
pub fn requested_spans(source: &SourceText<'_>, range: Option<Span>) -> Vec<Span> {
    let lines = source.lines().map(|line| line.span());
    match range {
        None => lines.collect(),
        Some(range) if range.start > range.end || range.end > source.len() => vec![range],
        Some(range) => lines
            .filter(|line| line.start <= range.end && range.start <= line.end)
            .map(|line| Span::new(line.start.max(range.start), line.end.min(range.end)))
            .collect(),
    }
}

/// Tag `text` as `language`.
pub fn tag_source(
    text: &str,
    language: Language,
    range: Option<Span>,
) -> Result<Vec<TagResult>, HostError> {
    let source = SourceText::new(text);
    let spans = requested_spans(&source, range);
    tracing::debug!(%language, spans = spans.len(), "tagging");
    let tags = language
        .tagger()
        .tags(spans, &source)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tags)
}

/// Read and tag a file; returns the text alongside its tags.
pub fn tag_file(
    path: &Path,
    options: &TagOptions,
) -> Result<(String, Vec<TagResult>), HostError> {
    let language = match options.language {
        Some(language) => language,
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Language::from_extension)
            .ok_or_else(|| HostError::NoLanguage(path.to_owned()))?,
    };
    let text = std::fs::read_to_string(path).map_err(|source| HostError::Io {
        path: path.to_owned(),
        source,
    })?;
    let tags = tag_source(&text, language, options.range)?;
    Ok((text, tags))
}

/// One line per tag: `line:col  start..end  category  word`.
///
/// Lines and columns are 1-based; columns count bytes.
pub fn render_tags(text: &str, tags: &[TagResult]) -> String {
    let source = SourceText::new(text);
    let mut out = String::new();
    for tag in tags {
        let (line_no, column) = source.line_col(tag.offset);
        let word = &text[tag.span().to_range()];
        let _ = writeln!(
            out,
            "{line_no}:{column}\t{}\t{}\t{word}",
            tag.span(),
            tag.category
        );
    }
    out
}

/// The vocabulary of `language`, one word per line, primary set first.
pub fn render_keywords(language: Language) -> String {
    let tagger = language.tagger();
    let mut out = String::new();
    for word in tagger.keywords().sorted() {
        let _ = writeln!(out, "keyword\t{word}");
    }
    if let Some(builtins) = tagger.builtins() {
        for word in builtins.sorted() {
            let _ = writeln!(out, "builtin-macro\t{word}");
        }
    }
    out
}
