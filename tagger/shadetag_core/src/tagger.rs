//! The keyword tagger.
//!
//! [`KeywordTagger`] holds the frozen tables of one language variant.
//! [`KeywordTagger::tags`] turns a list of requested spans into a lazy
//! [`Tags`] iterator; nothing is computed until the host pulls.
//!
//! # Scan granularity
//!
//! Each requested span is resolved to the single line containing its start.
//! A span that runs over several lines only has its first line scanned; the
//! host requests one span per visible line, so the remainder is normally
//! requested separately.

use crate::{
    CommentSyntax, DelimiterSet, InvalidRangeError, KeywordSet, SourceText, Span, TagCategory,
    TagResult, TextSource, Token, Tokens,
};

/// Classifies reserved words of one language.
///
/// Immutable once built; share it freely between threads.
#[derive(Clone, Debug)]
pub struct KeywordTagger {
    keywords: KeywordSet,
    builtins: Option<KeywordSet>,
    delimiters: DelimiterSet,
    comments: CommentSyntax,
}

impl KeywordTagger {
    /// Tagger with a single [`TagCategory::Keyword`] vocabulary, C-family
    /// delimiters and C-style comments.
    pub fn new(keywords: KeywordSet) -> Self {
        KeywordTagger {
            keywords,
            builtins: None,
            delimiters: DelimiterSet::c_family(),
            comments: CommentSyntax::c_style(),
        }
    }

    /// Add a secondary vocabulary reported as [`TagCategory::BuiltinMacro`].
    #[must_use]
    pub fn with_builtins(mut self, builtins: KeywordSet) -> Self {
        self.builtins = Some(builtins);
        self
    }

    #[must_use]
    pub fn with_delimiters(mut self, delimiters: DelimiterSet) -> Self {
        self.delimiters = delimiters;
        self
    }

    #[must_use]
    pub fn with_comments(mut self, comments: CommentSyntax) -> Self {
        self.comments = comments;
        self
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn builtins(&self) -> Option<&KeywordSet> {
        self.builtins.as_ref()
    }

    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    pub fn comments(&self) -> &CommentSyntax {
        &self.comments
    }

    /// Category of `word`, if it is in either vocabulary.
    ///
    /// The primary set wins when a word is in both.
    pub fn classify(&self, word: &str) -> Option<TagCategory> {
        if self.keywords.contains(word) {
            Some(TagCategory::Keyword)
        } else if self.builtins.as_ref().is_some_and(|b| b.contains(word)) {
            Some(TagCategory::BuiltinMacro)
        } else {
            None
        }
    }

    /// Tag the keywords that intersect `spans` in `source`.
    ///
    /// `spans` should be ordered and non-overlapping. The returned iterator
    /// yields tags in span order, then left to right. An out-of-range span
    /// yields one [`InvalidRangeError`] and ends the sequence; tags already
    /// yielded for earlier spans stand.
    pub fn tags<'a, S, I>(&'a self, spans: I, source: &'a S) -> Tags<'a, S, I::IntoIter>
    where
        S: TextSource + ?Sized,
        I: IntoIterator<Item = Span>,
    {
        Tags {
            tagger: self,
            source,
            spans: spans.into_iter(),
            scan: None,
            last: None,
            done: false,
        }
    }

    /// Tag every line of `source`.
    pub fn tag_all<'a>(
        &'a self,
        source: &'a SourceText<'a>,
    ) -> impl Iterator<Item = TagResult> + 'a {
        // Line spans always lie inside the document, so no error can occur.
        self.tags(source.lines().map(|line| line.span()), source)
            .filter_map(Result::ok)
    }

    fn tag_token(&self, text: &str, scan: &LineScan<'_>, token: Token<'_>) -> Option<TagResult> {
        let span = token.span();
        if !span.intersects(scan.requested) {
            return None;
        }
        let category = self.classify(token.text)?;
        if self
            .comments
            .in_comment(text, scan.line_start as usize, token.offset as usize)
        {
            tracing::trace!(token = token.text, offset = token.offset, "suppressed in comment");
            return None;
        }
        tracing::trace!(token = token.text, offset = token.offset, %category, "tagged");
        Some(TagResult {
            offset: span.start,
            len: span.len(),
            category,
        })
    }
}

/// Scan state for the line of the current requested span.
#[derive(Clone, Debug)]
struct LineScan<'a> {
    requested: Span,
    line_start: u32,
    tokens: Tokens<'a, 'a>,
}

/// Lazy sequence of tags produced by [`KeywordTagger::tags`].
///
/// A clone continues from the same position; call `tags` again to restart.
#[derive(Debug)]
pub struct Tags<'a, S: ?Sized, I> {
    tagger: &'a KeywordTagger,
    source: &'a S,
    spans: I,
    scan: Option<LineScan<'a>>,
    /// Last tag yielded. A token straddling two adjacent requested spans
    /// intersects both; it is reported once.
    last: Option<TagResult>,
    done: bool,
}

impl<S: ?Sized, I: Clone> Clone for Tags<'_, S, I> {
    fn clone(&self) -> Self {
        Tags {
            tagger: self.tagger,
            source: self.source,
            spans: self.spans.clone(),
            scan: self.scan.clone(),
            last: self.last,
            done: self.done,
        }
    }
}

impl<'a, S, I> Tags<'a, S, I>
where
    S: TextSource + ?Sized,
{
    fn start_scan(&self, requested: Span) -> Result<LineScan<'a>, InvalidRangeError> {
        let (tagger, source): (&'a KeywordTagger, &'a S) = (self.tagger, self.source);
        InvalidRangeError::check(requested, source.len())?;
        let line = source.line_at(requested.start)?;
        Ok(LineScan {
            requested,
            line_start: line.start,
            tokens: tagger.delimiters.tokens(line.text, line.start),
        })
    }
}

impl<S, I> Iterator for Tags<'_, S, I>
where
    S: TextSource + ?Sized,
    I: Iterator<Item = Span>,
{
    type Item = Result<TagResult, InvalidRangeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(scan) = &mut self.scan {
                let text = self.source.text();
                while let Some(token) = scan.tokens.next() {
                    let Some(tag) = self.tagger.tag_token(text, scan, token) else {
                        continue;
                    };
                    if self.last == Some(tag) {
                        continue;
                    }
                    self.last = Some(tag);
                    return Some(Ok(tag));
                }
                self.scan = None;
            }

            let Some(requested) = self.spans.next() else {
                self.done = true;
                return None;
            };
            match self.start_scan(requested) {
                Ok(scan) => self.scan = Some(scan),
                Err(err) => {
                    tracing::debug!(%err, "requested span rejected");
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<S, I> std::iter::FusedIterator for Tags<'_, S, I>
where
    S: TextSource + ?Sized,
    I: Iterator<Item = Span>,
{
}
