//! Tagging errors.

use thiserror::Error;

use crate::Span;

/// A requested span does not lie within the document.
///
/// This is a caller contract violation: the host asked about text that is
/// not there. The tagger yields it in place of further tags and stops.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("span {span} is outside the document (length {len})")]
pub struct InvalidRangeError {
    /// The offending requested span.
    pub span: Span,
    /// Length of the document in bytes.
    pub len: u32,
}

impl InvalidRangeError {
    /// Check `span` against a document of `len` bytes.
    pub(crate) fn check(span: Span, len: u32) -> Result<(), Self> {
        if span.start <= span.end && span.end <= len {
            Ok(())
        } else {
            Err(InvalidRangeError { span, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_spans_inside_document() {
        assert!(InvalidRangeError::check(Span::new(0, 10), 10).is_ok());
        assert!(InvalidRangeError::check(Span::new(10, 10), 10).is_ok());
    }

    #[test]
    fn rejects_span_past_end() {
        let err = InvalidRangeError::check(Span::new(5, 11), 10).unwrap_err();
        assert_eq!(err.span, Span::new(5, 11));
        assert_eq!(err.len, 10);
        assert_eq!(
            err.to_string(),
            "span 5..11 is outside the document (length 10)"
        );
    }

    #[test]
    fn rejects_inverted_span() {
        assert!(InvalidRangeError::check(Span::new(6, 2), 10).is_err());
    }
}
