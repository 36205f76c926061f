//! Highlighting - split text into matched and plain segments.

use crate::Matcher;

/// Whether a segment is a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Text outside any hit.
    Plain,
    /// Text covered by a hit.
    Matched,
}

/// A slice of the source text tagged as matched or plain.
///
/// Segment text borrows from the source, so the original casing is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    /// Plain segment.
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Plain,
        }
    }

    /// Matched segment.
    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Matched,
        }
    }

    /// Whether this segment is a hit.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.kind == SegmentKind::Matched
    }
}

/// Split `text` at the boundaries of every hit found by `matcher`.
///
/// With no matcher the whole text comes back as a single plain segment.
/// Otherwise zero-length segments are omitted. Concatenating the segment
/// texts always reproduces `text` exactly.
pub fn highlight<'a, M>(text: &'a str, matcher: Option<&M>) -> Vec<Segment<'a>>
where
    M: Matcher + ?Sized,
{
    let Some(matcher) = matcher else {
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for span in matcher.find_spans(text) {
        if span.is_empty() {
            continue;
        }
        if span.start > cursor {
            segments.push(Segment::plain(&text[cursor..span.start]));
        }
        segments.push(Segment::matched(&text[span.clone()]));
        cursor = span.end;
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}
