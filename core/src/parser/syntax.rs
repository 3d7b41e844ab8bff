use core::ops::Range;

use serde::Serialize;

/// Byte range into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span(pub Range<usize>);

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self(range)
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}
