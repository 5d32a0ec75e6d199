//! Splits a transcript into one raw chunk per entry.
//!
//! A chunk runs from one recognized header to the next header, or to the end
//! of the input. Continuation lines of a multi-line message therefore stay
//! attached to the entry they belong to. Text before the first header (some
//! exports start with a banner line) is kept aside as the *preamble*, so
//! `preamble + chunks` always reconstructs the input byte for byte.

use std::iter::Peekable;

use regex::CaptureMatches;

use super::header::{HEADER_RE, HeaderFields, fields_from_captures};

/// A contiguous slice of the transcript starting at an entry header.
///
/// The header fields were captured when the chunk boundary was found, so a
/// chunk can't exist without a recognized header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    offset: usize,
    text: &'a str,
    header_len: usize,
    header: HeaderFields<'a>,
}

impl<'a> RawChunk<'a> {
    /// Byte offset of the chunk in the original input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Full chunk text, header included.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The header fields that opened this chunk.
    pub fn header(&self) -> HeaderFields<'a> {
        self.header
    }

    /// Everything after the header, untrimmed. May span several lines.
    pub fn body(&self) -> &'a str {
        &self.text[self.header_len..]
    }
}

/// Lazy iterator over the chunks of a transcript.
///
/// Created by [`chunks`].
pub struct Chunks<'a> {
    text: &'a str,
    headers: Peekable<CaptureMatches<'static, 'a>>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = RawChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.headers.next()?;
        let whole = caps.get(0)?;
        let end = self
            .headers
            .peek()
            .and_then(|next| next.get(0))
            .map_or(self.text.len(), |m| m.start());

        Some(RawChunk {
            offset: whole.start(),
            text: &self.text[whole.start()..end],
            header_len: whole.len(),
            header: fields_from_captures(&caps),
        })
    }
}

/// A transcript cut at every entry boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation<'a> {
    /// Text before the first header. Empty for well-formed exports.
    pub preamble: &'a str,
    /// One chunk per entry, in input order.
    pub chunks: Vec<RawChunk<'a>>,
}

impl Segmentation<'_> {
    /// Rebuilds the original input from the preamble and the chunks.
    pub fn reassemble(&self) -> String {
        let mut out = String::with_capacity(
            self.preamble.len() + self.chunks.iter().map(|c| c.text.len()).sum::<usize>(),
        );
        out.push_str(self.preamble);
        for chunk in &self.chunks {
            out.push_str(chunk.text);
        }
        out
    }
}

/// Returns a lazy iterator over the entry chunks of `text`.
///
/// Yields nothing when `text` has no header.
pub fn chunks(text: &str) -> Chunks<'_> {
    Chunks {
        text,
        headers: HEADER_RE.captures_iter(text).peekable(),
    }
}

/// Cuts `text` into its preamble and entry chunks.
///
/// # Example
///
/// ```rust
/// use chatsift::parsing::segment;
///
/// let text = "01/02/23, 9:05 AM - Alice: Hello\nsecond line\n01/02/23, 9:06 AM - Bob: Hi";
/// let seg = segment(text);
///
/// assert_eq!(seg.chunks.len(), 2);
/// assert_eq!(seg.chunks[0].body(), "Alice: Hello\nsecond line\n");
/// assert_eq!(seg.reassemble(), text);
/// ```
pub fn segment(text: &str) -> Segmentation<'_> {
    let chunks: Vec<RawChunk<'_>> = chunks(text).collect();
    let preamble_end = chunks.first().map_or(text.len(), |c| c.offset);

    Segmentation {
        preamble: &text[..preamble_end],
        chunks,
    }
}

/// Returns `true` if `text` contains at least one entry header.
///
/// Callers use this to reject input that isn't a chat export before running
/// the full pipeline.
pub fn has_header(text: &str) -> bool {
    HEADER_RE.is_match(text)
}
