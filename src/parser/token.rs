//! Brace tokenizer for locating the patterns object

/// A span in the comment-stripped settings text (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (the opening brace)
    pub start: usize,
    /// End byte offset, exclusive (one past the closing brace)
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice the span out of `text`
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Kind of token the scanner cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    Open,
    /// `}`
    Close,
    /// A double-quoted string literal, quotes included
    Str,
}

/// A structural token with its byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Kind of token
    pub kind: TokenKind,
    /// Location in the scanned text
    pub span: Span,
}

/// Streaming tokenizer over the structural characters of a JSON-like text
///
/// Everything other than braces and string literals is skipped. String
/// literals are consumed whole so braces inside them never count. A string
/// also ends at a newline: comment stripping can cut a value like
/// `"http://x"` short, and the rest of the file must still be scanned.
#[allow(missing_copy_implementations)]
#[derive(Debug)]
pub struct Tokenizer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Start scanning `text` at byte offset `from`
    #[must_use]
    pub const fn new(text: &'a str, from: usize) -> Self {
        Self { bytes: text.as_bytes(), pos: from }
    }

    fn skip_string(&self, start: usize) -> usize {
        let mut i = start + 1;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => i += 2,
                b'"' => return i + 1,
                b'\n' => return i,
                _ => i += 1,
            }
        }
        self.bytes.len()
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.bytes.len() {
            let start = self.pos;
            match self.bytes[start] {
                b'{' => {
                    self.pos += 1;
                    return Some(Token { kind: TokenKind::Open, span: Span::new(start, self.pos) });
                },
                b'}' => {
                    self.pos += 1;
                    return Some(Token { kind: TokenKind::Close, span: Span::new(start, self.pos) });
                },
                b'"' => {
                    self.pos = self.skip_string(start);
                    return Some(Token { kind: TokenKind::Str, span: Span::new(start, self.pos) });
                },
                _ => self.pos += 1,
            }
        }
        None
    }
}

/// Find the balanced object starting at the brace at `open`
///
/// Returns `None` when the depth never returns to zero before the end of text.
#[must_use]
pub fn balanced_span(text: &str, open: usize) -> Option<Span> {
    let mut depth = 0usize;
    for token in Tokenizer::new(text, open) {
        match token.kind {
            TokenKind::Open => depth += 1,
            TokenKind::Close => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(Span::new(open, token.span.end));
                }
            },
            TokenKind::Str => {},
        }
    }
    None
}
