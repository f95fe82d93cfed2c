/// A position inside whitespace-stripped source text.
///
/// `Cursor` is `Copy`: a matcher's speculative test runs on a copy and the
/// caller's position is untouched, while the committing scan runs on the
/// tokenizer's own cursor.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'src> {
    text: &'src str,
    pos:  usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub const fn new(text: &'src str) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Unread input.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.text[self.pos..]
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the next one.
    #[must_use]
    pub fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consumes one character and returns it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `len` bytes and returns them.
    pub fn advance(&mut self, len: usize) -> &'src str {
        let end = (self.pos + len).min(self.text.len());
        let slice = &self.text[self.pos..end];
        self.pos = end;
        slice
    }

    /// Consumes `prefix` if the unread input starts with it.
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    pub fn take_while<P>(&mut self, pred: P) -> &'src str
        where P: Fn(char) -> bool
    {
        let rest = self.rest();
        let len = rest.find(|c| !pred(c)).unwrap_or(rest.len());
        self.advance(len)
    }
}

/// Removes whitespace outside double-quoted literals.
///
/// Scripts are tokenized without whitespace, so `let x = 1` and `letx=1`
/// produce the same tokens.
///
/// # Example
/// ```
/// use ascent::interpreter::lexer::cursor::strip_whitespace;
///
/// assert_eq!(strip_whitespace("let s = \"a b\";\n"), "lets=\"a b\";");
/// ```
#[must_use]
pub fn strip_whitespace(source: &str) -> String {
    let mut quoted = false;
    source.chars()
          .filter(|&c| {
              if c == '"' {
                  quoted = !quoted;
              }
              quoted || c == '"' || !c.is_whitespace()
          })
          .collect()
}

/// Returns `true` for characters allowed in declared names.
#[must_use]
pub fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
