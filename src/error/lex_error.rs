/// A position in the whitespace-stripped source where no matcher fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset into the stripped source.
    pub position:  usize,
    /// The character that was skipped.
    pub character: char,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "No token matches '{}' at offset {}; skipping it.",
               self.character, self.position)
    }
}

impl std::error::Error for LexError {}
