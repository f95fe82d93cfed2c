use crate::interpreter::lexer::token::{Token, TokenKind};

/// A node of the statement tree built from a flat token stream.
///
/// A `Scope` holds the statements of one brace region. The header statement
/// of a `function`, `for` or `while` (ending in `{`) is the first child of
/// its scope and the closing `}` is kept as a single-token marker statement,
/// so the parser can find where a body ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenContainer {
    /// One statement, without its terminating `;`.
    Statement(Vec<Token>),
    /// A nested region in source order.
    Scope(Vec<TokenContainer>),
}

impl TokenContainer {
    /// Returns `true` for the single-token `}` marker.
    #[must_use]
    pub fn is_scope_close(&self) -> bool {
        matches!(self, Self::Statement(tokens) if tokens.len() == 1 && tokens[0].is(TokenKind::RightScope))
    }
}

/// Groups `tokens` into statements and scopes.
///
/// `;` ends a statement except inside parentheses, so the three clauses of
/// a `for` header stay together. End of input flushes whatever is pending
/// and closes every open scope.
///
/// # Example
/// ```
/// use ascent::interpreter::{
///     lexer::core::tokenize,
///     splitter::{TokenContainer, split},
/// };
///
/// let tokens = tokenize("let x = 0; while(x < 3){ x = x + 1; } x;", []).tokens;
/// let TokenContainer::Scope(root) = split(tokens) else { unreachable!() };
///
/// assert!(matches!(root[0], TokenContainer::Statement(_)));
/// let TokenContainer::Scope(body) = &root[1] else { panic!("expected a scope") };
/// assert_eq!(body.len(), 3);
/// assert!(body[2].is_scope_close());
/// assert_eq!(root.len(), 3);
/// ```
#[must_use]
pub fn split(tokens: Vec<Token>) -> TokenContainer {
    let mut splitter = Splitter { scopes:      vec![Vec::new()],
                                  buffer:      Vec::new(),
                                  parens:      0,
                                  header_open: false, };

    for token in tokens {
        splitter.push(token);
    }

    splitter.finish()
}

struct Splitter {
    scopes:      Vec<Vec<TokenContainer>>,
    buffer:      Vec<Token>,
    parens:      usize,
    header_open: bool,
}

impl Splitter {
    fn push(&mut self, token: Token) {
        match token.kind {
            kind if kind.opens_scope() => {
                self.flush();
                self.scopes.push(Vec::new());
                self.header_open = true;
                self.buffer.push(token);
            },
            TokenKind::LeftScope if self.header_open => {
                self.header_open = false;
                self.buffer.push(token);
                self.flush();
            },
            TokenKind::LeftScope => {
                self.flush();
                self.scopes.push(vec![TokenContainer::Statement(vec![token])]);
            },
            TokenKind::RightScope => {
                self.flush();
                self.current().push(TokenContainer::Statement(vec![token]));
                self.close();
            },
            TokenKind::LeftParen => {
                self.parens += 1;
                self.buffer.push(token);
            },
            TokenKind::RightParen => {
                self.parens = self.parens.saturating_sub(1);
                self.buffer.push(token);
            },
            TokenKind::Semicolon if self.parens == 0 => self.flush(),
            _ => self.buffer.push(token),
        }
    }

    fn current(&mut self) -> &mut Vec<TokenContainer> {
        if self.scopes.is_empty() {
            self.scopes.push(Vec::new());
        }
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let statement = TokenContainer::Statement(std::mem::take(&mut self.buffer));
            self.current().push(statement);
        }
    }

    fn close(&mut self) {
        if self.scopes.len() > 1
           && let Some(children) = self.scopes.pop()
        {
            self.current().push(TokenContainer::Scope(children));
        }
    }

    fn finish(mut self) -> TokenContainer {
        self.flush();
        while self.scopes.len() > 1 {
            self.close();
        }
        TokenContainer::Scope(self.scopes.pop().unwrap_or_default())
    }
}
