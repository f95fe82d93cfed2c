use crate::{
    error::ParseError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Upper bound on the items of one parameter or argument list.
pub(super) const LIST_LIMIT: usize = 30;

impl Parser {
    /// Current token of the statement, if any.
    pub(super) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns `true` if the current token has kind `kind`.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.is(kind))
    }

    /// Consumes and returns the current token.
    pub(super) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the current token if it has kind `kind`.
    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.pos += 1;
        }
        matched
    }

    /// Consumes the delimiter `expected`, which must be the current token.
    ///
    /// # Errors
    /// `MissingDelimiter` naming `expected` and the construct being parsed.
    pub(super) fn expect(&mut self,
                         kind: TokenKind,
                         expected: char,
                         context: &'static str)
                         -> ParseResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(ParseError::MissingDelimiter { expected, context })
        }
    }
}
