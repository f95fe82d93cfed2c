use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::token::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a variable reference, or a compound update when the name is
    /// followed by `++`, `--`, `+=` or `-=`.
    ///
    /// `x++` and `x--` are read as `x += 1` and `x -= 1`.
    pub(super) fn parse_variable(&mut self, name: String) -> ParseResult<Expr> {
        let (op, explicit) = match self.peek().map(|t| t.kind) {
            Some(TokenKind::Increment) => (BinaryOperator::Add, false),
            Some(TokenKind::Decrement) => (BinaryOperator::Sub, false),
            Some(TokenKind::PlusAssign) => (BinaryOperator::Add, true),
            Some(TokenKind::MinusAssign) => (BinaryOperator::Sub, true),
            _ => return Ok(Expr::Variable { name }),
        };
        self.pos += 1;

        let value = if explicit { self.parse_expression()? } else { Expr::literal(1.0) };

        Ok(Expr::CompoundAssignment { name,
                                      op,
                                      value: Box::new(value) })
    }

    /// Splits an `import` directive `name-type` into its parts.
    ///
    /// A directive without `-` declares an empty type.
    pub(super) fn parse_import(directive: &str) -> Expr {
        let (name, kind) = directive.split_once('-').unwrap_or((directive, ""));
        Expr::Import { name: name.to_string(),
                       kind: kind.to_string() }
    }
}
