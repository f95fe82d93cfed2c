use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::token::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Binding strength of the ternary `?`.
const TERNARY_PRECEDENCE: u8 = 5;

/// What an infix token does in an expression.
enum Infix {
    Binary(BinaryOperator),
    Ternary,
}

impl Infix {
    const fn from_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
                 TokenKind::Plus => Self::Binary(BinaryOperator::Add),
                 TokenKind::Minus => Self::Binary(BinaryOperator::Sub),
                 TokenKind::Star => Self::Binary(BinaryOperator::Mul),
                 TokenKind::Slash => Self::Binary(BinaryOperator::Div),
                 TokenKind::Percent => Self::Binary(BinaryOperator::Mod),
                 TokenKind::Caret => Self::Binary(BinaryOperator::Pow),
                 TokenKind::Less => Self::Binary(BinaryOperator::Less),
                 TokenKind::Greater => Self::Binary(BinaryOperator::Greater),
                 TokenKind::Question => Self::Ternary,
                 _ => return None,
             })
    }

    const fn precedence(&self) -> u8 {
        match self {
            Self::Binary(op) => op.precedence(),
            Self::Ternary => TERNARY_PRECEDENCE,
        }
    }
}

impl Parser {
    /// Parses operators binding at least as tightly as `min_precedence`.
    ///
    /// Precedence, low to high: `+ -`, `* / %`, `?:`, `< >`, `^`. Operators
    /// of equal precedence associate to the left. A `?` consumes the rest of
    /// the expression as its two branches.
    ///
    /// # Parameters
    /// - `min_precedence`: Weakest operator this call may consume.
    ///
    /// # Returns
    /// The parsed expression node.
    ///
    /// # Errors
    /// - `MissingTernaryColon` if a `?` has no matching `:`.
    /// - Propagates any errors from operand parsing.
    pub(super) fn parse_binary(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;

        while let Some(infix) = self.peek().and_then(|t| Infix::from_kind(t.kind)) {
            let precedence = infix.precedence();
            if precedence < min_precedence {
                break;
            }
            self.pos += 1;

            match infix {
                Infix::Ternary => {
                    let then_branch = self.parse_expression()?;
                    if !self.eat(TokenKind::Colon) {
                        return Err(ParseError::MissingTernaryColon);
                    }
                    let else_branch = self.parse_expression()?;

                    return Ok(Expr::Ternary { condition:   Box::new(left),
                                              then_branch: Box::new(then_branch),
                                              else_branch: Box::new(else_branch), });
                },
                Infix::Binary(op) => {
                    let right = self.parse_binary(precedence + 1)?;
                    left = Expr::Binary { left: Box::new(left),
                                          op,
                                          right: Box::new(right) };
                },
            }
        }

        Ok(left)
    }
}
