use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::token::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            utils::LIST_LIMIT,
        },
    },
    util::num::parse_number_literal,
};

impl Parser {
    /// Parses one operand followed by any chain of `.member` accesses and an
    /// optional member write.
    ///
    /// Grammar (simplified):
    /// ```text
    /// primary := atom ("." name)* ("=" expression)?
    /// ```
    /// The trailing `= expression` is only accepted after an access.
    ///
    /// # Errors
    /// - `UnexpectedEndOfStatement` if the statement ends where an operand is
    ///   required.
    /// - `UnexpectedToken` if the current token cannot start an operand.
    pub(super) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_atom()?;

        while self.check(TokenKind::Access) {
            let member = self.advance().map(|t| t.text).unwrap_or_default();
            expr = Expr::Access { target: Box::new(expr),
                                  member };
        }

        match expr {
            Expr::Access { target, member } if self.eat(TokenKind::Equals) => {
                let value = self.parse_expression()?;
                Ok(Expr::MemberWrite { target,
                                       member,
                                       value: Box::new(value) })
            },
            expr => Ok(expr),
        }
    }

    fn parse_atom(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.advance() else {
            return Err(ParseError::UnexpectedEndOfStatement { context: "expression" });
        };

        match token.kind {
            TokenKind::Number => Ok(Expr::literal(parse_number_literal(&token.text)?)),
            TokenKind::Text => Ok(Expr::Literal { value: LiteralValue::Text(token.text) }),
            TokenKind::True => Ok(Expr::literal(true)),
            TokenKind::False => Ok(Expr::literal(false)),
            TokenKind::Query => Ok(Expr::Query { name: token.text }),
            TokenKind::Variable => self.parse_variable(token.text),
            TokenKind::LeftParen => {
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen, ')', "parenthesised expression")?;
                Ok(inner)
            },
            TokenKind::LeftBracket => {
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightBracket, ']', "bracketed expression")?;
                Ok(inner)
            },
            TokenKind::Call => self.parse_call(token.text),
            TokenKind::Function => self.parse_function(token.text),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::LeftScope => Ok(Expr::Block { body: self.parse_body()? }),
            TokenKind::Let => Ok(Expr::Let { name:  token.text,
                                             value: Box::new(self.parse_expression()?), }),
            TokenKind::Assign => Ok(Expr::Assign { name:  token.text,
                                                   value: Box::new(self.parse_expression()?), }),
            TokenKind::Return => Ok(Expr::Return { value: Box::new(self.parse_expression()?) }),
            TokenKind::Namespace => Ok(Expr::Namespace { name: token.text }),
            TokenKind::Using => Ok(Expr::Using { name: token.text }),
            TokenKind::Import => Ok(Self::parse_import(&token.text)),
            _ => Err(ParseError::UnexpectedToken { token: token.text }),
        }
    }

    /// Parses `name(arg, ...)` after the name.
    ///
    /// # Errors
    /// `MissingDelimiter` if the `(` or `)` is missing, or if the list grows
    /// past the argument limit without closing.
    fn parse_call(&mut self, name: String) -> ParseResult<Expr> {
        self.expect(TokenKind::LeftParen, '(', "function call")?;

        let mut arguments = Vec::new();
        while !self.check(TokenKind::RightParen) && arguments.len() < LIST_LIMIT {
            arguments.push(self.parse_expression()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::RightParen, ')', "function call")?;
        Ok(Expr::Call { name, arguments })
    }
}
