use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDefinition},
    error::ParseError,
    interpreter::{
        lexer::token::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            utils::LIST_LIMIT,
        },
    },
};

/// Most statements one body may hold before its `}` is found.
pub const BODY_LIMIT: usize = 64;

impl Parser {
    /// Pulls the statements of a body from the work queue.
    ///
    /// Must be called right after the `{` that ends a header statement. The
    /// current statement is saved and restored around the body, so the
    /// caller continues where it left off.
    ///
    /// # Returns
    /// The body statements, without the closing marker.
    ///
    /// # Errors
    /// - `MissingDelimiter` if the input ends before the `}` marker.
    /// - `BodyTooLong` if no marker is found within `BODY_LIMIT` statements.
    /// - Propagates any errors from the body statements.
    pub(super) fn parse_body(&mut self) -> ParseResult<Vec<Expr>> {
        let header = std::mem::take(&mut self.tokens);
        let resume = self.pos;

        let mut body = Vec::new();
        loop {
            let Some(statement) = self.next_statement() else {
                return Err(ParseError::MissingDelimiter { expected: '}',
                                                          context:  "body" });
            };
            if let [token] = statement.as_slice()
               && token.is(TokenKind::RightScope)
            {
                break;
            }
            if body.len() == BODY_LIMIT {
                return Err(ParseError::BodyTooLong { limit: BODY_LIMIT });
            }
            self.load(statement);
            body.push(self.parse_statement()?);
        }

        self.tokens = header;
        self.pos = resume;
        Ok(body)
    }

    /// Parses `function name(p, ...){ body }` after the name and registers
    /// the function with its parameters.
    ///
    /// # Errors
    /// - `DuplicateFunction` if `name` is already declared in this program.
    /// - `MissingDelimiter` for a missing `(`, `)` or `{`.
    pub(super) fn parse_function(&mut self, name: String) -> ParseResult<Expr> {
        self.expect(TokenKind::LeftParen, '(', "function definition")?;

        let mut params = Vec::new();
        while params.len() < LIST_LIMIT
              && let Some(token) = self.peek()
              && matches!(token.kind, TokenKind::Parameter | TokenKind::Variable)
        {
            params.push(token.text.clone());
            self.pos += 1;
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen, ')', "function definition")?;

        if self.functions.contains_key(&name) {
            return Err(ParseError::DuplicateFunction { name });
        }
        self.functions.insert(name.clone(), FunctionDefinition::new(params));

        self.expect(TokenKind::LeftScope, '{', "function definition")?;
        let body = self.parse_body()?;

        Ok(Expr::FunctionDefinition { name,
                                      body: Rc::from(body) })
    }

    /// Parses `for(init; condition; step){ body }` after `for`.
    ///
    /// # Errors
    /// `MissingDelimiter` for any missing `(`, `;`, `)` or `{`.
    pub(super) fn parse_for(&mut self) -> ParseResult<Expr> {
        self.expect(TokenKind::LeftParen, '(', "for loop")?;
        let init = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, ';', "for loop")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, ';', "for loop")?;
        let step = self.parse_expression()?;
        self.expect(TokenKind::RightParen, ')', "for loop")?;

        self.expect(TokenKind::LeftScope, '{', "for loop")?;
        let body = self.parse_body()?;

        Ok(Expr::For { init: Box::new(init),
                       condition: Box::new(condition),
                       step: Box::new(step),
                       body })
    }

    /// Parses `while(condition){ body }` after `while`.
    ///
    /// # Errors
    /// `MissingDelimiter` for any missing `(`, `)` or `{`.
    pub(super) fn parse_while(&mut self) -> ParseResult<Expr> {
        self.expect(TokenKind::LeftParen, '(', "while loop")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParen, ')', "while loop")?;

        self.expect(TokenKind::LeftScope, '{', "while loop")?;
        let body = self.parse_body()?;

        Ok(Expr::While { condition: Box::new(condition),
                         body })
    }
}
