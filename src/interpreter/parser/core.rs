use std::collections::{HashMap, VecDeque};

use crate::{
    ast::{Expr, FunctionDefinition},
    error::ParseError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        splitter::TokenContainer,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The output of parsing one program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    /// Top-level statements in source order.
    pub expressions: Vec<Expr>,
    /// Every declared function with its parameters; bodies are attached at
    /// evaluation time.
    pub functions:   HashMap<String, FunctionDefinition>,
}

/// Recursive-descent parser over a container tree.
///
/// Containers are consumed through a work queue: scopes are unrolled into
/// the front of the queue, so a construct that owns a body can pull the
/// following statements directly until it meets the `}` marker.
#[derive(Debug)]
pub struct Parser {
    queue:                VecDeque<TokenContainer>,
    pub(super) tokens:    Vec<Token>,
    pub(super) pos:       usize,
    pub(super) functions: HashMap<String, FunctionDefinition>,
}

impl Parser {
    /// Creates a parser whose queue is seeded with `root`.
    #[must_use]
    pub fn new(root: TokenContainer) -> Self {
        Self { queue:     VecDeque::from([root]),
               tokens:    Vec::new(),
               pos:       0,
               functions: HashMap::new(), }
    }

    /// Parses every statement.
    ///
    /// # Returns
    /// The top-level expressions and the function table.
    ///
    /// # Errors
    /// The first `ParseError` met; nothing is returned for the statements
    /// before it.
    pub fn parse(mut self) -> ParseResult<Parsed> {
        let mut expressions = Vec::new();

        while let Some(statement) = self.next_statement() {
            if let [token] = statement.as_slice()
               && token.is(TokenKind::RightScope)
            {
                return Err(ParseError::UnexpectedToken { token: token.text.clone() });
            }
            self.load(statement);
            expressions.push(self.parse_statement()?);
        }

        Ok(Parsed { expressions,
                    functions: self.functions })
    }

    /// Pops the next statement, unrolling scopes into the front of the queue.
    pub(super) fn next_statement(&mut self) -> Option<Vec<Token>> {
        while let Some(container) = self.queue.pop_front() {
            match container {
                TokenContainer::Statement(tokens) => return Some(tokens),
                TokenContainer::Scope(children) => {
                    for child in children.into_iter().rev() {
                        self.queue.push_front(child);
                    }
                },
            }
        }
        None
    }

    /// Makes `tokens` the current statement.
    pub(super) fn load(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
        self.pos = 0;
    }

    /// Parses the current statement as one expression and requires that it
    /// uses every token.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        match self.peek() {
            Some(token) => Err(ParseError::UnexpectedToken { token: token.text.clone() }),
            None => Ok(expr),
        }
    }

    /// Parses a full expression, starting at the lowest precedence.
    pub(super) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_binary(0)
    }
}

/// Parses a container tree produced by the splitter.
///
/// # Example
/// ```
/// use ascent::interpreter::{lexer::core::tokenize, parser::core::parse, splitter::split};
///
/// let tokens = tokenize("function add(a, b){ return a + b; } add(1, 2);", []).tokens;
/// let parsed = parse(split(tokens)).unwrap();
///
/// assert_eq!(parsed.expressions.len(), 2);
/// assert_eq!(parsed.functions["add"].params, ["a", "b"]);
/// assert!(parsed.functions["add"].body.is_none());
/// ```
///
/// # Errors
/// Any `ParseError`; a malformed statement aborts the whole parse.
pub fn parse(root: TokenContainer) -> ParseResult<Parsed> {
    Parser::new(root).parse()
}
