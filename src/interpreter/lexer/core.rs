use std::collections::HashMap;

use crate::{
    error::LexError,
    interpreter::{
        lexer::{
            cursor::{Cursor, strip_whitespace},
            matcher::{MATCHERS, Matcher},
            token::{Token, TokenKind},
        },
        trie::Trie,
    },
};

/// Name of the root scope.
pub const GLOBAL_SCOPE: &str = "GLOBAL";

const KEYWORDS: [&str; 5] = ["true", "false", "return", "for", "while"];

/// A named lexical region.
///
/// Loop and block scopes inherit `function` from their parent so that the
/// parameters of the enclosing function stay visible inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Scope {
    name:     String,
    function: Option<String>,
}

/// The result of tokenizing one source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// Tokens in source order.
    pub tokens:  Vec<Token>,
    /// `import` directive strings (`name-type`) in source order.
    pub imports: Vec<String>,
    /// `using` directive strings in source order.
    pub usings:  Vec<String>,
}

/// Context-sensitive tokenizer.
///
/// Whether a name is a variable reference, a reassignment or a call depends
/// on what has been declared earlier in the same scan, so the tokenizer
/// carries three tries and a scope stack and must run strictly left to
/// right.
///
/// # Example
/// ```
/// use ascent::interpreter::lexer::{core::Tokenizer, token::TokenKind};
///
/// let tokenized = Tokenizer::new(["sin"]).tokenize("let x = sin(1); x - 1;");
/// let kinds: Vec<_> = tokenized.tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Call,
///             TokenKind::LeftParen,
///             TokenKind::Number,
///             TokenKind::RightParen,
///             TokenKind::Semicolon,
///             TokenKind::Variable,
///             TokenKind::Minus,
///             TokenKind::Number,
///             TokenKind::Semicolon]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    keywords:   Trie,
    variables:  Trie,
    functions:  Trie,
    parameters: HashMap<String, Vec<String>>,
    scopes:     Vec<Scope>,
    pending:    Option<Scope>,
    loops:      usize,
    output:     Tokenized,
}

impl Tokenizer {
    /// Creates a tokenizer that recognises `builtins` as callable names.
    pub fn new<'a, I>(builtins: I) -> Self
        where I: IntoIterator<Item = &'a str>
    {
        Self { keywords:   KEYWORDS.into_iter().collect(),
               variables:  Trie::new(),
               functions:  builtins.into_iter().collect(),
               parameters: HashMap::new(),
               scopes:     vec![Scope { name:     GLOBAL_SCOPE.to_string(),
                                        function: None, }],
               pending:    None,
               loops:      0,
               output:     Tokenized::default(), }
    }

    /// Tokenizes `source`.
    ///
    /// Whitespace outside string literals is removed first. Characters no
    /// matcher accepts are logged and skipped.
    #[must_use]
    pub fn tokenize(mut self, source: &str) -> Tokenized {
        let stripped = strip_whitespace(source);
        let mut cursor = Cursor::new(&stripped);

        while !cursor.at_end() {
            let matched = MATCHERS.iter()
                                  .copied()
                                  .find(|matcher| matcher.is_match(&self, cursor));

            match matched.and_then(|matcher| matcher.take(&self, &mut cursor).map(|t| (matcher, t)))
            {
                Some((matcher, token)) => self.commit(matcher, token),
                None => {
                    let position = cursor.position();
                    if let Some(character) = cursor.bump() {
                        let error = LexError { position, character };
                        tracing::warn!(%error, "lexer recovered");
                    }
                },
            }
        }

        self.output
    }

    /// Kind of the most recently produced token.
    #[must_use]
    pub fn last_kind(&self) -> Option<TokenKind> {
        self.output.tokens.last().map(|t| t.kind)
    }

    /// Reserved words.
    #[must_use]
    pub const fn keywords(&self) -> &Trie {
        &self.keywords
    }

    /// Built-in and user functions declared so far.
    #[must_use]
    pub const fn functions(&self) -> &Trie {
        &self.functions
    }

    /// Byte length of the longest declared variable or active parameter at
    /// the start of `text`.
    #[must_use]
    pub fn declared_at(&self, text: &str) -> Option<usize> {
        let variable = self.variables.longest_match(text);
        let parameter = self.active_parameters()
                            .iter()
                            .filter(|p| text.starts_with(p.as_str()))
                            .map(String::len)
                            .max();
        variable.max(parameter)
    }

    /// Returns `true` while scanning the parameter list of a `function`
    /// header.
    #[must_use]
    pub fn in_parameter_list(&self) -> bool {
        let mut previous = self.output
                               .tokens
                               .iter()
                               .rev()
                               .skip_while(|t| t.is(TokenKind::Parameter) || t.is(TokenKind::Comma));
        previous.next().is_some_and(|t| t.is(TokenKind::LeftParen))
        && previous.next().is_some_and(|t| t.is(TokenKind::Function))
    }

    fn active_parameters(&self) -> &[String] {
        self.scopes
            .last()
            .and_then(|scope| scope.function.as_ref())
            .and_then(|function| self.parameters.get(function))
            .map_or(&[], Vec::as_slice)
    }

    fn current_function(&self) -> Option<String> {
        self.scopes.last().and_then(|scope| scope.function.clone())
    }

    /// Applies the side effects of an accepted token.
    fn commit(&mut self, matcher: Matcher, token: Token) {
        tracing::trace!(?matcher, %token, "token");

        match token.kind {
            TokenKind::Function => {
                self.functions.insert(&token.text);
                self.parameters.entry(token.text.clone()).or_default();
                self.pending = Some(Scope { name:     token.text.clone(),
                                            function: Some(token.text.clone()), });
            },
            TokenKind::Parameter => {
                let owner = self.output
                                .tokens
                                .iter()
                                .rev()
                                .find(|t| t.is(TokenKind::Function))
                                .map(|t| t.text.clone());
                if let Some(owner) = owner {
                    self.parameters.entry(owner).or_default().push(token.text.clone());
                }
            },
            TokenKind::For | TokenKind::While => {
                self.loops += 1;
                let parent = self.scopes.last().map_or(GLOBAL_SCOPE, |s| s.name.as_str());
                self.pending = Some(Scope { name:     format!("{parent}/{}{}", token.text, self.loops),
                                            function: self.current_function(), });
            },
            TokenKind::Let => self.variables.insert(&token.text),
            TokenKind::Import => {
                let name = token.text.split('-').next().unwrap_or_default();
                self.variables.insert(name);
                self.output.imports.push(token.text.clone());
            },
            TokenKind::Using => self.output.usings.push(token.text.clone()),
            TokenKind::LeftScope => {
                let scope = match self.pending.take() {
                    Some(scope) => scope,
                    None => {
                        self.loops += 1;
                        let parent = self.scopes.last().map_or(GLOBAL_SCOPE, |s| s.name.as_str());
                        Scope { name:     format!("{parent}/block{}", self.loops),
                                function: self.current_function(), }
                    },
                };
                self.scopes.push(scope);
            },
            TokenKind::RightScope => {
                if self.scopes.len() > 1 {
                    self.scopes.pop();
                }
            },
            _ => {},
        }

        self.output.tokens.push(token);
    }
}

/// Tokenizes `source` with `builtins` as the initially callable names.
///
/// # Example
/// ```
/// use ascent::interpreter::lexer::{core::tokenize, token::TokenKind};
///
/// let tokenized = tokenize("import speed-float; using Game.Units;", ["sin"]);
///
/// assert_eq!(tokenized.imports, ["speed-float"]);
/// assert_eq!(tokenized.usings, ["Game.Units"]);
/// assert_eq!(tokenized.tokens[0].kind, TokenKind::Import);
/// ```
#[must_use]
pub fn tokenize<'a, I>(source: &str, builtins: I) -> Tokenized
    where I: IntoIterator<Item = &'a str>
{
    Tokenizer::new(builtins).tokenize(source)
}
