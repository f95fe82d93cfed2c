use crate::interpreter::lexer::{
    core::Tokenizer,
    cursor::{Cursor, is_name_char},
    symbol::Symbol,
    token::{Token, TokenKind},
};

/// One category of token the tokenizer can recognise.
///
/// The order of [`MATCHERS`] is the priority order: at each position the
/// first matcher whose speculative scan succeeds wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// `true`, `false`, `return`, `for`, `while` from the keyword trie.
    Keyword,
    /// A `-` after an operand, directly before a number literal that may carry
    /// its own sign.
    Subtraction,
    /// Single and multi-character punctuation and operators.
    Punctuation,
    /// `q.name` or `query.name`.
    Query,
    /// `.name` after an operand.
    Access,
    /// `function name(`, registers `name` as callable.
    FunctionHeader,
    /// A parameter name inside the list of the function being declared.
    Parameter,
    /// A known function name followed by `(`.
    Call,
    /// `let name =`, registers `name` as a variable.
    Let,
    /// A declared name followed by `=`.
    Assign,
    /// A declared variable or an active parameter.
    Variable,
    /// Decimal literal.
    Number,
    /// Double-quoted literal.
    Text,
    /// `namespace X`
    Namespace,
    /// `using X`
    Using,
    /// `import name-type`, registers `name` as a variable.
    Import,
    /// Bare `=`, only reachable for member writes.
    MemberWrite,
}

/// Matchers in priority order.
pub const MATCHERS: [Matcher; 17] = [Matcher::Keyword,
                                     Matcher::Subtraction,
                                     Matcher::Punctuation,
                                     Matcher::Query,
                                     Matcher::Access,
                                     Matcher::FunctionHeader,
                                     Matcher::Parameter,
                                     Matcher::Call,
                                     Matcher::Let,
                                     Matcher::Assign,
                                     Matcher::Variable,
                                     Matcher::Number,
                                     Matcher::Text,
                                     Matcher::Namespace,
                                     Matcher::Using,
                                     Matcher::Import,
                                     Matcher::MemberWrite];

impl Matcher {
    /// Speculative test: runs the scan on a copy of `cursor`, leaving the
    /// caller's position untouched.
    #[must_use]
    pub fn is_match(self, tokenizer: &Tokenizer, cursor: Cursor<'_>) -> bool {
        let mut probe = cursor;
        self.scan(tokenizer, &mut probe).is_some()
    }

    /// Committing scan: advances `cursor` past the token and returns it.
    ///
    /// Returns `None` without moving the cursor when the matcher does not
    /// apply. Registration of declared names is done by the tokenizer once
    /// the token is accepted.
    pub fn take(self, tokenizer: &Tokenizer, cursor: &mut Cursor<'_>) -> Option<Token> {
        let mut probe = *cursor;
        let token = self.scan(tokenizer, &mut probe)?;
        *cursor = probe;
        Some(token)
    }

    fn scan(self, tokenizer: &Tokenizer, cursor: &mut Cursor<'_>) -> Option<Token> {
        match self {
            Self::Keyword => scan_keyword(tokenizer, cursor),
            Self::Subtraction => {
                let follows_operand = tokenizer.last_kind().is_some_and(TokenKind::ends_operand);
                let operand = cursor.rest().strip_prefix('-')?;
                let (symbol, _) = Symbol::first(operand)?;
                (follows_operand && symbol == Symbol::Number && cursor.eat("-"))
                    .then(|| Token::new(TokenKind::Minus, "-"))
            },
            Self::Punctuation => {
                let (symbol, len) = Symbol::first(cursor.rest())?;
                let kind = symbol.punctuation_kind()?;
                Some(Token::new(kind, cursor.advance(len)))
            },
            Self::Query => {
                if !(cursor.eat("query.") || cursor.eat("q.")) {
                    return None;
                }
                let name = cursor.take_while(is_name_char);
                (!name.is_empty()).then(|| Token::new(TokenKind::Query, name))
            },
            Self::Access => {
                let starts_name = cursor.peek_second()
                                        .is_some_and(|c| c.is_alphabetic() || c == '_');
                if cursor.peek() != Some('.') || !starts_name {
                    return None;
                }
                cursor.bump();
                Some(Token::new(TokenKind::Access, cursor.take_while(is_name_char)))
            },
            Self::FunctionHeader => {
                if !cursor.eat("function") {
                    return None;
                }
                let name = cursor.take_while(is_name_char);
                (!name.is_empty() && cursor.peek() == Some('('))
                    .then(|| Token::new(TokenKind::Function, name))
            },
            Self::Parameter => {
                if !tokenizer.in_parameter_list() {
                    return None;
                }
                let name = cursor.take_while(is_name_char);
                (!name.is_empty() && matches!(cursor.peek(), Some(',' | ')')))
                    .then(|| Token::new(TokenKind::Parameter, name))
            },
            Self::Call => {
                let len = tokenizer.functions().longest_match(cursor.rest())?;
                let name = cursor.advance(len);
                (cursor.peek() == Some('(')).then(|| Token::new(TokenKind::Call, name))
            },
            Self::Let => {
                if !cursor.eat("let") {
                    return None;
                }
                let name = cursor.take_while(is_name_char);
                (!name.is_empty() && eat_single_equals(cursor))
                    .then(|| Token::new(TokenKind::Let, name))
            },
            Self::Assign => {
                let len = tokenizer.declared_at(cursor.rest())?;
                let name = cursor.advance(len);
                eat_single_equals(cursor).then(|| Token::new(TokenKind::Assign, name))
            },
            Self::Variable => {
                let len = tokenizer.declared_at(cursor.rest())?;
                Some(Token::new(TokenKind::Variable, cursor.advance(len)))
            },
            Self::Number => match Symbol::first(cursor.rest())? {
                (Symbol::Number, len) => Some(Token::new(TokenKind::Number, cursor.advance(len))),
                _ => None,
            },
            Self::Text => match Symbol::first(cursor.rest())? {
                (Symbol::Text, len) => {
                    let literal = cursor.advance(len);
                    let inner = literal.strip_prefix('"').unwrap_or(literal);
                    Some(Token::new(TokenKind::Text, inner.strip_suffix('"').unwrap_or(inner)))
                },
                _ => None,
            },
            Self::Namespace => scan_directive(cursor, "namespace", TokenKind::Namespace),
            Self::Using => scan_directive(cursor, "using", TokenKind::Using),
            Self::Import => scan_directive(cursor, "import", TokenKind::Import),
            Self::MemberWrite => match Symbol::first(cursor.rest())? {
                (Symbol::Equals, len) => Some(Token::new(TokenKind::Equals, cursor.advance(len))),
                _ => None,
            },
        }
    }
}

/// Grows a buffer one character at a time while it can still become a
/// keyword, stopping at the first complete one.
fn scan_keyword(tokenizer: &Tokenizer, cursor: &mut Cursor<'_>) -> Option<Token> {
    let keywords = tokenizer.keywords();
    let rest = cursor.rest();
    let mut len = 0;
    for c in rest.chars() {
        let buffer = &rest[..len];
        if !buffer.is_empty() && !keywords.partial_contains(buffer) {
            break;
        }
        len += c.len_utf8();
    }
    let word = &rest[..len];
    if !keywords.contains(word) {
        return None;
    }
    let kind = match word {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "return" => TokenKind::Return,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(Token::new(kind, cursor.advance(len)))
}

/// `keyword` followed by everything up to the next `;`.
fn scan_directive(cursor: &mut Cursor<'_>, keyword: &str, kind: TokenKind) -> Option<Token> {
    if !cursor.eat(keyword) {
        return None;
    }
    let body = cursor.take_while(|c| c != ';' && c != '}');
    (!body.is_empty()).then(|| Token::new(kind, body))
}

fn eat_single_equals(cursor: &mut Cursor<'_>) -> bool {
    cursor.peek() == Some('=') && cursor.peek_second() != Some('=') && cursor.eat("=")
}
