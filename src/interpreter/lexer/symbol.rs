use logos::Logos;

use crate::interpreter::lexer::token::TokenKind;

/// Lexemes whose classification does not depend on earlier declarations.
///
/// The tokenizer runs this lexer on the remaining input at one position and
/// keeps only the first lexeme, so the longest-match rule of `logos` decides
/// between `-`, `--`, `-=` and negative literals.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// `;`
    #[token(";")]
    Semicolon,
    /// `{`
    #[token("{")]
    LeftScope,
    /// `}`
    #[token("}")]
    RightScope,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// Numeric literal candidates such as `3`, `-2.5` or `.5`. Malformed
    /// candidates (`1.2.3`) are rejected by the parser.
    #[regex(r"-?[0-9.]+")]
    Number,
    /// String literal; an unterminated literal runs to the end of input.
    #[regex(r#""[^"]*"?"#)]
    Text,
}

impl Symbol {
    /// Lexes the first symbol of `input`, returning it with its byte length.
    ///
    /// # Example
    /// ```
    /// use ascent::interpreter::lexer::symbol::Symbol;
    ///
    /// assert_eq!(Symbol::first("-=1"), Some((Symbol::MinusAssign, 2)));
    /// assert_eq!(Symbol::first("-2.5)"), Some((Symbol::Number, 4)));
    /// assert_eq!(Symbol::first("abc"), None);
    /// ```
    #[must_use]
    pub fn first(input: &str) -> Option<(Self, usize)> {
        let mut lexer = Self::lexer(input);
        match lexer.next() {
            Some(Ok(symbol)) => Some((symbol, lexer.span().len())),
            _ => None,
        }
    }

    /// Maps a punctuation or operator symbol to its token kind.
    ///
    /// Literals and the bare `=` have their own matchers and return `None`.
    #[must_use]
    pub const fn punctuation_kind(self) -> Option<TokenKind> {
        Some(match self {
                 Self::Semicolon => TokenKind::Semicolon,
                 Self::LeftScope => TokenKind::LeftScope,
                 Self::RightScope => TokenKind::RightScope,
                 Self::LeftParen => TokenKind::LeftParen,
                 Self::RightParen => TokenKind::RightParen,
                 Self::LeftBracket => TokenKind::LeftBracket,
                 Self::RightBracket => TokenKind::RightBracket,
                 Self::Comma => TokenKind::Comma,
                 Self::Increment => TokenKind::Increment,
                 Self::Decrement => TokenKind::Decrement,
                 Self::PlusAssign => TokenKind::PlusAssign,
                 Self::MinusAssign => TokenKind::MinusAssign,
                 Self::Plus => TokenKind::Plus,
                 Self::Minus => TokenKind::Minus,
                 Self::Star => TokenKind::Star,
                 Self::Slash => TokenKind::Slash,
                 Self::Caret => TokenKind::Caret,
                 Self::Percent => TokenKind::Percent,
                 Self::Less => TokenKind::Less,
                 Self::Greater => TokenKind::Greater,
                 Self::Question => TokenKind::Question,
                 Self::Colon => TokenKind::Colon,
                 Self::Equals | Self::Number | Self::Text => return None,
             })
    }
}
