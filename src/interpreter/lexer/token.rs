/// The kind of a lexical token.
///
/// The set is closed: literal, operator, keyword, identifier-class and
/// structural kinds. For identifier-class and directive kinds the token text
/// carries the declared or referenced name rather than the raw source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Decimal literal, text is the literal (`-2.5`).
    Number,
    /// Double-quoted literal, text is the contents without quotes.
    Text,
    /// `true`
    True,
    /// `false`
    False,
    /// Host query reference, text is the query name (`q.time` -> `time`).
    Query,

    /// `+`
    Plus,
    /// `-` used as a binary operator.
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `%`
    Percent,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// Bare `=`, only produced for member writes (`a.b = v`).
    Equals,

    /// `return`
    Return,
    /// `for` loop header.
    For,
    /// `while` loop header.
    While,
    /// `function` header, text is the function name.
    Function,
    /// Parameter name inside a `function` header.
    Parameter,
    /// `let` declaration, text is the declared name (the `=` is consumed).
    Let,
    /// `namespace` directive, text is the namespace.
    Namespace,
    /// `using` directive, text is the predicate.
    Using,
    /// `import` directive, text is `name-type`.
    Import,

    /// Reference to a declared variable or active parameter.
    Variable,
    /// Reassignment of a declared variable, text is the name (the `=` is
    /// consumed).
    Assign,
    /// Call of a built-in or user function, text is the function name.
    Call,
    /// Member access, text is the member name without the `.`.
    Access,

    /// `;`
    Semicolon,
    /// `{`
    LeftScope,
    /// `}`
    RightScope,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Returns `true` if a token of this kind can end an operand, so that a
    /// following `-` must be subtraction rather than a negative literal.
    #[must_use]
    pub const fn ends_operand(self) -> bool {
        matches!(self,
                 Self::Number
                 | Self::Text
                 | Self::True
                 | Self::False
                 | Self::Query
                 | Self::Variable
                 | Self::Access
                 | Self::RightParen
                 | Self::RightBracket)
    }

    /// Returns `true` for `function`, `for` and `while`, the tokens that open
    /// a named scope before their body is read.
    #[must_use]
    pub const fn opens_scope(self) -> bool {
        matches!(self, Self::Function | Self::For | Self::While)
    }
}

/// A minimal lexical unit: a kind and its lexeme. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The lexeme; see [`TokenKind`] for what each kind stores here.
    pub text: String,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Returns `true` if the token has kind `kind`.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.kind, self.text)
    }
}
