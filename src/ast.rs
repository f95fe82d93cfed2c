use std::rc::Rc;

/// A constant that appears directly in source code.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A decimal literal such as `-2.5`.
    Number(f64),
    /// A double-quoted literal.
    Text(String),
    /// `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A node of the expression tree.
///
/// Every construct of the language, statements included, is an `Expr`: a
/// program is an ordered list of them and evaluating each one yields an
/// optional value. Nodes are immutable once parsed and own their children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A host query value, `q.name` or `query.name`.
    Query {
        /// Name of the query variable.
        name: String,
    },
    /// Reference to a variable or parameter by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `condition ? then_branch : else_branch`
    Ternary {
        /// Must evaluate to a boolean or to the number 0 or 1.
        condition:   Box<Self>,
        /// Evaluated when the condition holds.
        then_branch: Box<Self>,
        /// Evaluated otherwise.
        else_branch: Box<Self>,
    },
    /// Call of a built-in or user function.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments in call order.
        arguments: Vec<Self>,
    },
    /// A `function` declaration. Evaluating it attaches `body` to the
    /// function table entry created by the parser.
    FunctionDefinition {
        /// Name of the function.
        name: String,
        /// Body statements.
        body: Rc<[Self]>,
    },
    /// `for(init; condition; step){ body }`
    For {
        /// Runs once against the enclosing environment.
        init:      Box<Self>,
        /// Checked before every iteration.
        condition: Box<Self>,
        /// Runs after every iteration.
        step:      Box<Self>,
        /// Body statements.
        body:      Vec<Self>,
    },
    /// `while(condition){ body }`
    While {
        /// Checked before every iteration.
        condition: Box<Self>,
        /// Body statements.
        body:      Vec<Self>,
    },
    /// A bare `{ ... }` block, run in the enclosing environment.
    Block {
        /// Statements inside the block.
        body: Vec<Self>,
    },
    /// `let name = value`
    Let {
        /// The declared name.
        name:  String,
        /// The initial value.
        value: Box<Self>,
    },
    /// `name = value`
    Assign {
        /// The reassigned name.
        name:  String,
        /// The new value.
        value: Box<Self>,
    },
    /// `name += value`, `name -= value`, `name++` and `name--`.
    CompoundAssignment {
        /// The updated variable.
        name:  String,
        /// [`BinaryOperator::Add`] or [`BinaryOperator::Sub`].
        op:    BinaryOperator,
        /// The right-hand side (`1` for `++`/`--`).
        value: Box<Self>,
    },
    /// `return value`
    Return {
        /// The returned value.
        value: Box<Self>,
    },
    /// `namespace X`
    Namespace {
        /// The namespace predicate.
        name: String,
    },
    /// `using X`
    Using {
        /// The using predicate.
        name: String,
    },
    /// `import name-type`
    Import {
        /// Name the host value is bound under.
        name: String,
        /// Declared type, possibly empty.
        kind: String,
    },
    /// `target.member`
    Access {
        /// Expression yielding a host object.
        target: Box<Self>,
        /// Field or property name.
        member: String,
    },
    /// `target.member = value`
    MemberWrite {
        /// Expression yielding a host object.
        target: Box<Self>,
        /// Field or property name.
        member: String,
        /// The written value.
        value:  Box<Self>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Returns `true` if the expression never reads a host query value, so
    /// its result depends only on the environment.
    ///
    /// Calls are never static: the callee may read a query or be a host
    /// built-in with side effects.
    ///
    /// ## Example
    /// ```
    /// use ascent::ast::{BinaryOperator, Expr};
    ///
    /// let time = Expr::Query { name: "time".to_string() };
    /// let sum = Expr::Binary { left:  Box::new(Expr::literal(1.0)),
    ///                          op:    BinaryOperator::Add,
    ///                          right: Box::new(time), };
    ///
    /// assert!(Expr::literal(1.0).is_static());
    /// assert!(!sum.is_static());
    /// ```
    #[must_use]
    pub fn is_static(&self) -> bool {
        match self {
            Self::Query { .. } | Self::Call { .. } => false,
            Self::Literal { .. }
            | Self::Variable { .. }
            | Self::Namespace { .. }
            | Self::Using { .. }
            | Self::Import { .. } => true,
            Self::Binary { left, right, .. } => left.is_static() && right.is_static(),
            Self::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                condition.is_static() && then_branch.is_static() && else_branch.is_static()
            },
            Self::FunctionDefinition { body, .. } => body.iter().all(Self::is_static),
            Self::For { init,
                        condition,
                        step,
                        body, } => {
                init.is_static()
                && condition.is_static()
                && step.is_static()
                && body.iter().all(Self::is_static)
            },
            Self::While { condition, body } => {
                condition.is_static() && body.iter().all(Self::is_static)
            },
            Self::Block { body } => body.iter().all(Self::is_static),
            Self::Let { value, .. }
            | Self::Assign { value, .. }
            | Self::CompoundAssignment { value, .. }
            | Self::Return { value } => value.is_static(),
            Self::Access { target, .. } => target.is_static(),
            Self::MemberWrite { target, value, .. } => target.is_static() && value.is_static(),
        }
    }
}

/// A user function as recorded in a program's function table.
///
/// The parser creates the entry with its parameters; the body is attached
/// when the declaring [`Expr::FunctionDefinition`] is evaluated, and the
/// function cannot be called before that.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionDefinition {
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// Body statements, once attached.
    pub body:   Option<Rc<[Expr]>>,
}

impl FunctionDefinition {
    /// Creates a definition with no body attached yet.
    #[must_use]
    pub const fn new(params: Vec<String>) -> Self {
        Self { params, body: None }
    }
}

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter.
    ///
    /// Ternary sits between the multiplicative and relational levels, so
    /// `a + b > c ? x : y` reads as `a + ((b > c) ? x : y)`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Less | Self::Greater => 6,
            Self::Pow => 9,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
            Self::Less => "<",
            Self::Greater => ">",
        };
        write!(f, "{operator}")
    }
}
