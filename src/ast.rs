use std::fmt::{self, Write};

/// Represents a node in the abstract syntax tree.
///
/// Every variant carries the source line it was parsed from so that runtime
/// errors can point back at the offending input.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, such as `3.14`.
    Number {
        /// The literal value.
        value: f64,
        /// The source line the literal appeared on.
        line:  usize,
    },
    /// A string literal, already unescaped by the lexer.
    String {
        /// The decoded contents of the literal.
        value: String,
        /// The source line the literal appeared on.
        line:  usize,
    },
    /// A bare identifier, such as `x` or `total`.
    Identifier {
        /// The identifier text.
        name: String,
        /// The source line the identifier appeared on.
        line: usize,
    },
    /// A nullary leaf: an empty collection literal or the break marker.
    Root {
        /// Which leaf this is.
        literal: RootLiteral,
        /// The source line the leaf appeared on.
        line:    usize,
    },
    /// A prefix operator applied to a single operand.
    Unary {
        /// The operator.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Expr>,
        /// The source line the operator appeared on.
        line: usize,
    },
    /// A binary operator applied to two operands.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// The left operand.
        left:  Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
        /// The source line the operator appeared on.
        line:  usize,
    },
    /// An element access, `name[index]`.
    Deref {
        /// The container variable being dereferenced.
        name:  String,
        /// The index or key expression inside the brackets.
        index: Box<Expr>,
        /// The source line the access appeared on.
        line:  usize,
    },
    /// A call form, `name(argument)`.
    ///
    /// On the left side of `:` this is a function definition; anywhere else
    /// it is an invocation.
    Invoke {
        /// The function variable being invoked (or defined).
        name:     String,
        /// The single argument (or, when defining, the parameter name).
        argument: Box<Expr>,
        /// The source line the call appeared on.
        line:     usize,
    },
}

/// The nullary leaves of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootLiteral {
    /// `[]`, a fresh empty array.
    EmptyArray,
    /// `{}`, a fresh empty dictionary.
    EmptyDictionary,
    /// `~`, the break marker.
    Break,
}

/// All binary operators, ordered roughly from tightest to loosest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `.`, dictionary member access.
    Member,
    /// `^`, exponentiation.
    Pow,
    /// `*`, multiplication.
    Mul,
    /// `/`, division.
    Div,
    /// `%`, remainder.
    Mod,
    /// `+`, addition or string concatenation.
    Add,
    /// `-`, subtraction.
    Sub,
    /// `=`, equality.
    Equal,
    /// `!=`, inequality.
    NotEqual,
    /// `>`, greater than.
    Greater,
    /// `<`, less than.
    Less,
    /// `>=`, greater than or equal.
    GreaterEqual,
    /// `<=`, less than or equal.
    LessEqual,
    /// `:`, assignment.
    Assign,
    /// `?`, the while loop.
    While,
    /// `??`, conditional evaluation when the left side is truthy.
    If,
    /// `!?`, conditional evaluation when the left side is falsy.
    IfNot,
    /// `::`, the alternative branch of `??` or `!?`.
    Else,
    /// `;`, expression sequencing.
    Sequence,
}

/// All prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+`, numeric coercion.
    Plus,
    /// `-`, numeric negation.
    Negate,
    /// `!`, logical negation.
    Not,
    /// `~~`, return from the enclosing function.
    Return,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Member => ".",
            Self::Pow => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Assign => ":",
            Self::While => "?",
            Self::If => "??",
            Self::IfNot => "!?",
            Self::Else => "::",
            Self::Sequence => ";",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
            Self::Return => "~~",
        };
        write!(f, "{symbol}")
    }
}

impl Expr {
    /// Returns the source line this node was parsed from.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::String { line, .. }
            | Self::Identifier { line, .. }
            | Self::Root { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Deref { line, .. }
            | Self::Invoke { line, .. } => *line,
        }
    }

    /// Renders the tree as an indented outline, one node per line.
    ///
    /// Used by the REPL's `#pretty` directive.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::parser::core::parse_source;
    ///
    /// let root = parse_source("a: 1").unwrap();
    /// assert_eq!(root.tree(), "Binary ':'\n  Identifier 'a'\n  Number 1\n");
    /// ```
    #[must_use]
    pub fn tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            Self::Number { value, .. } => {
                let _ = writeln!(out, "Number {value}");
            },
            Self::String { value, .. } => {
                let _ = writeln!(out, "String {value:?}");
            },
            Self::Identifier { name, .. } => {
                let _ = writeln!(out, "Identifier '{name}'");
            },
            Self::Root { literal, .. } => {
                let _ = writeln!(out, "Root {literal:?}");
            },
            Self::Unary { op, expr, .. } => {
                let _ = writeln!(out, "Unary '{op}'");
                expr.write_tree(out, depth + 1);
            },
            Self::Binary { op, left, right, .. } => {
                let _ = writeln!(out, "Binary '{op}'");
                left.write_tree(out, depth + 1);
                right.write_tree(out, depth + 1);
            },
            Self::Deref { name, index, .. } => {
                let _ = writeln!(out, "Deref '{name}'");
                index.write_tree(out, depth + 1);
            },
            Self::Invoke { name, argument, .. } => {
                let _ = writeln!(out, "Invoke '{name}'");
                argument.write_tree(out, depth + 1);
            },
        }
    }
}
