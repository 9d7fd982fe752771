use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    /// A number is a digit run with at most one embedded decimal point;
    /// there is no exponent syntax.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"hello\n"`.
    ///
    /// The token callback strips the surrounding quotes and decodes escape
    /// sequences. An unterminated string consumes the rest of the input
    /// rather than producing an error.
    #[regex(r#""([^"\\]|\\.)*"?"#, unescape_string)]
    String(String),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    /// Identifiers start with a letter and continue with letters, digits, or
    /// underscores.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```
    /// // Multi line comments.
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `.`
    #[token(".")]
    Dot,
    /// `^`
    #[token("^")]
    Caret,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `=`
    #[token("=")]
    Equals,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `:`
    #[token(":")]
    Colon,
    /// `::`
    #[token("::")]
    DoubleColon,
    /// `?`
    #[token("?")]
    Question,
    /// `??`
    #[token("??")]
    DoubleQuestion,
    /// `!?`
    #[token("!?")]
    BangQuestion,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `!`
    #[token("!")]
    Bang,
    /// `~`
    #[token("~")]
    Tilde,
    /// `~~`
    #[token("~~")]
    DoubleTilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `[]`
    #[token("[]")]
    EmptyBrackets,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `{}`
    #[token("{}")]
    EmptyBraces,

    /// Newlines; counted for error reporting, otherwise ignored.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds. Newlines are excluded so they can be counted above.
    #[regex(r"[ \t\x0B\f\r\u{85}\u{A0}]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed numeric value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the quotes from a string literal and decodes its escape sequences.
///
/// Recognized escapes are `\0`, `\r`, `\n`, `\b`, `\f`, `\a`, `\t`, and `\v`.
/// Any other escaped character stands for itself, so `\"` and `\\` fall out
/// of the general rule. Newlines inside the literal are counted toward the
/// line number.
///
/// # Parameters
/// - `lex`: Mutable reference to the Logos lexer at the current token.
///
/// # Returns
/// The decoded contents of the literal, without the surrounding quotes.
fn unescape_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();

    let inner = slice.strip_prefix('"').unwrap_or(slice);
    let inner = inner.strip_suffix('"').unwrap_or(inner);

    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => decoded.push('\0'),
            Some('r') => decoded.push('\r'),
            Some('n') => decoded.push('\n'),
            Some('b') => decoded.push('\u{0008}'),
            Some('f') => decoded.push('\u{000C}'),
            Some('a') => decoded.push('\u{0007}'),
            Some('t') => decoded.push('\t'),
            Some('v') => decoded.push('\u{000B}'),
            Some(other) => decoded.push(other),
            None => {},
        }
    }
    decoded
}
