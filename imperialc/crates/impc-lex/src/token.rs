//! Token definitions for ImperialCode.
//!
//! A [`Token`] pairs a closed [`TokenKind`] with the exact lexeme, its
//! start and end positions, and the decoded literal value when there is
//! one. The reserved words, the operator table and the punctuation set live
//! here as fixed tables so the lexer and the tooling agree on them.

use std::fmt;

use impc_util::{SourcePosition, Span};

/// Reserved words of ImperialCode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Let,
    Const,
    Fn,
    Return,
    If,
    Else,
    Elif,
    While,
    For,
    In,
    Break,
    Continue,
    True,
    False,
    Null,
    Struct,
    Import,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 17] = [
        Keyword::Let,
        Keyword::Const,
        Keyword::Fn,
        Keyword::Return,
        Keyword::If,
        Keyword::Else,
        Keyword::Elif,
        Keyword::While,
        Keyword::For,
        Keyword::In,
        Keyword::Break,
        Keyword::Continue,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
        Keyword::Struct,
        Keyword::Import,
    ];

    /// The source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Const => "const",
            Keyword::Fn => "fn",
            Keyword::Return => "return",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Elif => "elif",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::Struct => "struct",
            Keyword::Import => "import",
        }
    }
}

/// Looks up a complete identifier lexeme in the reserved-word set.
///
/// Only exact matches count: `lets` or `Let` stay identifiers.
///
/// # Example
///
/// ```
/// use impc_lex::token::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("while"), Some(Keyword::While));
/// assert_eq!(keyword_from_ident("whilst"), None);
/// assert_eq!(keyword_from_ident("While"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Keyword> {
    Keyword::ALL.into_iter().find(|kw| kw.as_str() == ident)
}

/// Operators of ImperialCode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `%=`
    PercentEq,
    /// `->`
    Arrow,
    /// `**`
    StarStar,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Assign,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `!`
    Bang,
}

/// The operator table. Matching picks the longest entry that prefixes the
/// remaining input, so the order of entries does not matter.
pub const OPERATORS: &[(&str, Operator)] = &[
    ("==", Operator::EqEq),
    ("!=", Operator::NotEq),
    ("<=", Operator::LtEq),
    (">=", Operator::GtEq),
    ("&&", Operator::AndAnd),
    ("||", Operator::OrOr),
    ("+=", Operator::PlusEq),
    ("-=", Operator::MinusEq),
    ("*=", Operator::StarEq),
    ("/=", Operator::SlashEq),
    ("%=", Operator::PercentEq),
    ("->", Operator::Arrow),
    ("**", Operator::StarStar),
    ("+", Operator::Plus),
    ("-", Operator::Minus),
    ("*", Operator::Star),
    ("/", Operator::Slash),
    ("%", Operator::Percent),
    ("=", Operator::Assign),
    ("<", Operator::Lt),
    (">", Operator::Gt),
    ("!", Operator::Bang),
];

impl Operator {
    /// The source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        OPERATORS
            .iter()
            .find(|(_, op)| *op == self)
            .map(|(text, _)| *text)
            .unwrap_or_default()
    }

    /// Finds the longest operator at the start of `input`.
    ///
    /// Returns the operator and its length in bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use impc_lex::token::Operator;
    ///
    /// assert_eq!(Operator::longest_match("<= 1"), Some((Operator::LtEq, 2)));
    /// assert_eq!(Operator::longest_match("< 1"), Some((Operator::Lt, 1)));
    /// assert_eq!(Operator::longest_match("& b"), None);
    /// ```
    pub fn longest_match(input: &str) -> Option<(Operator, usize)> {
        OPERATORS
            .iter()
            .filter(|(text, _)| input.starts_with(text))
            .max_by_key(|(text, _)| text.len())
            .map(|(text, op)| (*op, text.len()))
    }
}

/// Single-character punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punctuation {
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
}

impl Punctuation {
    /// Classifies a punctuation character.
    pub fn from_char(c: char) -> Option<Punctuation> {
        let punct = match c {
            '(' => Punctuation::LParen,
            ')' => Punctuation::RParen,
            '{' => Punctuation::LBrace,
            '}' => Punctuation::RBrace,
            '[' => Punctuation::LBracket,
            ']' => Punctuation::RBracket,
            ',' => Punctuation::Comma,
            ';' => Punctuation::Semicolon,
            ':' => Punctuation::Colon,
            '.' => Punctuation::Dot,
            _ => return None,
        };
        Some(punct)
    }

    /// The punctuation character.
    pub const fn as_char(self) -> char {
        match self {
            Punctuation::LParen => '(',
            Punctuation::RParen => ')',
            Punctuation::LBrace => '{',
            Punctuation::RBrace => '}',
            Punctuation::LBracket => '[',
            Punctuation::RBracket => ']',
            Punctuation::Comma => ',',
            Punctuation::Semicolon => ';',
            Punctuation::Colon => ':',
            Punctuation::Dot => '.',
        }
    }
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    Operator(Operator),
    Punctuation(Punctuation),
    Comment,
    EndOfFile,
}

impl TokenKind {
    /// The bare variant name, as shown in the results table.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::FloatLiteral => "FloatLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Operator(_) => "Operator",
            TokenKind::Punctuation(_) => "Punctuation",
            TokenKind::Comment => "Comment",
            TokenKind::EndOfFile => "EndOfFile",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "Keyword({})", kw.as_str()),
            TokenKind::Operator(op) => write!(f, "Operator({})", op.as_str()),
            TokenKind::Punctuation(p) => write!(f, "Punctuation({})", p.as_char()),
            other => f.write_str(other.name()),
        }
    }
}

/// Decoded value of a literal token.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Integer(u64),
    Float(f64),
    /// String contents with escapes resolved
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Integer(n) => write!(f, "{}", n),
            LiteralValue::Float(x) => write!(f, "{:?}", x),
            LiteralValue::Str(s) => f.write_str(s),
        }
    }
}

/// A classified, positioned piece of source text.
///
/// `lexeme` is exactly `source[start.offset..end.offset]`; `end` is the
/// position just past the last character. `EndOfFile` has an empty lexeme
/// and `start == end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub start: SourcePosition,
    pub end: SourcePosition,
    pub value: Option<LiteralValue>,
}

impl Token {
    /// The source range covered by the token.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Comments are kept for highlighting; parsers skip them.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Display for Token {
    /// Formats as `Kind(lexeme)`, e.g. `Keyword(let)` or `IntegerLiteral(42)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            f.write_str(self.kind.name())
        } else {
            write!(f, "{}({})", self.kind.name(), self.lexeme)
        }
    }
}
