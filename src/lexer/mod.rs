use logos::Logos;

use std::fmt;
use std::ops::Range;


/// Category of a lexical unit. Every source character ends up in exactly one of
/// these; characters logos can't match become `Unknown`.
#[derive(Logos, Debug, PartialEq, Eq)]
#[logos(skip r"\s+")] // Ignore this regex pattern between tokens
#[derive(Clone, Copy)]
pub enum TokenKind {
    #[token("mut")]
    #[token("out")]
    #[token("if")]
    #[token("else")]
    #[token("input")]
    Keyword,

    #[token("str")]
    #[token("int")]
    #[token("bool")]
    TypeName,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("<")]
    #[token(">")]
    #[token("=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    // no escapes; an unterminated string runs to the end of input
    #[regex(r#""[^"]*"?"#)]
    StringLiteral,

    #[regex(r"[0-9]+")]
    NumberLiteral,

    #[token("true")]
    #[token("false")]
    BooleanLiteral,

    #[token(";")]
    #[token(":")]
    #[token(".")]
    #[token(",")]
    Punctuation,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    Unknown,
}

impl TokenKind {
    pub fn is_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::StringLiteral
                | TokenKind::NumberLiteral
                | TokenKind::BooleanLiteral
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral | TokenKind::NumberLiteral | TokenKind::BooleanLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::TypeName => "type name",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::Punctuation => "punctuation",
            TokenKind::ParenOpen => "'('",
            TokenKind::ParenClose => "')'",
            TokenKind::BraceOpen => "'{'",
            TokenKind::BraceClose => "'}'",
            TokenKind::Unknown => "unknown character",
        };
        f.write_str(name)
    }
}

/// Operators allowed between the operands of an `if` condition.
pub const COMPARISON_OPERATORS: [&str; 6] = ["==", "!=", "<", ">", "<=", ">="];

/// A classified lexical unit.
///
/// `span` is the byte range the token covers in the source; its start is the
/// token's position. For string literals `text` holds the characters between
/// the quotes while `span` still covers the quotes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn position(&self) -> usize {
        self.span.start
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.is(TokenKind::Keyword, keyword)
    }

    pub fn is_semicolon(&self) -> bool {
        self.is(TokenKind::Punctuation, ";")
    }

    pub fn is_comparison(&self) -> bool {
        self.kind == TokenKind::Operator && COMPARISON_OPERATORS.contains(&self.text.as_str())
    }

    /// Human readable form used in diagnostics, e.g. `identifier 'x'`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::StringLiteral => format!("string literal \"{}\"", self.text),
            TokenKind::ParenOpen
            | TokenKind::ParenClose
            | TokenKind::BraceOpen
            | TokenKind::BraceClose => self.kind.to_string(),
            kind => format!("{} '{}'", kind, self.text),
        }
    }
}

/// Splits `source` into tokens. Never fails: anything logos can't classify is
/// emitted as one `Unknown` token per character so later stages can point at it.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        match result {
            Ok(TokenKind::StringLiteral) => {
                tokens.push(Token::new(
                    TokenKind::StringLiteral,
                    string_contents(slice),
                    span,
                ));
            }
            Ok(kind) => tokens.push(Token::new(kind, slice, span)),
            Err(()) => {
                for (offset, ch) in slice.char_indices() {
                    let start = span.start + offset;
                    tokens.push(Token::new(
                        TokenKind::Unknown,
                        ch.to_string(),
                        start..start + ch.len_utf8(),
                    ));
                }
            }
        }
    }

    tokens
}

fn string_contents(slice: &str) -> &str {
    let inner = slice.strip_prefix('"').unwrap_or(slice);
    inner.strip_suffix('"').unwrap_or(inner)
}
