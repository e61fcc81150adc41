use crate::diagnostic::CompileError;
use crate::lexer::{COMPARISON_OPERATORS, Token, TokenKind};

use std::ops::Range;

/// Read position over a borrowed token slice. Both the validator and the parser
/// walk the grammar with one of these; blocks get a fresh cursor over their
/// own sub-slice.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Where "end of input" errors point: just past the last token.
    pub fn eof_span(&self) -> Range<usize> {
        match self.tokens.last() {
            Some(token) => token.span.end..token.span.end,
            None => 0..0,
        }
    }

    /// Consumes the next token if it has `kind` (and `text`, when given).
    pub fn expect(&mut self, kind: TokenKind, text: Option<&str>) -> Result<&'a Token, CompileError> {
        let expected = match text {
            Some(text) => format!("'{}'", text),
            None => kind.to_string(),
        };
        match self.peek() {
            Some(token) if token.kind == kind && text.is_none_or(|t| token.text == t) => {
                self.pos += 1;
                Ok(token)
            }
            found => Err(CompileError::unexpected(&expected, found, self.eof_span())),
        }
    }

    pub fn expect_semicolon(&mut self) -> Result<&'a Token, CompileError> {
        self.expect(TokenKind::Punctuation, Some(";"))
    }

    /// Consumes the operator of an `if` condition, which must be a comparison.
    pub fn expect_comparison(&mut self) -> Result<&'a Token, CompileError> {
        let operator = self.expect(TokenKind::Operator, None)?;
        if !operator.is_comparison() {
            return Err(CompileError::syntax(
                format!("'{}' is not a comparison operator", operator.text),
                operator.span.clone(),
            )
            .with_label("a condition compares two values")
            .with_note(format!(
                "use one of {}",
                COMPARISON_OPERATORS.map(|op| format!("'{}'", op)).join(", ")
            )));
        }
        Ok(operator)
    }

    /// Consumes a `{ ... }` block and returns the tokens between the braces.
    pub fn block(&mut self) -> Result<&'a [Token], CompileError> {
        let open = self.expect(TokenKind::BraceOpen, None)?;
        let open_index = self.pos - 1;
        let Some(close_index) = matching_brace(self.tokens, open_index) else {
            return Err(CompileError::syntax("unclosed block, expected '}'", open.span.clone())
                .with_label("this '{' is never closed"));
        };
        let inner = self.tokens.get(open_index + 1..close_index).unwrap_or(&[]);
        self.pos = close_index + 1;
        Ok(inner)
    }
}

/// Index of the `}` closing the `{` at `open`, counting nested braces.
pub fn matching_brace(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::BraceOpen => depth += 1,
            TokenKind::BraceClose => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}
