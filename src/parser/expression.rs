use crate::ast::{Expr, Literal};
use crate::diagnostic::CompileError;
use crate::lexer::{Token, TokenKind};
use crate::parser::Parser;

/// Largest integer a TypeScript `number` holds without rounding (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Turns an operand token into an expression node. Literal text is decoded
/// strictly; anything that doesn't decode is an error.
pub fn make_expr_node(token: &Token) -> Result<Expr, CompileError> {
    let literal = match token.kind {
        TokenKind::Identifier => return Ok(Expr::Identifier(token.text.clone())),
        TokenKind::StringLiteral => Literal::Str(token.text.clone()),
        TokenKind::BooleanLiteral => match token.text.as_str() {
            "true" => Literal::Bool(true),
            "false" => Literal::Bool(false),
            other => {
                return Err(CompileError::syntax(
                    format!("invalid boolean literal '{}'", other),
                    token.span.clone(),
                ));
            }
        },
        TokenKind::NumberLiteral => {
            let value = token.text.parse::<i64>().map_err(|err| {
                CompileError::syntax(
                    format!("invalid number literal '{}': {}", token.text, err),
                    token.span.clone(),
                )
                .with_label("numbers must fit in a signed 64-bit integer")
            })?;
            if value > MAX_SAFE_INTEGER {
                return Err(CompileError::syntax(
                    format!(
                        "number literal '{}' is larger than {}",
                        token.text, MAX_SAFE_INTEGER
                    ),
                    token.span.clone(),
                )
                .with_label("TypeScript can't represent this integer exactly"));
            }
            Literal::Int(value)
        }
        _ => {
            return Err(CompileError::syntax(
                format!("expected an identifier or literal but found {}", token.describe()),
                token.span.clone(),
            ));
        }
    };
    Ok(Expr::Literal(literal))
}

impl Parser<'_> {
    /// Identifier, string, number or boolean.
    pub fn parse_operand(&mut self) -> Result<Expr, CompileError> {
        match self.cursor.next() {
            Some(token) if token.kind.is_operand() => make_expr_node(token),
            found => Err(CompileError::unexpected(
                "an identifier or literal",
                found,
                self.cursor.eof_span(),
            )),
        }
    }

    /// `input "prompt"`, with the keyword already consumed.
    pub fn parse_input_expression(&mut self) -> Result<Expr, CompileError> {
        let prompt = self.cursor.expect(TokenKind::StringLiteral, None)?;
        Ok(Expr::Input {
            prompt: prompt.text.clone(),
        })
    }
}
