pub mod reserved;
pub mod scope;
pub mod statement;


use crate::cursor::Cursor;
use crate::diagnostic::CompileError;
use crate::lexer::{Token, TokenKind};

use scope::Scope;

/// Second, independent walk over the grammar that checks names, initialization
/// and declared types before the parser builds anything.
pub struct Validator<'a> {
    cursor: Cursor<'a>,
    scope: Scope,
}

/// Validates a whole program. Stops at the first error.
pub fn validate(tokens: &[Token]) -> Result<(), CompileError> {
    if let Some(unknown) = tokens.iter().find(|t| t.kind == TokenKind::Unknown) {
        return Err(CompileError::syntax(
            format!("unrecognized character '{}'", unknown.text),
            unknown.span.clone(),
        )
        .with_label("not part of the language"));
    }
    Validator::new(tokens, Scope::new()).validate_program()
}

impl<'a> Validator<'a> {
    pub fn new(tokens: &'a [Token], scope: Scope) -> Self {
        Validator {
            cursor: Cursor::new(tokens),
            scope,
        }
    }

    pub fn validate_program(&mut self) -> Result<(), CompileError> {
        while let Some(token) = self.cursor.peek() {
            match token.kind {
                TokenKind::Keyword if token.text == "mut" => self.validate_declaration()?,
                TokenKind::Keyword if token.text == "out" => self.validate_output()?,
                TokenKind::Keyword if token.text == "if" => self.validate_if()?,
                TokenKind::Identifier
                    if self
                        .cursor
                        .peek_nth(1)
                        .is_some_and(|t| t.is(TokenKind::Operator, "=")) =>
                {
                    self.validate_input_assignment()?
                }
                _ => return Err(unknown_statement(token)),
            }
        }
        Ok(())
    }

    /// Validates a block body against a snapshot of the current scope.
    fn validate_block(&self, body: &[Token]) -> Result<(), CompileError> {
        Validator::new(body, self.scope.child()).validate_program()
    }
}

fn unknown_statement(token: &Token) -> CompileError {
    if token.kind == TokenKind::BraceClose {
        return CompileError::syntax("unmatched '}'", token.span.clone())
            .with_label("no block is open here");
    }

    let mut error = CompileError::syntax(
        format!(
            "unknown statement starting with {} at {}",
            token.describe(),
            token.position()
        ),
        token.span.clone(),
    )
    .with_label("statements start with 'mut', 'out', 'if' or 'name = input'");

    // `mutstr x`: keyword glued to the type name
    if token.kind == TokenKind::Identifier {
        if let Some(rest) = token.text.strip_prefix("mut") {
            if let Some(ty) = ["str", "int", "bool"].iter().find(|ty| rest.starts_with(**ty)) {
                error = error.with_note(format!(
                    "'{}' is not valid syntax, add a space: 'mut {}'",
                    token.text, ty
                ));
            }
        }
    }
    error
}
