use crate::ast::TypeName;
use crate::diagnostic::{CompileError, ErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::validation::Validator;
use crate::validation::reserved::check_name;

fn literal_type(kind: TokenKind) -> Option<TypeName> {
    match kind {
        TokenKind::StringLiteral => Some(TypeName::Str),
        TokenKind::NumberLiteral => Some(TypeName::Int),
        TokenKind::BooleanLiteral => Some(TypeName::Bool),
        _ => None,
    }
}

fn missing_semicolon(error: CompileError) -> CompileError {
    error.with_note("every statement ends with ';'")
}

impl Validator<'_> {
    /// `mut [type] name [= (input "prompt" | literal)] ;`
    pub fn validate_declaration(&mut self) -> Result<(), CompileError> {
        self.cursor.next(); // 'mut'

        let declared_type = match self.cursor.peek() {
            Some(token) if token.kind == TokenKind::TypeName => {
                self.cursor.next();
                TypeName::from_keyword(&token.text)
            }
            _ => None,
        };

        let name = self.cursor.expect(TokenKind::Identifier, None)?;
        check_name(name)?;
        if self.scope.is_local(&name.text) {
            return Err(CompileError::semantic(
                format!("variable '{}' is already declared in this block", name.text),
                name.span.clone(),
            )
            .with_label("declared again here"));
        }

        let initialized = match self.cursor.next() {
            Some(token) if token.is_semicolon() => false,
            Some(token) if token.is(TokenKind::Operator, "=") => {
                self.validate_initializer(name, declared_type)?;
                self.cursor.expect_semicolon().map_err(missing_semicolon)?;
                true
            }
            found => {
                return Err(missing_semicolon(CompileError::unexpected(
                    "'=' or ';'",
                    found,
                    self.cursor.eof_span(),
                )));
            }
        };

        self.scope.declare(&name.text, initialized);
        Ok(())
    }

    fn validate_initializer(
        &mut self,
        name: &Token,
        declared_type: Option<TypeName>,
    ) -> Result<(), CompileError> {
        let Some(value) = self.cursor.next() else {
            return Err(CompileError::unexpected(
                "a value or 'input'",
                None,
                self.cursor.eof_span(),
            ));
        };

        if value.is_keyword("input") {
            return match self.cursor.next() {
                Some(prompt) if prompt.kind == TokenKind::StringLiteral => Ok(()),
                found => Err(CompileError::unexpected(
                    "a string literal prompt after 'input'",
                    found,
                    self.cursor.eof_span(),
                )),
            };
        }

        let Some(value_type) = literal_type(value.kind) else {
            return Err(CompileError::unexpected(
                "a string, number or boolean literal, or 'input'",
                Some(value),
                self.cursor.eof_span(),
            ));
        };

        if let Some(declared_type) = declared_type {
            if declared_type != value_type {
                return Err(CompileError::semantic(
                    format!(
                        "type mismatch: '{}' is declared '{}' but initialized with {}",
                        name.text,
                        declared_type,
                        value.describe()
                    ),
                    value.span.clone(),
                )
                .with_label(format!("this is a '{}' value", value_type))
                .with_note("values are never converted between 'str', 'int' and 'bool'"));
            }
        }
        Ok(())
    }

    /// `name = input "prompt" ;` on an already declared name.
    pub fn validate_input_assignment(&mut self) -> Result<(), CompileError> {
        let name = self.cursor.expect(TokenKind::Identifier, None)?;
        check_name(name)?;
        if !self.scope.is_declared(&name.text) {
            return Err(CompileError::semantic(
                format!("cannot assign to undeclared variable '{}'", name.text),
                name.span.clone(),
            )
            .with_label("not declared in this scope")
            .with_note(format!("declare it first with 'mut {};'", name.text)));
        }

        self.expect_input_tail().map_err(|error| {
            CompileError {
                kind: ErrorKind::Semantic,
                message: format!("malformed input statement: {}", error.message),
                ..error
            }
            .with_note(format!(
                "assignments have the form '{} = input \"prompt\";'",
                name.text
            ))
        })?;

        self.scope.initialize(&name.text);
        Ok(())
    }

    fn expect_input_tail(&mut self) -> Result<(), CompileError> {
        self.cursor.expect(TokenKind::Operator, Some("="))?;
        self.cursor.expect(TokenKind::Keyword, Some("input"))?;
        self.cursor.expect(TokenKind::StringLiteral, None)?;
        self.cursor.expect_semicolon()?;
        Ok(())
    }

    /// `out operand (operator operand)* ;`
    pub fn validate_output(&mut self) -> Result<(), CompileError> {
        self.cursor.next(); // 'out'

        loop {
            self.validate_operand()?;

            match self.cursor.next() {
                Some(token) if token.is_semicolon() => return Ok(()),
                Some(operator) if operator.kind == TokenKind::Operator => {
                    let dangling = match self.cursor.peek() {
                        None => true,
                        Some(next) => !next.kind.is_operand(),
                    };
                    if dangling {
                        return Err(CompileError::syntax(
                            format!("dangling operator '{}' has no operand after it", operator.text),
                            operator.span.clone(),
                        )
                        .with_label("expected a value after this"));
                    }
                }
                found => {
                    return Err(missing_semicolon(CompileError::unexpected(
                        "an operator or ';'",
                        found,
                        self.cursor.eof_span(),
                    )));
                }
            }
        }
    }

    /// An identifier, string, number or boolean. Identifiers must be readable.
    fn validate_operand(&mut self) -> Result<(), CompileError> {
        match self.cursor.next() {
            Some(token) if token.kind == TokenKind::Identifier => self.scope.check_readable(token),
            Some(token) if token.kind.is_literal() => Ok(()),
            found => Err(CompileError::unexpected(
                "an identifier or literal",
                found,
                self.cursor.eof_span(),
            )),
        }
    }

    /// `if ( operand operator operand ) { ... } [else { ... }]`
    pub fn validate_if(&mut self) -> Result<(), CompileError> {
        self.cursor.next(); // 'if'

        self.cursor.expect(TokenKind::ParenOpen, None)?;
        self.validate_operand()?;
        self.cursor.expect_comparison()?;
        self.validate_operand()?;
        self.cursor.expect(TokenKind::ParenClose, None)?;

        let consequent = self.cursor.block()?;
        self.validate_block(consequent)?;

        if self.cursor.peek().is_some_and(|t| t.is_keyword("else")) {
            self.cursor.next();
            let alternate = self.cursor.block()?;
            self.validate_block(alternate)?;
        }
        Ok(())
    }
}
