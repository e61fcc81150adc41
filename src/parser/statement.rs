use crate::ast::{BinaryExpr, Expr, Statement, TypeName};
use crate::diagnostic::CompileError;
use crate::lexer::TokenKind;
use crate::parser::Parser;
use crate::parser::expression::make_expr_node;

impl Parser<'_> {
    pub fn parse_declaration(&mut self) -> Result<Statement, CompileError> {
        self.cursor.next(); // 'mut'

        let declared_type = match self.cursor.peek() {
            Some(token) if token.kind == TokenKind::TypeName => {
                self.cursor.next();
                TypeName::from_keyword(&token.text)
            }
            _ => None,
        };
        let name = self.cursor.expect(TokenKind::Identifier, None)?;

        let initializer = match self.cursor.next() {
            Some(token) if token.is_semicolon() => None,
            Some(token) if token.is(TokenKind::Operator, "=") => {
                let value = match self.cursor.next() {
                    Some(token) if token.is_keyword("input") => self.parse_input_expression()?,
                    Some(token) if token.kind.is_literal() => make_expr_node(token)?,
                    found => {
                        return Err(CompileError::unexpected(
                            "a literal or 'input'",
                            found,
                            self.cursor.eof_span(),
                        ));
                    }
                };
                self.cursor.expect_semicolon()?;
                Some(value)
            }
            found => {
                return Err(CompileError::unexpected(
                    "'=' or ';'",
                    found,
                    self.cursor.eof_span(),
                ));
            }
        };

        self.declared.insert(name.text.clone());
        Ok(Statement::VariableDeclaration {
            name: name.text.clone(),
            declared_type,
            initializer,
        })
    }

    /// `name = input "prompt";` becomes an assignment when `name` is already
    /// bound, and an input statement that binds it otherwise.
    pub fn parse_input_assignment(&mut self) -> Result<Statement, CompileError> {
        let name = self.cursor.expect(TokenKind::Identifier, None)?;
        self.cursor.expect(TokenKind::Operator, Some("="))?;
        self.cursor.expect(TokenKind::Keyword, Some("input"))?;
        let prompt = self.cursor.expect(TokenKind::StringLiteral, None)?;
        self.cursor.expect_semicolon()?;

        if self.declared.contains(&name.text) {
            Ok(Statement::Assignment {
                name: name.text.clone(),
                value: Expr::Input {
                    prompt: prompt.text.clone(),
                },
            })
        } else {
            self.declared.insert(name.text.clone());
            Ok(Statement::Input {
                name: name.text.clone(),
                prompt: prompt.text.clone(),
            })
        }
    }

    pub fn parse_output(&mut self) -> Result<Statement, CompileError> {
        self.cursor.next(); // 'out'

        let mut operands = vec![self.parse_operand()?];
        loop {
            match self.cursor.next() {
                Some(token) if token.is_semicolon() => break,
                Some(token) if token.kind == TokenKind::Operator => {
                    operands.push(self.parse_operand()?);
                }
                found => {
                    return Err(CompileError::unexpected(
                        "an operator or ';'",
                        found,
                        self.cursor.eof_span(),
                    ));
                }
            }
        }
        Ok(Statement::Output { operands })
    }

    pub fn parse_if(&mut self) -> Result<Statement, CompileError> {
        self.cursor.next(); // 'if'

        self.cursor.expect(TokenKind::ParenOpen, None)?;
        let left = self.parse_operand()?;
        let operator = self.cursor.expect_comparison()?;
        let right = self.parse_operand()?;
        self.cursor.expect(TokenKind::ParenClose, None)?;

        let body = self.cursor.block()?;
        let consequent = self.parse_block(body)?;

        let alternate = if self.cursor.peek().is_some_and(|t| t.is_keyword("else")) {
            self.cursor.next();
            let body = self.cursor.block()?;
            Some(self.parse_block(body)?)
        } else {
            None
        };

        Ok(Statement::If {
            test: BinaryExpr {
                left,
                operator: operator.text.clone(),
                right,
            },
            consequent,
            alternate,
        })
    }
}
