pub mod expression;
pub mod statement;


use crate::ast::Statement;
use crate::cursor::Cursor;
use crate::diagnostic::CompileError;
use crate::lexer::{Token, TokenKind};

use std::collections::HashSet;

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    // names bound so far in this block and the blocks around it
    declared: HashSet<String>,
}

/// Builds the statement list for a whole program.
pub fn parse(tokens: &[Token]) -> Result<Vec<Statement>, CompileError> {
    Parser::new(tokens, HashSet::new()).parse_program()
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], declared: HashSet<String>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            declared,
        }
    }

    pub fn parse_program(&mut self) -> Result<Vec<Statement>, CompileError> {
        let mut tree = vec![];
        while let Some(token) = self.cursor.peek() {
            let statement = match token.kind {
                TokenKind::Keyword if token.text == "mut" => self.parse_declaration()?,
                TokenKind::Keyword if token.text == "out" => self.parse_output()?,
                TokenKind::Keyword if token.text == "if" => self.parse_if()?,
                TokenKind::Identifier => self.parse_input_assignment()?,
                _ => {
                    return Err(CompileError::unexpected(
                        "a statement",
                        Some(token),
                        self.cursor.eof_span(),
                    ));
                }
            };
            tree.push(statement);
        }
        Ok(tree)
    }

    fn parse_block(&self, body: &[Token]) -> Result<Vec<Statement>, CompileError> {
        Parser::new(body, self.declared.clone()).parse_program()
    }
}
