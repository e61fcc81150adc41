use crate::ast::{Statement, TypeName};

use std::collections::HashMap;

pub mod expression;
pub mod statement;

#[cfg(test)]
pub mod test;

/// Emitted once, ahead of everything else, when the program reads input.
pub const INPUT_HEADER: [&str; 2] = [
    "import promptSync from \"prompt-sync\";",
    "const prompt = promptSync();",
];

const INDENT: &str = "    ";

/// Emits TypeScript for a statement list.
pub struct TsCodegen {
    uses_input: bool,
    // innermost block last; None records a name bound without a known type
    scopes: Vec<HashMap<String, Option<TypeName>>>,
}

pub fn generate(ast: &[Statement]) -> String {
    TsCodegen::new().generate(ast)
}

impl Default for TsCodegen {
    fn default() -> Self {
        Self::new()
    }
}

impl TsCodegen {
    pub fn new() -> Self {
        Self {
            uses_input: false,
            scopes: vec![HashMap::new()],
        }
    }

    pub fn generate(mut self, ast: &[Statement]) -> String {
        let body = self.gen_statements(ast);

        let mut lines: Vec<String> = vec![];
        if self.uses_input {
            lines.extend(INPUT_HEADER.iter().map(|line| line.to_string()));
        }
        lines.extend(body);

        if lines.is_empty() {
            return String::new();
        }
        let mut code = lines.join("\n");
        code.push('\n');
        code
    }

    pub fn gen_statements(&mut self, statements: &[Statement]) -> Vec<String> {
        statements
            .iter()
            .map(|statement| self.gen_statement(statement))
            .collect()
    }

    /// Generates a nested block in its own scope, one indented line per row.
    pub fn gen_block(&mut self, statements: &[Statement]) -> String {
        self.scopes.push(HashMap::new());
        let code = self.gen_statements(statements).join("\n");
        self.scopes.pop();

        let mut block = String::new();
        for line in code.lines() {
            block.push_str(INDENT);
            block.push_str(line);
            block.push('\n');
        }
        block
    }

    fn bind(&mut self, name: &str, ty: Option<TypeName>) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), ty);
        }
    }

    fn lookup(&self, name: &str) -> Option<TypeName> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .copied()
            .flatten()
    }
}
