use crate::diagnostic::CompileError;
use crate::lexer::Token;

use std::collections::HashSet;

/// Names visible at some point of the program and which of them hold a value.
///
/// A block starts from a copy of its parent (see [`Scope::child`]); whatever it
/// declares or initializes is dropped with it at the closing brace.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    declared: HashSet<String>,
    initialized: HashSet<String>,
    local: HashSet<String>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn child(&self) -> Self {
        Scope {
            declared: self.declared.clone(),
            initialized: self.initialized.clone(),
            local: HashSet::new(),
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    pub fn is_initialized(&self, name: &str) -> bool {
        self.initialized.contains(name)
    }

    pub fn is_local(&self, name: &str) -> bool {
        self.local.contains(name)
    }

    pub fn declare(&mut self, name: &str, initialized: bool) {
        self.declared.insert(name.to_string());
        self.local.insert(name.to_string());
        // a shadowing declaration starts over, whatever the outer name held
        if initialized {
            self.initialized.insert(name.to_string());
        } else {
            self.initialized.remove(name);
        }
    }

    pub fn initialize(&mut self, name: &str) {
        self.initialized.insert(name.to_string());
    }

    /// Checks that `token` names a variable that can be read here.
    pub fn check_readable(&self, token: &Token) -> Result<(), CompileError> {
        let name = token.text.as_str();
        if !self.is_declared(name) {
            return Err(CompileError::semantic(
                format!("use of undeclared variable '{}'", name),
                token.span.clone(),
            )
            .with_label("not declared in this scope")
            .with_note(format!("declare it first, e.g. 'mut str {} = \"...\";'", name)));
        }
        if !self.is_initialized(name) {
            return Err(CompileError::semantic(
                format!("variable '{}' is used before it is initialized", name),
                token.span.clone(),
            )
            .with_label("read here without a value")
            .with_note(format!(
                "give it a value in its declaration or with '{} = input \"...\";'",
                name
            )));
        }
        Ok(())
    }
}
