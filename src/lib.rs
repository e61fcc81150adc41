pub mod ast;
pub mod codegen;
pub mod cursor;
pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod runner;
pub mod validation;

#[cfg(test)]
mod test;

pub use diagnostic::{CompileError, ErrorKind};

/// Compiles a tx program to TypeScript: tokenize, validate, parse, generate.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = lexer::tokenize(source);
    validation::validate(&tokens)?;
    let ast = parser::parse(&tokens)?;
    Ok(codegen::generate(&ast))
}
