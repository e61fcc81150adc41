use crate::diagnostic::CompileError;
use crate::lexer::Token;

/// Names the generated TypeScript already uses, or that TypeScript won't accept
/// as a `let` binding. Language keywords (`mut`, `out`, ...) never reach here
/// because the lexer doesn't classify them as identifiers.
pub const RESERVED_NAMES: &[&str] = &[
    // bound or called by generated code
    "prompt",
    "promptSync",
    "console",
    "Number",
    // reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "enum",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    // strict mode and module code
    "arguments",
    "await",
    "eval",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    // globals that can't be shadowed safely
    "undefined",
    "NaN",
    "Infinity",
    "globalThis",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Rejects a variable name that would clash with the generated TypeScript.
pub fn check_name(name: &Token) -> Result<(), CompileError> {
    if is_reserved(&name.text) {
        return Err(CompileError::semantic(
            format!("'{}' is reserved and cannot be used as a variable name", name.text),
            name.span.clone(),
        )
        .with_label("reserved in the generated TypeScript")
        .with_note("pick another name"));
    }
    Ok(())
}
