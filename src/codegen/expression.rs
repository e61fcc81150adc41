use crate::ast::{BinaryExpr, Expr, Literal, TypeName};
use crate::codegen::TsCodegen;

pub fn ts_type(ty: TypeName) -> &'static str {
    match ty {
        TypeName::Str => "string",
        TypeName::Int => "number",
        TypeName::Bool => "boolean",
    }
}

/// Double-quoted string literal, escaped the way JSON escapes strings.
pub fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

pub fn format_literal(literal: &Literal) -> String {
    match literal {
        Literal::Str(s) => quote(s),
        Literal::Int(i) => i.to_string(),
        Literal::Bool(b) => b.to_string(),
    }
}

impl TsCodegen {
    /// `prompt("...")`, converted to the type the value is stored as.
    pub fn input_call(&mut self, prompt: &str, ty: Option<TypeName>) -> String {
        self.uses_input = true;
        let call = format!("prompt({})", quote(prompt));
        match ty {
            Some(TypeName::Int) => format!("Number({})", call),
            Some(TypeName::Bool) => format!("{} === \"true\"", call),
            Some(TypeName::Str) | None => call,
        }
    }

    pub fn format_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => format_literal(literal),
            Expr::Identifier(name) => name.clone(),
            Expr::Input { prompt } => self.input_call(prompt, None),
            Expr::Binary(binary) => self.format_binary(binary),
        }
    }

    pub fn format_binary(&mut self, binary: &BinaryExpr) -> String {
        let left = self.format_expr(&binary.left);
        let right = self.format_expr(&binary.right);
        format!("{} {} {}", left, binary.operator, right)
    }
}
