use crate::ast::{Expr, Statement};
use crate::codegen::TsCodegen;
use crate::codegen::expression::ts_type;

impl TsCodegen {
    pub fn gen_statement(&mut self, statement: &Statement) -> String {
        match statement {
            Statement::VariableDeclaration {
                name,
                declared_type,
                initializer,
            } => {
                let ty = declared_type.or(match initializer {
                    Some(Expr::Literal(literal)) => Some(literal.type_name()),
                    _ => None,
                });
                let annotation = ty
                    .map(|ty| format!(": {}", ts_type(ty)))
                    .unwrap_or_default();

                let code = match initializer {
                    None => format!("let {}{};", name, annotation),
                    Some(Expr::Input { prompt }) => {
                        let value = self.input_call(prompt, *declared_type);
                        format!("let {}{} = {};", name, annotation, value)
                    }
                    Some(value) => {
                        let value = self.format_expr(value);
                        format!("let {}{} = {};", name, annotation, value)
                    }
                };
                self.bind(name, ty);
                code
            }

            Statement::Assignment { name, value } => {
                let value = match value {
                    Expr::Input { prompt } => {
                        let ty = self.lookup(name);
                        self.input_call(prompt, ty)
                    }
                    other => self.format_expr(other),
                };
                format!("{} = {};", name, value)
            }

            Statement::Input { name, prompt } => {
                let value = self.input_call(prompt, None);
                self.bind(name, None);
                format!("let {} = {};", name, value)
            }

            Statement::Output { operands } => {
                let args: Vec<String> = operands
                    .iter()
                    .map(|operand| self.format_expr(operand))
                    .collect();
                format!("console.log({});", args.join(", "))
            }

            Statement::If {
                test,
                consequent,
                alternate,
            } => {
                let mut code = format!("if ({}) {{\n", self.format_binary(test));
                code.push_str(&self.gen_block(consequent));
                code.push('}');
                if let Some(alternate) = alternate {
                    code.push_str(" else {\n");
                    code.push_str(&self.gen_block(alternate));
                    code.push('}');
                }
                code
            }
        }
    }
}
