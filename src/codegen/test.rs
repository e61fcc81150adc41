use super::*;
use crate::ast::{BinaryExpr, Expr, Literal, Statement, TypeName};
use crate::codegen::expression::quote;

fn declare(name: &str, ty: Option<TypeName>, init: Option<Expr>) -> Statement {
    Statement::VariableDeclaration {
        name: name.to_string(),
        declared_type: ty,
        initializer: init,
    }
}

fn str_lit(s: &str) -> Expr {
    Expr::Literal(Literal::Str(s.to_string()))
}

fn input(prompt: &str) -> Expr {
    Expr::Input {
        prompt: prompt.to_string(),
    }
}

fn out(operands: Vec<Expr>) -> Statement {
    Statement::Output { operands }
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(name.to_string())
}

#[test]
fn test_empty_program() {
    assert_eq!(generate(&[]), "");
}

#[test]
fn test_declaration_with_literal() {
    let code = generate(&[
        declare("name", Some(TypeName::Str), Some(str_lit("hi"))),
        out(vec![ident("name")]),
    ]);
    assert_eq!(code, "let name: string = \"hi\";\nconsole.log(name);\n");
}

#[test]
fn test_declaration_type_is_inferred_from_literal() {
    let code = generate(&[
        declare("n", None, Some(Expr::Literal(Literal::Int(7)))),
        declare("b", None, Some(Expr::Literal(Literal::Bool(false)))),
        declare("s", None, Some(str_lit("x"))),
    ]);
    assert_eq!(
        code,
        "let n: number = 7;\nlet b: boolean = false;\nlet s: string = \"x\";\n"
    );
}

#[test]
fn test_declaration_without_initializer() {
    let code = generate(&[declare("x", Some(TypeName::Int), None), declare("y", None, None)]);
    assert_eq!(code, "let x: number;\nlet y;\n");
}

#[test]
fn test_input_coercions() {
    let code = generate(&[
        declare("s", Some(TypeName::Str), Some(input("s?"))),
        declare("n", Some(TypeName::Int), Some(input("n?"))),
        declare("b", Some(TypeName::Bool), Some(input("b?"))),
        declare("raw", None, Some(input("raw?"))),
    ]);
    assert_eq!(
        code,
        [
            INPUT_HEADER[0],
            INPUT_HEADER[1],
            "let s: string = prompt(\"s?\");",
            "let n: number = Number(prompt(\"n?\"));",
            "let b: boolean = prompt(\"b?\") === \"true\";",
            "let raw = prompt(\"raw?\");",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn test_header_appears_once() {
    let code = generate(&[
        declare("a", Some(TypeName::Int), Some(input("a"))),
        declare("b", Some(TypeName::Int), Some(input("b"))),
        Statement::Input {
            name: "c".to_string(),
            prompt: "c".to_string(),
        },
    ]);
    assert_eq!(code.matches(INPUT_HEADER[0]).count(), 1);
    assert_eq!(code.matches(INPUT_HEADER[1]).count(), 1);
    assert!(code.starts_with(INPUT_HEADER[0]));
}

#[test]
fn test_no_header_without_input() {
    let code = generate(&[out(vec![str_lit("hello")])]);
    assert!(!code.contains("prompt"));
}

#[test]
fn test_assignment_uses_declared_type() {
    let code = generate(&[
        declare("x", Some(TypeName::Int), None),
        Statement::Assignment {
            name: "x".to_string(),
            value: input("enter x"),
        },
        out(vec![ident("x")]),
    ]);
    assert_eq!(
        code,
        [
            INPUT_HEADER[0],
            INPUT_HEADER[1],
            "let x: number;",
            "x = Number(prompt(\"enter x\"));",
            "console.log(x);",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn test_assignment_without_known_type_is_raw() {
    let code = generate(&[
        declare("x", None, None),
        Statement::Assignment {
            name: "x".to_string(),
            value: input("x"),
        },
    ]);
    assert!(code.ends_with("let x;\nx = prompt(\"x\");\n"));
}

#[test]
fn test_input_statement() {
    let code = generate(&[Statement::Input {
        name: "who".to_string(),
        prompt: "name?".to_string(),
    }]);
    assert!(code.ends_with("let who = prompt(\"name?\");\n"));
}

#[test]
fn test_output_joins_operands_with_commas() {
    let code = generate(&[out(vec![
        str_lit("total: "),
        ident("n"),
        Expr::Literal(Literal::Int(3)),
        Expr::Literal(Literal::Bool(true)),
    ])]);
    assert_eq!(code, "console.log(\"total: \", n, 3, true);\n");
}

#[test]
fn test_if_else_blocks() {
    let code = generate(&[Statement::If {
        test: BinaryExpr {
            left: ident("a"),
            operator: "<".to_string(),
            right: Expr::Literal(Literal::Int(10)),
        },
        consequent: vec![out(vec![str_lit("small")])],
        alternate: Some(vec![out(vec![str_lit("big")])]),
    }]);
    assert_eq!(
        code,
        "if (a < 10) {\n    console.log(\"small\");\n} else {\n    console.log(\"big\");\n}\n"
    );
}

#[test]
fn test_nested_blocks_and_scoped_types() {
    let inner_if = Statement::If {
        test: BinaryExpr {
            left: ident("x"),
            operator: "==".to_string(),
            right: Expr::Literal(Literal::Int(1)),
        },
        consequent: vec![
            // shadows the outer int with an untyped binding
            declare("x", None, None),
            Statement::Assignment {
                name: "x".to_string(),
                value: input("inner"),
            },
        ],
        alternate: None,
    };
    let code = generate(&[
        declare("x", Some(TypeName::Int), None),
        inner_if,
        Statement::Assignment {
            name: "x".to_string(),
            value: input("outer"),
        },
    ]);
    assert_eq!(
        code,
        [
            INPUT_HEADER[0],
            INPUT_HEADER[1],
            "let x: number;",
            "if (x == 1) {",
            "    let x;",
            "    x = prompt(\"inner\");",
            "}",
            "x = Number(prompt(\"outer\"));",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn test_empty_block() {
    let code = generate(&[Statement::If {
        test: BinaryExpr {
            left: Expr::Literal(Literal::Int(1)),
            operator: "<".to_string(),
            right: Expr::Literal(Literal::Int(2)),
        },
        consequent: vec![],
        alternate: None,
    }]);
    assert_eq!(code, "if (1 < 2) {\n}\n");
}

#[test]
fn test_quote_escapes() {
    assert_eq!(quote("plain"), "\"plain\"");
    assert_eq!(quote(r"back\slash"), r#""back\\slash""#);
    assert_eq!(quote("new\nline"), r#""new\nline""#);
}
