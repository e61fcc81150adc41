use super::*;
use crate::codegen::INPUT_HEADER;

fn compile_ok(source: &str) -> String {
    match compile(source) {
        Ok(code) => code,
        Err(err) => panic!("failed to compile {:?}: {}", source, err),
    }
}

#[test]
fn test_hello_program() {
    assert_eq!(
        compile_ok("mut str name = \"hi\"; out name;"),
        "let name: string = \"hi\";\nconsole.log(name);\n"
    );
}

#[test]
fn test_input_program() {
    let code = compile_ok("mut int x; x = input \"enter x\"; out x;");
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
fn test_conditional_program() {
    let source = "
        mut int age = input \"age?\";
        mut bool member = true;
        if (age >= 18) {
            out \"adult\";
            if (member == true) { out \"welcome back\"; }
        } else {
            mut str note = \"minor\";
            out note + age;
        }
    ";
    let code = compile_ok(source);
    assert_eq!(
        code,
        [
            INPUT_HEADER[0],
            INPUT_HEADER[1],
            "let age: number = Number(prompt(\"age?\"));",
            "let member: boolean = true;",
            "if (age >= 18) {",
            "    console.log(\"adult\");",
            "    if (member == true) {",
            "        console.log(\"welcome back\");",
            "    }",
            "} else {",
            "    let note: string = \"minor\";",
            "    console.log(note, age);",
            "}",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn test_compile_is_idempotent() {
    let source = "mut bool ok = input \"ok?\"; if (ok == true) { out \"yes\"; } else { out \"no\"; }";
    assert_eq!(compile_ok(source), compile_ok(source));
}

#[test]
fn test_type_fidelity() {
    let err = compile("mut str x = 5;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Semantic);
    assert!(compile("mut str x = \"5\";").is_ok());
}

#[test]
fn test_declared_before_use() {
    let err = compile("out missing;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Semantic);

    let err = compile("mut int a = 1; if (a == missing) { out a; }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Semantic);
}

#[test]
fn test_initialization_gate() {
    let err = compile("mut int never; out never;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Semantic);
}

#[test]
fn test_brace_balance() {
    let err = compile("mut int a = 1; mut int b = 1; if (a == b) { out a; ").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
}

#[test]
fn test_host_names_cannot_be_declared() {
    for name in ["prompt", "console", "new"] {
        let err = compile(&format!("mut int {} = 1; out {};", name, name)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Semantic, "{}", name);
    }
}

#[test]
fn test_assignment_in_condition_is_rejected() {
    let err = compile("mut int x = 1; if (x = 2) { out x; }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.to_string(), "SyntaxError at 21: '=' is not a comparison operator");
}

#[test]
fn test_unsafe_integer_is_rejected() {
    let err = compile("out 9007199254740993;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(compile_ok("out 9007199254740991;"), "console.log(9007199254740991);\n");
}

#[test]
fn test_error_display() {
    let err = compile("out y;").unwrap_err();
    assert_eq!(err.to_string(), "SemanticError at 4: use of undeclared variable 'y'");
}

#[test]
fn test_error_report_renders() {
    let source = "mut int x = \"no\";";
    let err = compile(source).unwrap_err();

    let mut rendered = vec![];
    err.report("test.tx")
        .write(
            ("test.tx".to_string(), ariadne::Source::from(source.to_string())),
            &mut rendered,
        )
        .unwrap();
    let rendered = String::from_utf8_lossy(&rendered);
    assert!(rendered.contains("type mismatch"));
    assert!(rendered.contains("test.tx"));
}
