use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration {
        name: String,
        declared_type: Option<TypeName>,
        initializer: Option<Expr>,
    },

    // value is always an Expr::Input coming out of the parser
    Assignment {
        name: String,
        value: Expr,
    },

    /// Operators between operands are not kept; operands are printed side by side.
    Output {
        operands: Vec<Expr>,
    },

    If {
        test: BinaryExpr,
        consequent: Vec<Statement>,
        alternate: Option<Vec<Statement>>,
    },

    /// `name = input "prompt";` for a name no enclosing block declared.
    Input {
        name: String,
        prompt: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(String),
    Input { prompt: String },
    Binary(Box<BinaryExpr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Expr,
    pub operator: String,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Literal {
    pub fn type_name(&self) -> TypeName {
        match self {
            Literal::Str(_) => TypeName::Str,
            Literal::Int(_) => TypeName::Int,
            Literal::Bool(_) => TypeName::Bool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Str,
    Int,
    Bool,
}

impl TypeName {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "str" => Some(TypeName::Str),
            "int" => Some(TypeName::Int),
            "bool" => Some(TypeName::Bool),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            TypeName::Str => "str",
            TypeName::Int => "int",
            TypeName::Bool => "bool",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
