// AST (Abstract Syntax Tree) definitions for VSL

/// Expression nodes.
///
/// Every composite node exclusively owns its children, so a parsed tree is
/// acyclic and freed when dropped. Nodes are built during parsing and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal like `1.0`
    Number(f64),
    /// Reference to a variable, like `a`
    Variable(String),
    /// Binary operator applied to two sub-expressions
    Binary {
        op: char,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Function call with zero or more argument expressions
    Call { callee: String, args: Vec<Expr> },
}

/// The "prototype" for a function: its name and ordered parameter names
/// (and thus implicitly the number of arguments it takes).
///
/// Parameter names are not validated for uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    pub fn new(name: String, params: Vec<String>) -> Self {
        Self { name, params }
    }

    /// The empty prototype used to wrap top-level expressions as functions.
    pub fn anonymous() -> Self {
        Self {
            name: String::new(),
            params: Vec::new(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty() && self.params.is_empty()
    }
}

/// A function definition: a prototype plus a single body expression.
///
/// Every parse result is rooted here. Bare top-level expressions become the
/// body of a function with a [`Prototype::anonymous`] prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub proto: Prototype,
    pub body: Expr,
}

impl Function {
    pub fn new(proto: Prototype, body: Expr) -> Self {
        Self { proto, body }
    }
}
