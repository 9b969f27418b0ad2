//! Indented tree rendering for parsed VSL constructs
//!
//! A read-only consumer of the AST used for diagnostics and tests. Nodes are
//! emitted in pre-order, one per line, indented two spaces per level of
//! structural depth (accumulated parent to child, so unbalanced trees render
//! faithfully).

use crate::parser::ast::{Expr, Function};

const INDENT: &str = "  ";

/// Render an expression tree as indented text, rooted at depth 0.
pub fn render_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, 0);
    out
}

/// Render a function definition: prototype section first, then the body
/// subtree.
pub fn render_function(func: &Function) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, "Function");
    push_line(&mut out, 1, "Prototype");
    if !func.proto.name.is_empty() {
        push_line(&mut out, 2, &func.proto.name);
    }
    for param in &func.proto.params {
        push_line(&mut out, 2, param);
    }
    push_line(&mut out, 1, "Body");
    write_expr(&mut out, &func.body, 2);
    out
}

fn write_expr(out: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::Number(value) => push_line(out, depth, &value.to_string()),
        Expr::Variable(name) => push_line(out, depth, name),
        Expr::Binary { op, lhs, rhs } => {
            push_line(out, depth, &op.to_string());
            write_expr(out, lhs, depth + 1);
            write_expr(out, rhs, depth + 1);
        }
        Expr::Call { callee, args } => {
            push_line(out, depth, callee);
            for arg in args {
                write_expr(out, arg, depth + 1);
            }
        }
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::Prototype;

    #[test]
    fn test_binary_leaves_sit_one_level_below_operator() {
        let expr = Expr::Binary {
            op: '+',
            lhs: Box::new(Expr::Number(1.0)),
            rhs: Box::new(Expr::Number(2.0)),
        };
        assert_eq!(render_expr(&expr), "+\n  1\n  2\n");
    }

    #[test]
    fn test_unbalanced_tree_uses_structural_depth() {
        // ((1-2)-3): the inner subtraction's leaves are two levels down,
        // while the outer right leaf stays at depth 1.
        let expr = Expr::Binary {
            op: '-',
            lhs: Box::new(Expr::Binary {
                op: '-',
                lhs: Box::new(Expr::Number(1.0)),
                rhs: Box::new(Expr::Number(2.0)),
            }),
            rhs: Box::new(Expr::Number(3.0)),
        };
        assert_eq!(render_expr(&expr), "-\n  -\n    1\n    2\n  3\n");
    }

    #[test]
    fn test_call_renders_args_as_children() {
        let expr = Expr::Call {
            callee: "add".to_string(),
            args: vec![
                Expr::Number(1.0),
                Expr::Variable("x".to_string()),
            ],
        };
        assert_eq!(render_expr(&expr), "add\n  1\n  x\n");
    }

    #[test]
    fn test_function_sections() {
        let func = Function::new(
            Prototype::new("add".to_string(), vec!["a".to_string(), "b".to_string()]),
            Expr::Binary {
                op: '+',
                lhs: Box::new(Expr::Variable("a".to_string())),
                rhs: Box::new(Expr::Variable("b".to_string())),
            },
        );
        let rendered = render_function(&func);
        assert_eq!(
            rendered,
            "Function\n  Prototype\n    add\n    a\n    b\n  Body\n    +\n      a\n      b\n"
        );
    }

    #[test]
    fn test_anonymous_function_has_empty_prototype_section() {
        let func = Function::new(Prototype::anonymous(), Expr::Number(7.0));
        assert_eq!(
            render_function(&func),
            "Function\n  Prototype\n  Body\n    7\n"
        );
    }
}
