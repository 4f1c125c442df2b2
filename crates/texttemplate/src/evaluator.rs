/*
 * evaluator.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template evaluation.
//!
//! Evaluation folds a compiled expression list into output text. It never
//! fails and never modifies the expressions or the environment.

use crate::environment::Environment;
use crate::expr::{Expr, ExprKind};

/// Evaluate a list of expressions against an environment.
pub fn evaluate(exprs: &[Expr], env: &Environment) -> String {
    exprs.iter().fold(String::new(), |mut out, expr| {
        out.push_str(evaluate_expr(expr, env));
        out
    })
}

fn evaluate_expr<'a>(expr: &'a Expr, env: &'a Environment) -> &'a str {
    match expr.kind() {
        ExprKind::Literal => expr.value(),
        // Unbound variables render as empty
        ExprKind::Variable => env.get(expr.value()).unwrap_or_default(),
        ExprKind::Comment => "",
    }
}
