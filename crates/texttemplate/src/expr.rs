/*
 * expr.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Compiled template expressions.

use std::fmt;

/// The kind of a compiled expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// Text output verbatim.
    Literal,

    /// Variable lookup: `${key}`
    Variable,

    /// Comment (not rendered): `#{...}`
    Comment,
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExprKind::Literal => "Literal",
            ExprKind::Variable => "Variable",
            ExprKind::Comment => "Comment",
        };
        f.write_str(name)
    }
}

/// One compiled unit of a template.
///
/// For a [`ExprKind::Literal`] the value is the output text, for a
/// [`ExprKind::Variable`] it is the lookup key, and for a
/// [`ExprKind::Comment`] it is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    kind: ExprKind,
    value: String,
}

impl Expr {
    pub fn new(kind: ExprKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(ExprKind::Literal, text)
    }

    pub fn variable(key: impl Into<String>) -> Self {
        Self::new(ExprKind::Variable, key)
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(ExprKind::Comment, text)
    }

    pub fn kind(&self) -> ExprKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Debug rendering: `Literal("text")`, `Variable("key")`, `Comment("")`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
