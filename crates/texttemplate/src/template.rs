/*
 * template.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The template facade.
//!
//! A [`Template`] holds its source text and compiles it on first use. The
//! compiled expression list is computed once and reused by every later
//! evaluation.

use std::convert::Infallible;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::compiler;
use crate::environment::Environment;
use crate::evaluator;
use crate::expr::Expr;

/// A text template.
#[derive(Debug, Clone, Default)]
pub struct Template {
    /// Template source text.
    source: String,

    /// Compiled expressions. Empty until the first `compile()`.
    exprs: OnceLock<Vec<Expr>>,
}

impl Template {
    /// Create a template from source text.
    ///
    /// This does not compile the template; compilation happens on the first
    /// evaluation or an explicit call to [`Template::compile`].
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            exprs: OnceLock::new(),
        }
    }

    /// The template source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compile the template.
    ///
    /// Calling this more than once has no further effect.
    pub fn compile(&self) {
        self.expressions();
    }

    /// Whether the template has been compiled.
    pub fn is_compiled(&self) -> bool {
        self.exprs.get().is_some_and(|exprs| !exprs.is_empty())
    }

    /// The compiled expression list, compiling first if necessary.
    pub fn expressions(&self) -> &[Expr] {
        self.exprs.get_or_init(|| compiler::compile(&self.source))
    }

    /// Evaluate the template in the given environment.
    ///
    /// Variables whose key is not bound in `env` render as the empty string.
    pub fn evaluate(&self, env: &Environment) -> String {
        evaluator::evaluate(self.expressions(), env)
    }

    /// Evaluate the template with no bindings.
    pub fn evaluate_empty(&self) -> String {
        self.evaluate(&Environment::new())
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Render `text` with `values` bound to `${0}`, `${1}`, ... in order.
///
/// ```
/// assert_eq!(texttemplate::render("abc${0}", ["def"]), "abcdef");
/// ```
pub fn render<I, S>(text: &str, values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Template::new(text).evaluate(&Environment::from_positional(values))
}
