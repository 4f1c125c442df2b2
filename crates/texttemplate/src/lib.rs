/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Minimal text template engine.
//!
//! Templates are plain text with three kinds of markup:
//!
//! - Variable interpolation: `${name}`
//! - Comments: `#{ not rendered }`
//! - Backslash escapes: `\n`, `\r`, `\t`, and `\X` for a literal `X`
//!   (for example `\$`, `\#`, `\\`)
//!
//! There are no conditionals, loops or nested structures. Compilation and
//! evaluation never fail: unterminated markup degrades to literal text and
//! unbound variables render as the empty string.
//!
//! # Architecture
//!
//! Source text is scanned by a [`cursor::Cursor`] and compiled by a
//! single-pass state machine into a list of [`Expr`] values. The list is
//! computed once per [`Template`] and can then be evaluated against any
//! number of [`Environment`]s.
//!
//! # Example
//!
//! ```
//! use texttemplate::{Environment, Template};
//!
//! let template = Template::new("Hello, ${name}!#{ greeting }");
//!
//! let mut env = Environment::new();
//! env.insert("name", "World");
//!
//! assert_eq!(template.evaluate(&env), "Hello, World!");
//! assert_eq!(texttemplate::render("${0} + ${1}", ["a", "b"]), "a + b");
//! ```

pub mod compiler;
pub mod cursor;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod expr;
pub mod template;

// Re-export main types at crate root
pub use environment::Environment;
pub use error::{EnvironmentError, EnvironmentResult};
pub use expr::{Expr, ExprKind};
pub use template::{Template, render};
