/*
 * compiler.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Single-pass template compiler.
//!
//! The compiler walks the source one character at a time in one of three
//! modes:
//!
//! - **Text**: characters accumulate into a literal. `\` starts an escape,
//!   `${` opens a variable and `#{` opens a comment.
//! - **Variable**: characters accumulate into the key until `}`.
//! - **Comment**: characters are dropped until `}`.
//!
//! Compilation never fails. Whatever is left in the buffer when the source
//! runs out becomes a final literal, so an unterminated `${name` simply
//! yields the literal `name` and an empty source yields one empty literal.

use crate::cursor::Cursor;
use crate::expr::Expr;

/// Parsing mode of the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Variable,
    Comment,
}

/// Compiler state for one pass over a template source.
#[derive(Debug)]
struct Compiler {
    cursor: Cursor,
    state: State,
}

/// Compile template source into its expression list.
///
/// The returned list is never empty: its last element is always a literal.
pub fn compile(source: &str) -> Vec<Expr> {
    let mut compiler = Compiler {
        cursor: Cursor::new(source),
        state: State::Text,
    };

    let mut exprs = Vec::new();
    while !compiler.cursor.is_exhausted() {
        let step = match compiler.state {
            State::Text => compiler.step_text(),
            State::Variable => compiler.step_variable(),
            State::Comment => compiler.step_comment(),
        };
        exprs.extend(step);
    }
    exprs.push(Expr::literal(compiler.cursor.pop_all()));

    tracing::debug!(
        source_len = source.len(),
        expressions = exprs.len(),
        "Compiled template"
    );
    exprs
}

impl Compiler {
    fn transition(&mut self, next: State) {
        tracing::trace!(
            from = ?self.state,
            to = ?next,
            offset = self.cursor.offset(),
            "Compiler state transition"
        );
        self.state = next;
    }

    fn step_text(&mut self) -> Option<Expr> {
        let c = self.cursor.next();
        match c {
            '\\' => {
                self.escape();
                None
            }
            '$' if self.cursor.peek() == '{' => {
                self.cursor.advance();
                self.transition(State::Variable);
                Some(Expr::literal(self.cursor.pop_all()))
            }
            '#' if self.cursor.peek() == '{' => {
                self.cursor.advance();
                self.transition(State::Comment);
                Some(Expr::literal(self.cursor.pop_all()))
            }
            _ => {
                self.cursor.push(c);
                None
            }
        }
    }

    /// Resolve the character after a backslash. At end of input this pushes
    /// the cursor sentinel.
    fn escape(&mut self) {
        let c = match self.cursor.next() {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            other => other,
        };
        self.cursor.push(c);
    }

    fn step_variable(&mut self) -> Option<Expr> {
        let c = self.cursor.next();
        if c == '}' {
            self.transition(State::Text);
            return Some(Expr::variable(self.cursor.pop_all()));
        }
        self.cursor.push(c);
        None
    }

    fn step_comment(&mut self) -> Option<Expr> {
        if self.cursor.next() == '}' {
            self.transition(State::Text);
            return Some(Expr::comment(self.cursor.pop_all()));
        }
        None
    }
}
