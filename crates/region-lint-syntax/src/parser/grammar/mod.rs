//! # Grammar Rules
//!
//! This module contains the grammar rules that drive parsing. Each function
//! takes a `&mut Parser` and uses its methods to:
//!
//! 1. Inspect the current token (`p.current()`, `p.at()`, `p.nth()`)
//! 2. Consume tokens (`p.bump()`, `p.eat()`)
//! 3. Build tree structure (`p.start()` → marker → `complete()`/`abandon()`)
//!
//! ## Module Structure
//!
//! - [`item`] - Declarations: namespaces, types, members, accessors
//! - [`stmt`] - Statements inside element bodies
//! - [`expr`] - Expression token runs, bracket matching, lambda bodies
//!
//! ## How Much C# Is Parsed
//!
//! Only as much structure as is needed to know which braces are statement
//! blocks. Declarations are recognised by the first of `(`, `{`, `=>`, `=`,
//! `;` that follows the member header; expressions are flat token runs with
//! balanced brackets.
//!
//! ## Error Recovery
//!
//! Grammar functions are lenient and never fail:
//!
//! - Stray closing braces at declaration level become ERROR nodes
//! - Missing closers are simply not consumed
//! - Every loop consumes at least one token per iteration
//!
//! The result is always a tree that preserves all input bytes.

mod expr;
mod item;
mod stmt;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the root compilation unit.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();

    while !p.at_end() {
        if p.at(SyntaxKind::R_BRACE) {
            p.bump_error();
        } else {
            item::member(p);
        }
    }

    m.complete(p, SyntaxKind::ROOT);
}
