//! Expression-level grammar rules.
//!
//! Expressions are not given internal structure. What matters is which
//! braces inside them are statement blocks:
//!
//! - `=> {` starts a lambda body (BLOCK)
//! - `delegate {` and `delegate (...) {` start an anonymous method body
//! - local functions `T F(...) {`, with or without a `where` clause, start
//!   a BLOCK
//! - any other `{` is an object, collection or switch-expression INITIALIZER

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::stmt;

/// Parse a run of expression tokens into an EXPR node.
///
/// Stops before any of `stops`, an unmatched `}` or end of input. Emits no
/// node when nothing was consumed.
pub(super) fn expr(p: &mut Parser<'_, '_>, stops: &[SyntaxKind]) {
    let m = p.start();
    if tokens(p, stops, false) {
        m.complete(p, SyntaxKind::EXPR);
    } else {
        m.abandon(p);
    }
}

/// Like [`expr`], for a whole expression or declaration statement.
///
/// A `{` right after `)` in a statement that has not assigned or
/// constructed anything is a local function body, which also ends the
/// statement.
pub(super) fn statement_expr(p: &mut Parser<'_, '_>) {
    let m = p.start();
    if tokens(p, &[SyntaxKind::SEMICOLON], true) {
        m.complete(p, SyntaxKind::EXPR);
    } else {
        m.abandon(p);
    }
}

/// Consume `open`, everything up to the matching `close`, then `close`.
pub(super) fn delimited(p: &mut Parser<'_, '_>, open: SyntaxKind, close: SyntaxKind) {
    debug_assert!(p.at(open));
    p.bump();
    tokens(p, &[close], false);
    p.eat(close);
}

fn tokens(p: &mut Parser<'_, '_>, stops: &[SyntaxKind], statement: bool) -> bool {
    let mut consumed = false;
    let mut saw_value = false;
    // `delegate` seen, its body not yet
    let mut delegate = false;
    // `where` clause after a local function's parameter list
    let mut constraints = false;

    while !p.at_end() && !p.at(SyntaxKind::R_BRACE) && !p.at_any(stops) {
        match p.current() {
            SyntaxKind::L_PAREN => delimited(p, SyntaxKind::L_PAREN, SyntaxKind::R_PAREN),
            SyntaxKind::L_BRACK => delimited(p, SyntaxKind::L_BRACK, SyntaxKind::R_BRACK),
            SyntaxKind::L_BRACE if delegate => {
                stmt::block(p);
                delegate = false;
            }
            SyntaxKind::L_BRACE
                if constraints || (p.last() == SyntaxKind::R_PAREN && !saw_value) =>
            {
                stmt::block(p);
                if statement {
                    return true;
                }
                constraints = false;
            }
            SyntaxKind::L_BRACE if p.last() == SyntaxKind::FAT_ARROW => stmt::block(p),
            SyntaxKind::L_BRACE => initializer(p),
            SyntaxKind::EQ | SyntaxKind::OPERATOR | SyntaxKind::FAT_ARROW => {
                saw_value = true;
                p.bump();
            }
            SyntaxKind::IDENT if p.current_text() == "new" => {
                saw_value = true;
                p.bump();
            }
            SyntaxKind::IDENT if p.current_text() == "delegate" => {
                delegate = true;
                p.bump();
            }
            SyntaxKind::IDENT
                if p.current_text() == "where"
                    && p.last() == SyntaxKind::R_PAREN
                    && !saw_value =>
            {
                constraints = true;
                p.bump();
            }
            _ => p.bump(),
        }
        consumed = true;
    }

    consumed
}

fn initializer(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    tokens(p, &[], false);
    p.eat(SyntaxKind::R_BRACE);
    m.complete(p, SyntaxKind::INITIALIZER);
}
