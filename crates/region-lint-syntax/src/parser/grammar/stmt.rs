//! Statement-level grammar rules.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::expr;

/// Parse a braces-delimited statement block.
///
/// Expects the parser to be at `{`.
pub(super) fn block(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    while !p.at_end() && !p.at(SyntaxKind::R_BRACE) {
        statement(p);
    }
    p.eat(SyntaxKind::R_BRACE);
    m.complete(p, SyntaxKind::BLOCK);
}

/// Parse a single statement.
///
/// Callers guarantee the parser is not at `}` or end of input.
fn statement(p: &mut Parser<'_, '_>) {
    match p.current() {
        SyntaxKind::L_BRACE => block(p),
        SyntaxKind::SEMICOLON => {
            let m = p.start();
            p.bump();
            m.complete(p, SyntaxKind::EMPTY_STMT);
        }
        SyntaxKind::IF_KW => if_stmt(p),
        SyntaxKind::WHILE_KW => header_stmt(p, SyntaxKind::WHILE_STMT),
        SyntaxKind::FOR_KW => header_stmt(p, SyntaxKind::FOR_STMT),
        SyntaxKind::FOREACH_KW => header_stmt(p, SyntaxKind::FOREACH_STMT),
        SyntaxKind::LOCK_KW => header_stmt(p, SyntaxKind::LOCK_STMT),
        SyntaxKind::FIXED_KW => header_stmt(p, SyntaxKind::FIXED_STMT),
        SyntaxKind::USING_KW => using_stmt(p),
        SyntaxKind::DO_KW => do_stmt(p),
        SyntaxKind::TRY_KW => try_stmt(p),
        SyntaxKind::SWITCH_KW => switch_stmt(p),
        SyntaxKind::RETURN_KW => return_stmt(p),
        SyntaxKind::CHECKED_KW | SyntaxKind::UNCHECKED_KW if p.nth(1) == SyntaxKind::L_BRACE => {
            keyword_block_stmt(p, SyntaxKind::CHECKED_STMT)
        }
        SyntaxKind::UNSAFE_KW if p.nth(1) == SyntaxKind::L_BRACE => {
            keyword_block_stmt(p, SyntaxKind::UNSAFE_STMT)
        }
        SyntaxKind::ELSE_KW | SyntaxKind::CATCH_KW | SyntaxKind::FINALLY_KW | SyntaxKind::CASE_KW => {
            p.bump_error()
        }
        _ => expr_stmt(p),
    }
}

/// Body of `if`, `while`, `else`, ... which may be missing in broken input.
fn embedded(p: &mut Parser<'_, '_>) {
    if !p.at_end() && !p.at(SyntaxKind::R_BRACE) {
        statement(p);
    }
}

fn condition(p: &mut Parser<'_, '_>) {
    if p.at(SyntaxKind::L_PAREN) {
        let m = p.start();
        expr::delimited(p, SyntaxKind::L_PAREN, SyntaxKind::R_PAREN);
        m.complete(p, SyntaxKind::CONDITION);
    }
}

fn if_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    condition(p);
    embedded(p);

    if p.at(SyntaxKind::ELSE_KW) {
        let else_clause = p.start();
        p.bump();
        embedded(p);
        else_clause.complete(p, SyntaxKind::ELSE_CLAUSE);
    }

    m.complete(p, SyntaxKind::IF_STMT);
}

/// `keyword (header) statement`
fn header_stmt(p: &mut Parser<'_, '_>, kind: SyntaxKind) {
    let m = p.start();
    p.bump();
    condition(p);
    embedded(p);
    m.complete(p, kind);
}

fn using_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    if p.at(SyntaxKind::L_PAREN) {
        condition(p);
        embedded(p);
    } else {
        // using var x = ...;
        expr::expr(p, &[SyntaxKind::SEMICOLON]);
        p.eat(SyntaxKind::SEMICOLON);
    }
    m.complete(p, SyntaxKind::USING_STMT);
}

fn do_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    embedded(p);
    if p.eat(SyntaxKind::WHILE_KW) {
        condition(p);
    }
    p.eat(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::DO_STMT);
}

fn try_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    if p.at(SyntaxKind::L_BRACE) {
        block(p);
    }

    while p.at(SyntaxKind::CATCH_KW) {
        let catch = p.start();
        p.bump();
        condition(p);
        if p.at_contextual("when") {
            p.bump();
            condition(p);
        }
        if p.at(SyntaxKind::L_BRACE) {
            block(p);
        }
        catch.complete(p, SyntaxKind::CATCH_CLAUSE);
    }

    if p.at(SyntaxKind::FINALLY_KW) {
        let finally = p.start();
        p.bump();
        if p.at(SyntaxKind::L_BRACE) {
            block(p);
        }
        finally.complete(p, SyntaxKind::FINALLY_CLAUSE);
    }

    m.complete(p, SyntaxKind::TRY_STMT);
}

fn switch_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    condition(p);

    if p.at(SyntaxKind::L_BRACE) {
        let body = p.start();
        p.bump();
        while !p.at_end() && !p.at(SyntaxKind::R_BRACE) {
            switch_section(p);
        }
        p.eat(SyntaxKind::R_BRACE);
        body.complete(p, SyntaxKind::SWITCH_BODY);
    }

    m.complete(p, SyntaxKind::SWITCH_STMT);
}

fn at_switch_label(p: &Parser<'_, '_>) -> bool {
    p.at(SyntaxKind::CASE_KW) || (p.at(SyntaxKind::DEFAULT_KW) && p.nth(1) == SyntaxKind::COLON)
}

fn switch_section(p: &mut Parser<'_, '_>) {
    let m = p.start();

    while at_switch_label(p) {
        p.bump();
        expr::expr(p, &[SyntaxKind::COLON]);
        p.eat(SyntaxKind::COLON);
    }

    while !p.at_end() && !p.at(SyntaxKind::R_BRACE) && !at_switch_label(p) {
        statement(p);
    }

    m.complete(p, SyntaxKind::SWITCH_SECTION);
}

fn return_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    expr::expr(p, &[SyntaxKind::SEMICOLON]);
    p.eat(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::RETURN_STMT);
}

/// `checked { }`, `unchecked { }`, `unsafe { }`
fn keyword_block_stmt(p: &mut Parser<'_, '_>, kind: SyntaxKind) {
    let m = p.start();
    p.bump();
    block(p);
    m.complete(p, kind);
}

fn expr_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    expr::statement_expr(p);
    p.eat(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::EXPR_STMT);
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use crate::syntax_kind::{SyntaxKind, SyntaxNode};
    use pretty_assertions::assert_eq;

    fn method_body(source: &str) -> SyntaxNode {
        let tree = parse(&format!("class C {{ void M() {{ {source} }} }}"));
        tree.descendants()
            .find(|n| n.kind() == SyntaxKind::BLOCK)
            .unwrap()
    }

    fn statement_kinds(block: &SyntaxNode) -> Vec<SyntaxKind> {
        block.children().map(|n| n.kind()).collect()
    }

    #[test]
    fn control_flow_statements() {
        let body = method_body(
            "if (a) { } else if (b) x(); else { } \
             while (true) { break; } \
             do { } while (c); \
             for (int i = 0; i < n; i++) { } \
             foreach (var x in xs) y(); \
             return;",
        );

        assert_eq!(
            statement_kinds(&body),
            vec![
                SyntaxKind::IF_STMT,
                SyntaxKind::WHILE_STMT,
                SyntaxKind::DO_STMT,
                SyntaxKind::FOR_STMT,
                SyntaxKind::FOREACH_STMT,
                SyntaxKind::RETURN_STMT,
            ]
        );
    }

    #[test]
    fn try_catch_finally() {
        let body = method_body("try { } catch (E e) when (e.Code == 1) { } catch { } finally { }");
        let try_stmt = body.children().next().unwrap();

        assert_eq!(try_stmt.kind(), SyntaxKind::TRY_STMT);
        assert_eq!(
            statement_kinds(&try_stmt),
            vec![
                SyntaxKind::BLOCK,
                SyntaxKind::CATCH_CLAUSE,
                SyntaxKind::CATCH_CLAUSE,
                SyntaxKind::FINALLY_CLAUSE,
            ]
        );
    }

    #[test]
    fn switch_sections_are_not_blocks() {
        let body = method_body("switch (x) { case 1: a(); break; case 2: default: { b(); } break; }");
        let switch = body.children().next().unwrap();
        let switch_body = switch
            .children()
            .find(|n| n.kind() == SyntaxKind::SWITCH_BODY)
            .unwrap();

        assert_eq!(
            statement_kinds(&switch_body),
            vec![SyntaxKind::SWITCH_SECTION, SyntaxKind::SWITCH_SECTION]
        );
    }

    #[test]
    fn guarded_statements() {
        let body = method_body(
            "using (var s = Open()) { } using var t = Open(); lock (o) { } \
             checked { } unsafe { } fixed (int* q = &v) { } ;",
        );

        assert_eq!(
            statement_kinds(&body),
            vec![
                SyntaxKind::USING_STMT,
                SyntaxKind::USING_STMT,
                SyntaxKind::LOCK_STMT,
                SyntaxKind::CHECKED_STMT,
                SyntaxKind::UNSAFE_STMT,
                SyntaxKind::FIXED_STMT,
                SyntaxKind::EMPTY_STMT,
            ]
        );
    }

    #[test]
    fn stray_else_is_an_error() {
        let body = method_body("else x();");
        assert_eq!(
            statement_kinds(&body),
            vec![SyntaxKind::ERROR, SyntaxKind::EXPR_STMT]
        );
    }
}
