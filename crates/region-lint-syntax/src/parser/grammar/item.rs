//! Declaration-level grammar rules.

use crate::parser::{Marker, Parser};
use crate::syntax_kind::SyntaxKind;

use super::{expr, stmt};

const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "internal",
    "static",
    "readonly",
    "const",
    "virtual",
    "override",
    "abstract",
    "sealed",
    "async",
    "extern",
    "partial",
    "new",
    "volatile",
    "required",
    "file",
    "implicit",
    "explicit",
];

const ACCESSORS: &[&str] = &["get", "set", "init", "add", "remove"];

/// Parse one declaration: using directive, namespace, type or member.
///
/// Callers guarantee the parser is not at `}` or end of input.
pub(super) fn member(p: &mut Parser<'_, '_>) {
    let m = p.start();

    attributes(p);
    modifiers(p);

    match p.current() {
        SyntaxKind::USING_KW => using_directive(p, m),
        SyntaxKind::NAMESPACE_KW => namespace(p, m),
        SyntaxKind::CLASS_KW => type_decl(p, m, SyntaxKind::CLASS),
        SyntaxKind::STRUCT_KW => type_decl(p, m, SyntaxKind::STRUCT),
        SyntaxKind::INTERFACE_KW => type_decl(p, m, SyntaxKind::INTERFACE),
        SyntaxKind::ENUM_KW => enum_decl(p, m),
        SyntaxKind::IDENT
            if p.at_contextual("record")
                && matches!(
                    p.nth(1),
                    SyntaxKind::IDENT | SyntaxKind::CLASS_KW | SyntaxKind::STRUCT_KW
                ) =>
        {
            type_decl(p, m, SyntaxKind::RECORD)
        }
        // Attributes or modifiers with nothing after them
        SyntaxKind::R_BRACE | SyntaxKind::EOF => m.complete(p, SyntaxKind::ERROR),
        _ => member_signature(p, m),
    }
}

fn attributes(p: &mut Parser<'_, '_>) {
    while p.at(SyntaxKind::L_BRACK) {
        let m = p.start();
        expr::delimited(p, SyntaxKind::L_BRACK, SyntaxKind::R_BRACK);
        m.complete(p, SyntaxKind::ATTRIBUTE);
    }
}

fn modifiers(p: &mut Parser<'_, '_>) {
    loop {
        let word = p.current_text();
        let is_modifier = (p.at(SyntaxKind::IDENT) && MODIFIERS.contains(&word))
            || p.at(SyntaxKind::UNSAFE_KW)
            || (p.at_contextual("global") && p.nth(1) == SyntaxKind::USING_KW);
        if !is_modifier {
            break;
        }
        p.bump();
    }
}

fn using_directive(p: &mut Parser<'_, '_>, m: Marker) {
    p.bump();
    while !p.at_end()
        && !p.at_any(&[
            SyntaxKind::SEMICOLON,
            SyntaxKind::L_BRACE,
            SyntaxKind::R_BRACE,
        ])
    {
        p.bump();
    }
    p.eat(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::USING_DIRECTIVE);
}

fn namespace(p: &mut Parser<'_, '_>, m: Marker) {
    p.bump();
    while p.at_any(&[SyntaxKind::IDENT, SyntaxKind::DOT]) {
        p.bump();
    }

    if p.at(SyntaxKind::L_BRACE) {
        let body = p.start();
        p.bump();
        members_until_close(p);
        p.eat(SyntaxKind::R_BRACE);
        body.complete(p, SyntaxKind::NAMESPACE_BODY);
    } else if p.eat(SyntaxKind::SEMICOLON) {
        // File-scoped: the rest of the file belongs to the namespace
        while !p.at_end() {
            if p.at(SyntaxKind::R_BRACE) {
                p.bump_error();
            } else {
                member(p);
            }
        }
    }

    m.complete(p, SyntaxKind::NAMESPACE);
}

fn members_until_close(p: &mut Parser<'_, '_>) {
    while !p.at_end() && !p.at(SyntaxKind::R_BRACE) {
        member(p);
    }
}

fn type_decl(p: &mut Parser<'_, '_>, m: Marker, kind: SyntaxKind) {
    if kind == SyntaxKind::RECORD {
        p.bump();
        if !p.eat(SyntaxKind::CLASS_KW) {
            p.eat(SyntaxKind::STRUCT_KW);
        }
    } else {
        p.bump();
    }

    // Name, type parameters, primary constructor, base list, constraints
    loop {
        match p.current() {
            SyntaxKind::L_BRACE
            | SyntaxKind::SEMICOLON
            | SyntaxKind::R_BRACE
            | SyntaxKind::EOF => break,
            SyntaxKind::L_PAREN => param_list(p),
            _ => p.bump(),
        }
    }

    if p.at(SyntaxKind::L_BRACE) {
        let body = p.start();
        p.bump();
        members_until_close(p);
        p.eat(SyntaxKind::R_BRACE);
        body.complete(p, SyntaxKind::TYPE_BODY);
    }
    p.eat(SyntaxKind::SEMICOLON);

    m.complete(p, kind);
}

fn enum_decl(p: &mut Parser<'_, '_>, m: Marker) {
    p.bump();
    while !p.at_end()
        && !p.at_any(&[
            SyntaxKind::L_BRACE,
            SyntaxKind::SEMICOLON,
            SyntaxKind::R_BRACE,
        ])
    {
        p.bump();
    }

    if p.at(SyntaxKind::L_BRACE) {
        let body = p.start();
        p.bump();
        while !p.at_end() && !p.at(SyntaxKind::R_BRACE) {
            p.bump();
        }
        p.eat(SyntaxKind::R_BRACE);
        body.complete(p, SyntaxKind::ENUM_BODY);
    }
    p.eat(SyntaxKind::SEMICOLON);

    m.complete(p, SyntaxKind::ENUM);
}

/// Parse a member whose kind is decided by the first of `(`, `{`, `=>`,
/// `=`, `;` or `,` after its header.
fn member_signature(p: &mut Parser<'_, '_>, m: Marker) {
    // Identifiers outside type arguments: one means a constructor (`Foo(`),
    // two or more a method (`void Foo(`)
    let mut names = 0;
    let mut angle_depth = 0usize;

    loop {
        match p.current() {
            SyntaxKind::L_PAREN => {
                let kind = if names <= 1 {
                    SyntaxKind::CONSTRUCTOR
                } else {
                    SyntaxKind::METHOD
                };
                param_list(p);
                method_rest(p);
                m.complete(p, kind);
                return;
            }
            SyntaxKind::L_BRACE => {
                accessor_list(p);
                if p.at(SyntaxKind::EQ) {
                    expr::expr(p, &[SyntaxKind::SEMICOLON]);
                    p.eat(SyntaxKind::SEMICOLON);
                }
                m.complete(p, SyntaxKind::PROPERTY);
                return;
            }
            SyntaxKind::FAT_ARROW => {
                expr_body(p);
                m.complete(p, SyntaxKind::PROPERTY);
                return;
            }
            SyntaxKind::COMMA if angle_depth > 0 => p.bump(),
            SyntaxKind::EQ | SyntaxKind::SEMICOLON | SyntaxKind::COMMA => {
                expr::expr(p, &[SyntaxKind::SEMICOLON]);
                p.eat(SyntaxKind::SEMICOLON);
                m.complete(p, SyntaxKind::FIELD);
                return;
            }
            SyntaxKind::R_BRACE | SyntaxKind::EOF => {
                m.complete(p, SyntaxKind::ERROR);
                return;
            }
            SyntaxKind::L_BRACK => expr::delimited(p, SyntaxKind::L_BRACK, SyntaxKind::R_BRACK),
            SyntaxKind::L_ANGLE => {
                angle_depth += 1;
                p.bump();
            }
            SyntaxKind::R_ANGLE => {
                angle_depth = angle_depth.saturating_sub(1);
                p.bump();
            }
            SyntaxKind::IDENT => {
                if angle_depth == 0 {
                    names += 1;
                }
                p.bump();
            }
            _ => p.bump(),
        }
    }
}

fn param_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    expr::delimited(p, SyntaxKind::L_PAREN, SyntaxKind::R_PAREN);
    m.complete(p, SyntaxKind::PARAM_LIST);
}

/// Constructor initializer or constraints, then the body.
fn method_rest(p: &mut Parser<'_, '_>) {
    loop {
        match p.current() {
            SyntaxKind::L_BRACE => {
                stmt::block(p);
                break;
            }
            SyntaxKind::FAT_ARROW => {
                expr_body(p);
                break;
            }
            SyntaxKind::SEMICOLON => {
                p.bump();
                break;
            }
            SyntaxKind::R_BRACE | SyntaxKind::EOF => break,
            SyntaxKind::L_PAREN => expr::delimited(p, SyntaxKind::L_PAREN, SyntaxKind::R_PAREN),
            _ => p.bump(),
        }
    }
}

fn expr_body(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    expr::expr(p, &[SyntaxKind::SEMICOLON]);
    p.eat(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::EXPR_BODY);
}

fn accessor_list(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    while !p.at_end() && !p.at(SyntaxKind::R_BRACE) {
        accessor(p);
    }
    p.eat(SyntaxKind::R_BRACE);
    m.complete(p, SyntaxKind::ACCESSOR_LIST);
}

fn accessor(p: &mut Parser<'_, '_>) {
    let m = p.start();
    attributes(p);
    while p.at(SyntaxKind::IDENT)
        && ["public", "private", "protected", "internal", "readonly"].contains(&p.current_text())
    {
        p.bump();
    }

    if p.at(SyntaxKind::IDENT) && ACCESSORS.contains(&p.current_text()) {
        p.bump();
        match p.current() {
            SyntaxKind::L_BRACE => stmt::block(p),
            SyntaxKind::FAT_ARROW => expr_body(p),
            SyntaxKind::SEMICOLON => p.bump(),
            _ => {}
        }
        m.complete(p, SyntaxKind::ACCESSOR);
    } else {
        if !p.at_end() && !p.at(SyntaxKind::R_BRACE) {
            p.bump();
        }
        m.complete(p, SyntaxKind::ERROR);
    }
}
