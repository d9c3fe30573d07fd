use synvis_syntax::SyntaxKind::*;

use super::{exprs, type_ref, type_start};
use crate::parser::Parser;

pub(crate) fn compilation_unit(p: &mut Parser) {
    let m = p.start();

    while p.peek_kind() != EOF {
        member(p);
    }

    m.complete(p, COMPILATION_UNIT);
}

fn member(p: &mut Parser) {
    match p.peek_kind() {
        CLASS_KW => class_declaration(p),
        // Top-level statements, script style.
        _ => exprs::statement(p),
    }
}

fn class_declaration(p: &mut Parser) {
    let m = p.start();
    p.advance();

    p.expect(IDENT, "expected a class name");
    p.expect(LEFT_BRACE, "expected `{`");

    while !matches!(p.peek_kind(), RIGHT_BRACE | EOF) {
        class_member(p);
    }

    p.expect(RIGHT_BRACE, "expected `}`");
    m.complete(p, CLASS_DECLARATION);
}

fn class_member(p: &mut Parser) {
    match p.peek_kind() {
        CLASS_KW => class_declaration(p),
        kind if type_start(kind) => method_or_field(p),
        _ => p.error_and_bump("expected a class member"),
    }
}

/// Both start with `type name`; a following `(` makes it a method.
fn method_or_field(p: &mut Parser) {
    let m = p.start();
    type_ref(p);
    p.expect(IDENT, "expected a member name");

    if p.at(LEFT_PAREN) {
        parameter_list(p);
        exprs::block(p);
        m.complete(p, METHOD_DECLARATION);
    } else {
        if p.eat(EQ) {
            exprs::expr(p);
        }
        p.expect(SEMICOLON, "expected `;` after a field declaration");
        m.complete(p, FIELD_DECLARATION);
    }
}

fn parameter_list(p: &mut Parser) {
    let m = p.start();
    p.advance();

    while !matches!(p.peek_kind(), RIGHT_PAREN | EOF) {
        parameter(p);
        if !p.eat(COMMA) {
            break;
        }
    }

    p.expect(RIGHT_PAREN, "expected `)`");
    m.complete(p, PARAMETER_LIST);
}

fn parameter(p: &mut Parser) {
    if !type_start(p.peek_kind()) {
        p.error_and_bump("expected a parameter");
        return;
    }

    let m = p.start();
    type_ref(p);
    p.expect(IDENT, "expected a parameter name");
    m.complete(p, PARAMETER);
}
