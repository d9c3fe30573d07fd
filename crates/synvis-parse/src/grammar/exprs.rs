use synvis_syntax::SyntaxKind::*;

use super::type_ref;
use crate::parser::{CompletedMarker, Parser};

pub(crate) fn statement(p: &mut Parser) {
    match p.peek_kind() {
        // A predefined type can only open a declaration here; `C c = ...`
        // with a user-defined type is out of the subset.
        INT_KW | VOID_KW | BOOL_KW | STRING_KW => local_declaration(p),
        RETURN_KW => return_statement(p),
        IF_KW => if_statement(p),
        WHILE_KW => while_statement(p),
        LEFT_BRACE => block(p),
        _ => expression_statement(p),
    }
}

pub(crate) fn block(p: &mut Parser) {
    if !p.at(LEFT_BRACE) {
        p.error("expected a block");
        return;
    }

    let m = p.start();
    p.advance();

    while !matches!(p.peek_kind(), RIGHT_BRACE | EOF) {
        statement(p);
    }

    p.expect(RIGHT_BRACE, "expected `}`");
    m.complete(p, BLOCK);
}

fn local_declaration(p: &mut Parser) {
    let m = p.start();
    type_ref(p);
    p.expect(IDENT, "expected a variable name");

    if p.eat(EQ) {
        expr(p);
    }

    p.expect(SEMICOLON, "expected `;` after a declaration");
    m.complete(p, LOCAL_DECLARATION);
}

fn return_statement(p: &mut Parser) {
    let m = p.start();
    p.advance();

    if !p.at(SEMICOLON) {
        expr(p);
    }

    p.expect(SEMICOLON, "expected `;` after `return`");
    m.complete(p, RETURN_STATEMENT);
}

fn if_statement(p: &mut Parser) {
    let m = p.start();
    p.advance();

    p.expect(LEFT_PAREN, "expected `(` after `if`");
    expr(p);
    p.expect(RIGHT_PAREN, "expected `)`");
    statement(p);

    if p.eat(ELSE_KW) {
        statement(p);
    }

    m.complete(p, IF_STATEMENT);
}

fn while_statement(p: &mut Parser) {
    let m = p.start();
    p.advance();

    p.expect(LEFT_PAREN, "expected `(` after `while`");
    expr(p);
    p.expect(RIGHT_PAREN, "expected `)`");
    statement(p);

    m.complete(p, WHILE_STATEMENT);
}

fn expression_statement(p: &mut Parser) {
    let m = p.start();

    if expr(p).is_none() {
        // `expr` already reported and consumed the offending token.
        m.complete(p, EXPRESSION_STATEMENT);
        return;
    }

    p.expect(SEMICOLON, "expected `;` after an expression");
    m.complete(p, EXPRESSION_STATEMENT);
}

pub(crate) fn expr(p: &mut Parser) -> Option<CompletedMarker> {
    let lhs = binary_expr(p)?;

    if p.at(EQ) {
        let m = lhs.precede(p);
        p.advance();
        expr(p);
        return m.complete(p, ASSIGNMENT_EXPRESSION).into();
    }

    lhs.into()
}

fn binary_expr(p: &mut Parser) -> Option<CompletedMarker> {
    let mut lhs = unary_expr(p)?;

    while p.at(OPERATOR) {
        let m = lhs.precede(p);
        p.advance();
        unary_expr(p);
        lhs = m.complete(p, BINARY_EXPRESSION);
    }

    lhs.into()
}

fn unary_expr(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        OPERATOR => {
            let m = p.start();
            p.advance();
            unary_expr(p);
            m.complete(p, PREFIX_UNARY_EXPRESSION).into()
        }
        _ => postfix_expr(p),
    }
}

fn postfix_expr(p: &mut Parser) -> Option<CompletedMarker> {
    let mut m = primary_expr(p)?;

    loop {
        match p.peek_kind() {
            DOT => {
                let outer = m.precede(p);
                p.advance();
                p.expect(IDENT, "expected a member name after `.`");
                m = outer.complete(p, MEMBER_ACCESS_EXPRESSION);
            }
            LEFT_PAREN => {
                let outer = m.precede(p);
                argument_list(p);
                m = outer.complete(p, INVOCATION_EXPRESSION);
            }
            _ => break,
        }
    }

    m.into()
}

fn argument_list(p: &mut Parser) {
    let m = p.start();
    p.advance();

    while !matches!(p.peek_kind(), RIGHT_PAREN | EOF) {
        if expr(p).is_none() {
            break;
        }
        if !p.eat(COMMA) {
            break;
        }
    }

    p.expect(RIGHT_PAREN, "expected `)`");
    m.complete(p, ARGUMENT_LIST);
}

fn primary_expr(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        NUMBER | STRING_LITERAL | TRUE_KW | FALSE_KW => {
            let m = p.start();
            p.advance();
            m.complete(p, LITERAL_EXPRESSION).into()
        }
        IDENT => {
            let m = p.start();
            p.advance();
            m.complete(p, IDENTIFIER_NAME).into()
        }
        LEFT_PAREN => {
            let m = p.start();
            p.advance();
            if !p.at(RIGHT_PAREN) {
                expr(p);
            }
            p.expect(RIGHT_PAREN, "expected `)`");
            m.complete(p, PARENTHESIZED_EXPRESSION).into()
        }
        _ => {
            p.error_and_bump("expected an expression");
            None
        }
    }
}
