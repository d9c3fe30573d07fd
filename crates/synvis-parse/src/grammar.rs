use synvis_syntax::SyntaxKind::{self, *};

use crate::parser::Parser;

mod exprs;
pub(crate) mod items;

fn type_start(kind: SyntaxKind) -> bool {
    matches!(kind, INT_KW | VOID_KW | BOOL_KW | STRING_KW | IDENT)
}

/// `int` / `void` / `bool` / `string` become `PREDEFINED_TYPE`, anything
/// named becomes `IDENTIFIER_NAME`.
fn type_ref(p: &mut Parser) {
    match p.peek_kind() {
        INT_KW | VOID_KW | BOOL_KW | STRING_KW => {
            let m = p.start();
            p.advance();
            m.complete(p, PREDEFINED_TYPE);
        }
        IDENT => {
            let m = p.start();
            p.advance();
            m.complete(p, IDENTIFIER_NAME);
        }
        _ => p.error("expected a type"),
    }
}
