use expect_test::{Expect, expect};

fn check(text: &str, expected: Expect) {
    let parse = crate::parse(text).unwrap();
    expected.assert_eq(&parse.root.debug());
}

#[test]
fn local_declaration() {
    check(
        "int x = 1;",
        expect![[r#"
            COMPILATION_UNIT@0..10
              LOCAL_DECLARATION@0..10
                PREDEFINED_TYPE@0..3
                  INT_KW@0..3 "int"
                IDENT@4..5 "x"
                EQ@6..7 "="
                LITERAL_EXPRESSION@8..9
                  NUMBER@8..9 "1"
                SEMICOLON@9..10 ";"
        "#]],
    );
}

#[test]
fn class_with_empty_method() {
    check(
        "class C { void M() {} }",
        expect![[r#"
            COMPILATION_UNIT@0..23
              CLASS_DECLARATION@0..23
                CLASS_KW@0..5 "class"
                IDENT@6..7 "C"
                LEFT_BRACE@8..9 "{"
                METHOD_DECLARATION@10..21
                  PREDEFINED_TYPE@10..14
                    VOID_KW@10..14 "void"
                  IDENT@15..16 "M"
                  PARAMETER_LIST@16..18
                    LEFT_PAREN@16..17 "("
                    RIGHT_PAREN@17..18 ")"
                  BLOCK@19..21
                    LEFT_BRACE@19..20 "{"
                    RIGHT_BRACE@20..21 "}"
                RIGHT_BRACE@22..23 "}"
        "#]],
    );
}

#[test]
fn invocation_expression() {
    check(
        "f(1);",
        expect![[r#"
            COMPILATION_UNIT@0..5
              EXPRESSION_STATEMENT@0..5
                INVOCATION_EXPRESSION@0..4
                  IDENTIFIER_NAME@0..1
                    IDENT@0..1 "f"
                  ARGUMENT_LIST@1..4
                    LEFT_PAREN@1..2 "("
                    LITERAL_EXPRESSION@2..3
                      NUMBER@2..3 "1"
                    RIGHT_PAREN@3..4 ")"
                SEMICOLON@4..5 ";"
        "#]],
    );
}

#[test]
fn binary_expression() {
    check(
        "1 + 2;",
        expect![[r#"
            COMPILATION_UNIT@0..6
              EXPRESSION_STATEMENT@0..6
                BINARY_EXPRESSION@0..5
                  LITERAL_EXPRESSION@0..1
                    NUMBER@0..1 "1"
                  OPERATOR@2..3 "+"
                  LITERAL_EXPRESSION@4..5
                    NUMBER@4..5 "2"
                SEMICOLON@5..6 ";"
        "#]],
    );
}

#[test]
fn missing_name_still_builds_a_tree() {
    let parse = crate::parse("int = 5;").unwrap();

    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].message, "expected a variable name");
    expect![[r#"
        COMPILATION_UNIT@0..8
          LOCAL_DECLARATION@0..8
            PREDEFINED_TYPE@0..3
              INT_KW@0..3 "int"
            EQ@4..5 "="
            LITERAL_EXPRESSION@6..7
              NUMBER@6..7 "5"
            SEMICOLON@7..8 ";"
    "#]]
    .assert_eq(&parse.root.debug());
}

#[test]
fn stray_tokens_become_error_nodes() {
    let parse = crate::parse("class C { @ }").unwrap();

    assert!(!parse.errors.is_empty());
    expect![[r#"
        COMPILATION_UNIT@0..13
          CLASS_DECLARATION@0..13
            CLASS_KW@0..5 "class"
            IDENT@6..7 "C"
            LEFT_BRACE@8..9 "{"
            ERROR@10..11
              UNKNOWN@10..11 "@"
            RIGHT_BRACE@12..13 "}"
    "#]]
    .assert_eq(&parse.root.debug());
}

#[test]
fn same_text_parses_to_the_same_tree() {
    let text = "class C { int x = 1; void M() { return; } }";
    let first = crate::parse(text).unwrap();
    let second = crate::parse(text).unwrap();

    assert_eq!(first.root, second.root);
    assert_eq!(first.errors, second.errors);
}
