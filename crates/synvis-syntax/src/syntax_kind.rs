#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    // Tokens.
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACE,
    RIGHT_BRACE,
    SEMICOLON,
    COMMA,
    DOT,
    EQ,

    CLASS_KW,
    RETURN_KW,
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    INT_KW,
    VOID_KW,
    BOOL_KW,
    STRING_KW,
    TRUE_KW,
    FALSE_KW,

    IDENT,
    NUMBER,
    STRING_LITERAL,
    OPERATOR,

    UNKNOWN,
    EOF,

    // Nodes.
    COMPILATION_UNIT,
    CLASS_DECLARATION,
    METHOD_DECLARATION,
    FIELD_DECLARATION,
    PARAMETER_LIST,
    PARAMETER,
    PREDEFINED_TYPE,
    IDENTIFIER_NAME,
    BLOCK,
    LOCAL_DECLARATION,
    EXPRESSION_STATEMENT,
    RETURN_STATEMENT,
    IF_STATEMENT,
    WHILE_STATEMENT,
    BINARY_EXPRESSION,
    ASSIGNMENT_EXPRESSION,
    PREFIX_UNARY_EXPRESSION,
    INVOCATION_EXPRESSION,
    ARGUMENT_LIST,
    MEMBER_ACCESS_EXPRESSION,
    PARENTHESIZED_EXPRESSION,
    LITERAL_EXPRESSION,

    ERROR,
    TOMBSTONE,
}

impl SyntaxKind {
    pub fn is_token(self) -> bool {
        use SyntaxKind::*;

        matches!(
            self,
            LEFT_PAREN
                | RIGHT_PAREN
                | LEFT_BRACE
                | RIGHT_BRACE
                | SEMICOLON
                | COMMA
                | DOT
                | EQ
                | CLASS_KW
                | RETURN_KW
                | IF_KW
                | ELSE_KW
                | WHILE_KW
                | INT_KW
                | VOID_KW
                | BOOL_KW
                | STRING_KW
                | TRUE_KW
                | FALSE_KW
                | IDENT
                | NUMBER
                | STRING_LITERAL
                | OPERATOR
                | UNKNOWN
                | EOF
        )
    }

    /// Grammar-facing name of the kind, in the front-end's own naming
    /// convention.
    pub fn name(self) -> &'static str {
        use SyntaxKind::*;

        match self {
            LEFT_PAREN => "OpenParenToken",
            RIGHT_PAREN => "CloseParenToken",
            LEFT_BRACE => "OpenBraceToken",
            RIGHT_BRACE => "CloseBraceToken",
            SEMICOLON => "SemicolonToken",
            COMMA => "CommaToken",
            DOT => "DotToken",
            EQ => "EqualsToken",
            CLASS_KW => "ClassKeyword",
            RETURN_KW => "ReturnKeyword",
            IF_KW => "IfKeyword",
            ELSE_KW => "ElseKeyword",
            WHILE_KW => "WhileKeyword",
            INT_KW => "IntKeyword",
            VOID_KW => "VoidKeyword",
            BOOL_KW => "BoolKeyword",
            STRING_KW => "StringKeyword",
            TRUE_KW => "TrueKeyword",
            FALSE_KW => "FalseKeyword",
            IDENT => "IdentifierToken",
            NUMBER => "NumericLiteralToken",
            STRING_LITERAL => "StringLiteralToken",
            OPERATOR => "OperatorToken",
            UNKNOWN => "BadToken",
            EOF => "EndOfFileToken",
            COMPILATION_UNIT => "CompilationUnit",
            CLASS_DECLARATION => "ClassDeclaration",
            METHOD_DECLARATION => "MethodDeclaration",
            FIELD_DECLARATION => "FieldDeclaration",
            PARAMETER_LIST => "ParameterList",
            PARAMETER => "Parameter",
            PREDEFINED_TYPE => "PredefinedType",
            IDENTIFIER_NAME => "IdentifierName",
            BLOCK => "Block",
            LOCAL_DECLARATION => "LocalDeclarationStatement",
            EXPRESSION_STATEMENT => "ExpressionStatement",
            RETURN_STATEMENT => "ReturnStatement",
            IF_STATEMENT => "IfStatement",
            WHILE_STATEMENT => "WhileStatement",
            BINARY_EXPRESSION => "BinaryExpression",
            ASSIGNMENT_EXPRESSION => "SimpleAssignmentExpression",
            PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpression",
            INVOCATION_EXPRESSION => "InvocationExpression",
            ARGUMENT_LIST => "ArgumentList",
            MEMBER_ACCESS_EXPRESSION => "SimpleMemberAccessExpression",
            PARENTHESIZED_EXPRESSION => "ParenthesizedExpression",
            LITERAL_EXPRESSION => "LiteralExpression",
            ERROR => "SkippedTokens",
            TOMBSTONE => "Tombstone",
        }
    }

    /// Concrete class name of the element in the front-end's type system.
    /// Every token shares one type; rule nodes each have their own.
    pub fn type_name(self) -> &'static str {
        use SyntaxKind::*;

        match self {
            COMPILATION_UNIT => "CompilationUnitSyntax",
            CLASS_DECLARATION => "ClassDeclarationSyntax",
            METHOD_DECLARATION => "MethodDeclarationSyntax",
            FIELD_DECLARATION => "FieldDeclarationSyntax",
            PARAMETER_LIST => "ParameterListSyntax",
            PARAMETER => "ParameterSyntax",
            PREDEFINED_TYPE => "PredefinedTypeSyntax",
            IDENTIFIER_NAME => "IdentifierNameSyntax",
            BLOCK => "BlockSyntax",
            LOCAL_DECLARATION => "LocalDeclarationStatementSyntax",
            EXPRESSION_STATEMENT => "ExpressionStatementSyntax",
            RETURN_STATEMENT => "ReturnStatementSyntax",
            IF_STATEMENT => "IfStatementSyntax",
            WHILE_STATEMENT => "WhileStatementSyntax",
            BINARY_EXPRESSION => "BinaryExpressionSyntax",
            ASSIGNMENT_EXPRESSION => "AssignmentExpressionSyntax",
            PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpressionSyntax",
            INVOCATION_EXPRESSION => "InvocationExpressionSyntax",
            ARGUMENT_LIST => "ArgumentListSyntax",
            MEMBER_ACCESS_EXPRESSION => "MemberAccessExpressionSyntax",
            PARENTHESIZED_EXPRESSION => "ParenthesizedExpressionSyntax",
            LITERAL_EXPRESSION => "LiteralExpressionSyntax",
            ERROR => "SkippedTokensSyntax",
            TOMBSTONE => "TombstoneSyntax",
            _ => "SyntaxToken",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SyntaxKind::*;

    #[test]
    fn tokens_share_one_type_name() {
        for kind in [LEFT_PAREN, RIGHT_PAREN, CLASS_KW, IDENT, NUMBER, OPERATOR, UNKNOWN, EOF] {
            assert!(kind.is_token());
            assert_eq!(kind.type_name(), "SyntaxToken");
        }
    }

    #[test]
    fn node_kinds_have_their_own_type_names() {
        assert_eq!(COMPILATION_UNIT.type_name(), "CompilationUnitSyntax");
        assert_eq!(METHOD_DECLARATION.type_name(), "MethodDeclarationSyntax");
        assert_eq!(ERROR.type_name(), "SkippedTokensSyntax");
        assert_eq!(IDENT.name(), "IdentifierToken");
        assert_eq!(CLASS_DECLARATION.name(), "ClassDeclaration");
    }
}
