//! Tokenizer for the C#-subset front-end. Whitespace and comments become
//! trivia attached to the neighboring token rather than tokens of their own,
//! so the parse tree's token spans cover exactly the meaningful source text.

mod cursor;

use cursor::{Cursor, EOF_CHAR};
pub use synvis_syntax::SyntaxKind;
use synvis_syntax::SyntaxKind::*;
use synvis_syntax::{Trivia, TriviaPiece, TriviaPieceKind};
use text_size::{TextRange, TextSize};

#[derive(Clone, Debug)]
pub struct Token {
    pub leading: Trivia,
    pub kind: SyntaxKind,
    pub kind_range: TextRange,
    pub trailing: Trivia,
}

impl Token {
    const EOF: Self = Self {
        leading: Trivia::empty(),
        kind: EOF,
        kind_range: TextRange::empty(TextSize::new(0)),
        trailing: Trivia::empty(),
    };
}

pub struct Tokenizer<'t> {
    cursor: Cursor<'t>,
    current: Token,
    trivia_pieces: Vec<TriviaPiece>,
}

impl<'t> Tokenizer<'t> {
    pub fn new(text: &'t str) -> Self {
        let mut tokenizer =
            Self { cursor: Cursor::new(text), current: Token::EOF, trivia_pieces: Vec::new() };
        tokenizer.next_token();
        tokenizer
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token and returns it, advancing to the next one.
    /// Trivia after a token attaches to it as trailing; the next token only
    /// gets leading trivia when it is the first token of the input.
    pub fn next_token(&mut self) -> Token {
        self.trivia();
        let trailing_start = self.trivia_pieces.len();
        let (kind, kind_range) = self.scan();
        self.trivia();

        let (leading, trailing) = self.trivia_pieces.split_at(trailing_start);
        let leading = Trivia::new(leading);
        let trailing = Trivia::new(trailing);
        self.trivia_pieces.clear();

        std::mem::replace(&mut self.current, Token { leading, kind, kind_range, trailing })
    }

    fn trivia(&mut self) {
        loop {
            self.cursor.start_token();
            let kind = match self.cursor.peek() {
                '/' if self.cursor.second() == '/' => {
                    self.cursor.bump_while(|c| c != '\n');
                    TriviaPieceKind::SingleLineComment
                }
                '/' if self.cursor.second() == '*' => {
                    self.block_comment();
                    TriviaPieceKind::MultiLineComment
                }
                c if c.is_whitespace() => {
                    self.cursor.bump_while(char::is_whitespace);
                    TriviaPieceKind::Whitespace
                }
                _ => break,
            };
            self.trivia_pieces.push(TriviaPiece::new(kind, self.cursor.current_len()));
        }
    }

    fn block_comment(&mut self) {
        self.cursor.bump();
        self.cursor.bump();
        loop {
            match self.cursor.peek() {
                EOF_CHAR => break,
                '*' if self.cursor.second() == '/' => {
                    self.cursor.bump();
                    self.cursor.bump();
                    break;
                }
                _ => {
                    self.cursor.bump();
                }
            }
        }
    }

    fn scan(&mut self) -> (SyntaxKind, TextRange) {
        self.cursor.start_token();

        let kind = match self.cursor.bump() {
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ';' => SEMICOLON,
            ',' => COMMA,
            '"' => self.string(),
            '0'..='9' => {
                self.cursor.bump_while(|c| c.is_ascii_digit() || c == '_' || c == '.');
                NUMBER
            }
            'A'..='Z' | 'a'..='z' | '_' => {
                self.cursor.bump_while(|c| c.is_ascii_alphanumeric() || c == '_');

                match self.cursor.current_text() {
                    "class" => CLASS_KW,
                    "return" => RETURN_KW,
                    "if" => IF_KW,
                    "else" => ELSE_KW,
                    "while" => WHILE_KW,
                    "int" => INT_KW,
                    "void" => VOID_KW,
                    "bool" => BOOL_KW,
                    "string" => STRING_KW,
                    "true" => TRUE_KW,
                    "false" => FALSE_KW,
                    _ => IDENT,
                }
            }
            EOF_CHAR => EOF,
            c if is_operator(c) => {
                self.cursor.bump_while(is_operator);

                match self.cursor.current_text() {
                    "=" => EQ,
                    "." => DOT,
                    _ => OPERATOR,
                }
            }
            _ => UNKNOWN,
        };

        (kind, self.cursor.current_range())
    }

    fn string(&mut self) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                EOF_CHAR | '\n' => break,
                '\\' => {
                    self.cursor.bump();
                    self.cursor.bump();
                }
                '"' => {
                    self.cursor.bump();
                    break;
                }
                _ => {
                    self.cursor.bump();
                }
            }
        }
        STRING_LITERAL
    }
}

fn is_operator(c: char) -> bool {
    matches!(c, '=' | '-' | '+' | '*' | '/' | '%' | '<' | '>' | '!' | '&' | '|' | '^' | '.' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(SyntaxKind, &str)> {
        let mut tokenizer = Tokenizer::new(text);
        let mut out = Vec::new();
        loop {
            let token = tokenizer.next_token();
            if token.kind == EOF {
                break;
            }
            out.push((token.kind, &text[token.kind_range]));
        }
        out
    }

    #[test]
    fn local_declaration_tokens() {
        assert_eq!(
            kinds("int x = 1;"),
            vec![
                (INT_KW, "int"),
                (IDENT, "x"),
                (EQ, "="),
                (NUMBER, "1"),
                (SEMICOLON, ";"),
            ]
        );
    }

    #[test]
    fn class_declaration_tokens() {
        assert_eq!(
            kinds("class C { void M() {} }"),
            vec![
                (CLASS_KW, "class"),
                (IDENT, "C"),
                (LEFT_BRACE, "{"),
                (VOID_KW, "void"),
                (IDENT, "M"),
                (LEFT_PAREN, "("),
                (RIGHT_PAREN, ")"),
                (LEFT_BRACE, "{"),
                (RIGHT_BRACE, "}"),
                (RIGHT_BRACE, "}"),
            ]
        );
    }

    #[test]
    fn multi_char_operators_stay_single_tokens() {
        assert_eq!(
            kinds("a == b != c"),
            vec![
                (IDENT, "a"),
                (OPERATOR, "=="),
                (IDENT, "b"),
                (OPERATOR, "!="),
                (IDENT, "c"),
            ]
        );
    }

    #[test]
    fn string_literals_swallow_escapes() {
        assert_eq!(kinds(r#"s = "a\"b";"#), vec![
            (IDENT, "s"),
            (EQ, "="),
            (STRING_LITERAL, r#""a\"b""#),
            (SEMICOLON, ";"),
        ]);
    }

    #[test]
    fn comments_become_trivia() {
        let text = "int x; // trailing\n/* leading */ int y;";
        let mut tokenizer = Tokenizer::new(text);

        let int_kw = tokenizer.next_token();
        assert_eq!(int_kw.kind, INT_KW);

        let x = tokenizer.next_token();
        assert_eq!(x.kind, IDENT);

        let semicolon = tokenizer.next_token();
        assert_eq!(semicolon.kind, SEMICOLON);
        assert!(!semicolon.trailing.is_empty(), "comment should trail the semicolon");

        let second_int = tokenizer.next_token();
        assert_eq!(second_int.kind, INT_KW);
        assert_eq!(&text[second_int.kind_range], "int");
    }

    #[test]
    fn unknown_characters_are_single_bad_tokens() {
        assert_eq!(kinds("int @"), vec![(INT_KW, "int"), (UNKNOWN, "@")]);
    }
}
