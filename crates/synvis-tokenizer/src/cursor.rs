use text_size::{TextRange, TextSize};

pub(crate) const EOF_CHAR: char = '\0';

/// Byte-indexed scanner over the source text. `start` marks the beginning of
/// the token (or trivia piece) currently being consumed.
pub(crate) struct Cursor<'t> {
    text: &'t str,
    pos: usize,
    start: usize,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self { text, pos: 0, start: 0 }
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub(crate) fn peek(&self) -> char {
        self.text[self.pos..].chars().next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn second(&self) -> char {
        let mut chars = self.text[self.pos..].chars();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn bump(&mut self) -> char {
        match self.text[self.pos..].chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                c
            }
            None => EOF_CHAR,
        }
    }

    pub(crate) fn bump_while(&mut self, predicate: impl Fn(char) -> bool + Copy) {
        while !self.is_eof() && predicate(self.peek()) {
            self.bump();
        }
    }

    /// Source consumed since the last `start_token`.
    pub(crate) fn current_text(&self) -> &'t str {
        &self.text[self.start..self.pos]
    }

    pub(crate) fn current_range(&self) -> TextRange {
        TextRange::new(TextSize::new(self.start as u32), TextSize::new(self.pos as u32))
    }

    pub(crate) fn current_len(&self) -> TextSize {
        TextSize::new((self.pos - self.start) as u32)
    }

    pub(crate) fn start_token(&mut self) {
        self.start = self.pos;
    }
}
