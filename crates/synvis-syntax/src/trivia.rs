use text_size::TextSize;

/// Trivia attached to one side of a token.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Trivia {
    pieces: Option<Box<[TriviaPiece]>>,
}

impl Trivia {
    pub fn new(pieces: &[TriviaPiece]) -> Self {
        if pieces.is_empty() { Self::empty() } else { Self { pieces: Some(pieces.into()) } }
    }

    pub const fn empty() -> Self {
        Self { pieces: None }
    }

    pub fn len(&self) -> TextSize {
        self.pieces().iter().map(|piece| piece.len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_none()
    }

    pub fn pieces(&self) -> &[TriviaPiece] {
        match &self.pieces {
            None => &[],
            Some(pieces) => pieces,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TriviaPiece {
    pub kind: TriviaPieceKind,
    pub len: TextSize,
}

impl TriviaPiece {
    pub fn new(kind: TriviaPieceKind, len: TextSize) -> Self {
        Self { kind, len }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriviaPieceKind {
    Whitespace,
    SingleLineComment,
    MultiLineComment,
}
