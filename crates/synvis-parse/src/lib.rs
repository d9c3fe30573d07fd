//! Event-driven parser for the C#-subset front-end.
//!
//! The parser is error-tolerant: malformed input produces `ERROR` nodes
//! inside an otherwise ordinary tree, never a failed parse. [`ParseFailure`]
//! is reserved for input no tree can be built for at all.

use synvis_syntax::SyntaxNode;
use text_size::TextRange;

mod grammar;
mod parser;
#[cfg(test)]
mod tests;

/// A successful parse: the tree plus whatever was wrong with the input.
#[derive(Debug)]
pub struct Parse {
    pub root: SyntaxNode,
    pub errors: Vec<ParseError>,
}

/// A recoverable syntax error, attached to the token it was detected at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub range: TextRange,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.range, self.message)
    }
}

/// The front-end could not produce any tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailure {
    /// Source is larger than the 4 GiB the span representation can address.
    SourceTooLarge,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceTooLarge => write!(f, "source text exceeds the addressable size"),
        }
    }
}

impl std::error::Error for ParseFailure {}

pub fn parse(text: &str) -> Result<Parse, ParseFailure> {
    if u32::try_from(text.len()).is_err() {
        return Err(ParseFailure::SourceTooLarge);
    }

    let mut parser = parser::Parser::new(text);
    grammar::items::compilation_unit(&mut parser);
    let (root, errors) = parser.finish();
    Ok(Parse { root, errors })
}
