use serde::{Deserialize, Serialize};

/// Wire form of one distilled element, nested the way the tree browser
/// consumes it. Lines and columns are 0-based; the end position is
/// exclusive.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: u32,
    pub kind: String,
    pub type_name: String,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Source extent of a node. `text` is the token's decoded value for leaves
/// and the full source slice for rule nodes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub text: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Span {
    /// Line containment with the column tie-breaks applied at boundary
    /// lines.
    pub fn encloses(&self, other: &Selection) -> bool {
        if self.start_line > other.start_line || self.end_line < other.end_line {
            return false;
        }
        if self.start_line == other.start_line && self.start_column > other.start_column {
            return false;
        }
        if self.end_line == other.end_line && self.end_column < other.end_column {
            return false;
        }
        true
    }
}

/// An editor selection, in the same coordinate system as [`Span`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Selection {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Selection {
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self { start_line, start_column, end_line, end_column }
    }
}
