use core::ops::ControlFlow;

use crate::value::Item;
use crate::wire::MajorType;
use crate::CborError;

/// Byte offsets of one item in the input.
///
/// For a leaf, `end` is the first byte after the value. For a compound item reported through
/// [`ParseClient::item`], the end is not yet known and `end == value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpan {
    /// Offset of the initial byte.
    pub header: usize,
    /// Offset of the first byte after the header and its argument.
    pub value: usize,
    /// Offset of the first byte after the item.
    pub end: usize,
}

/// The opening of a compound item, delivered before its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compound {
    /// Array with `len` entries, or indefinite length.
    Array {
        /// Declared entry count.
        len: Option<u64>,
    },
    /// Map with `pairs` key/value pairs, or indefinite length.
    Map {
        /// Declared pair count.
        pairs: Option<u64>,
    },
    /// Semantic tag wrapping one item.
    Tag {
        /// Tag number.
        tag: u64,
    },
    /// Indefinite-length byte string; children are its chunks.
    IndefiniteBstr,
    /// Indefinite-length text string; children are its chunks.
    IndefiniteTstr,
}

impl Compound {
    /// Major type of the compound.
    #[must_use]
    pub const fn major_type(self) -> MajorType {
        match self {
            Self::Array { .. } => MajorType::Array,
            Self::Map { .. } => MajorType::Map,
            Self::Tag { .. } => MajorType::Semantic,
            Self::IndefiniteBstr => MajorType::Bstr,
            Self::IndefiniteTstr => MajorType::Tstr,
        }
    }

    /// Declared size: entries for arrays, pairs for maps, 1 for tags. `None` when indefinite.
    #[must_use]
    pub const fn declared_len(self) -> Option<u64> {
        match self {
            Self::Array { len } => len,
            Self::Map { pairs } => pairs,
            Self::Tag { .. } => Some(1),
            Self::IndefiniteBstr | Self::IndefiniteTstr => None,
        }
    }
}

/// A parse event handed to [`ParseClient::item`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// A complete leaf item. The client takes ownership.
    Leaf(Item<'a>),
    /// The opening of a compound item. Its children follow, then a matching
    /// [`ParseClient::item_end`].
    Compound(Compound),
}

/// Receiver of structural parse events.
///
/// The parser calls [`item`](Self::item) for every item in pre-order, and
/// [`item_end`](Self::item_end) once per compound after its last child. Returning
/// [`ControlFlow::Break`] from either stops parsing without an error. A failed parse calls
/// [`error`](Self::error) exactly once and delivers no further events.
pub trait ParseClient<'a> {
    /// An item begins (compound) or is complete (leaf).
    fn item(&mut self, node: Node<'a>, span: ItemSpan) -> ControlFlow<()>;

    /// All children of `compound` have been delivered; `span.end` is the first byte after it.
    fn item_end(&mut self, compound: Compound, span: ItemSpan) -> ControlFlow<()>;

    /// Parsing failed.
    fn error(&mut self, error: &CborError);
}
