use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::client::Compound;
use crate::limits::reserve_hint;
use crate::value::Item;
use crate::wire::MajorType;
use crate::ErrorCode;

/// An in-progress compound item collecting its children.
///
/// Never exposed: [`Incomplete::finalize`] turns it into the corresponding [`Item`].
pub enum Incomplete<'a> {
    Bstr(Vec<u8>),
    Tstr(Vec<u8>),
    Array {
        declared: Option<u64>,
        items: Vec<Item<'a>>,
    },
    Map {
        declared: Option<u64>,
        entries: Vec<(Item<'a>, Item<'a>)>,
        pending_key: Option<Item<'a>>,
    },
    Tag {
        tag: u64,
        item: Option<Item<'a>>,
    },
}

impl<'a> Incomplete<'a> {
    pub fn new(compound: Compound) -> Self {
        match compound {
            Compound::Array { len } => Self::Array {
                declared: len,
                items: Vec::with_capacity(reserve_hint(len)),
            },
            Compound::Map { pairs } => Self::Map {
                declared: pairs,
                entries: Vec::with_capacity(reserve_hint(pairs)),
                pending_key: None,
            },
            Compound::Tag { tag } => Self::Tag { tag, item: None },
            Compound::IndefiniteBstr => Self::Bstr(Vec::new()),
            Compound::IndefiniteTstr => Self::Tstr(Vec::new()),
        }
    }

    /// Chunk-type error if this accumulator is an indefinite string, which only accepts
    /// definite strings of its own major type.
    pub const fn chunk_error(&self) -> Option<ErrorCode> {
        match self {
            Self::Bstr(_) => Some(ErrorCode::ExpectedBstrChunk),
            Self::Tstr(_) => Some(ErrorCode::ExpectedTstrChunk),
            _ => None,
        }
    }

    /// Append one finalized child.
    pub fn add(&mut self, item: Item<'a>) -> Result<(), ErrorCode> {
        match self {
            Self::Bstr(buf) => match item {
                Item::Bstr(chunk) => buf.extend_from_slice(&chunk),
                Item::ViewBstr(chunk) => buf.extend_from_slice(chunk),
                _ => return Err(ErrorCode::ExpectedBstrChunk),
            },
            Self::Tstr(buf) => match item {
                Item::Tstr(chunk) => buf.extend_from_slice(&chunk),
                Item::ViewTstr(chunk) => buf.extend_from_slice(chunk),
                _ => return Err(ErrorCode::ExpectedTstrChunk),
            },
            Self::Array { items, .. } => items.push(item),
            Self::Map {
                entries,
                pending_key,
                ..
            } => match pending_key.take() {
                Some(key) => entries.push((key, item)),
                None => *pending_key = Some(item),
            },
            Self::Tag { item: slot, .. } => *slot = Some(item),
        }
        Ok(())
    }

    /// Declared size when known, otherwise the number of children added so far.
    pub fn size(&self) -> usize {
        let (declared, current) = match self {
            Self::Bstr(buf) | Self::Tstr(buf) => (None, buf.len()),
            Self::Array { declared, items } => (*declared, items.len()),
            Self::Map {
                declared, entries, ..
            } => (*declared, entries.len()),
            Self::Tag { .. } => return 1,
        };
        declared.map_or(current, |n| usize::try_from(n).unwrap_or(usize::MAX))
    }

    /// Produce the immutable item.
    ///
    /// Fails for a map left holding a key without its value and for a tag that never received
    /// its item.
    pub fn finalize(self) -> Result<Item<'a>, ErrorCode> {
        match self {
            Self::Bstr(buf) => Ok(Item::Bstr(buf)),
            Self::Tstr(buf) => Ok(Item::Tstr(buf)),
            Self::Array { items, .. } => Ok(Item::Array(items)),
            Self::Map {
                entries,
                pending_key: None,
                ..
            } => Ok(Item::Map(entries)),
            Self::Map { .. } => Err(ErrorCode::NotEnoughEntries(MajorType::Map)),
            Self::Tag {
                tag,
                item: Some(item),
            } => Ok(Item::Tag(tag, Box::new(item))),
            Self::Tag { item: None, .. } => Err(ErrorCode::NotEnoughEntries(MajorType::Semantic)),
        }
    }
}
