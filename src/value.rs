use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::wire::MajorType;

/// A fully decoded CBOR data item.
///
/// `'a` is the lifetime of the input buffer for view-mode trees. Trees produced by
/// [`parse`](crate::parse) own all their storage and are `Item<'static>`.
///
/// Text strings are kept as raw bytes: the parser does not validate UTF-8. Use
/// [`Item::as_str`] to obtain validated text.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<'a> {
    /// Unsigned integer (major type 0).
    Uint(u64),
    /// Negative integer (major type 1); always `< 0`.
    Nint(i64),
    /// `false` or `true`.
    Bool(bool),
    /// `null`.
    Null,
    /// IEEE-754 binary32.
    Float(f32),
    /// IEEE-754 binary64.
    Double(f64),
    /// Owned byte string.
    Bstr(Vec<u8>),
    /// Owned text string bytes.
    Tstr(Vec<u8>),
    /// Byte string borrowed from the input buffer.
    ViewBstr(&'a [u8]),
    /// Text string bytes borrowed from the input buffer.
    ViewTstr(&'a [u8]),
    /// Array of items in wire order.
    Array(Vec<Item<'a>>),
    /// Map entries as `(key, value)` pairs in wire order. Duplicate keys are preserved.
    Map(Vec<(Item<'a>, Item<'a>)>),
    /// Semantic tag wrapping exactly one item.
    Tag(u64, Box<Item<'a>>),
}

impl<'a> Item<'a> {
    /// The major type this item is encoded with.
    #[must_use]
    pub const fn major_type(&self) -> MajorType {
        match self {
            Self::Uint(_) => MajorType::Uint,
            Self::Nint(_) => MajorType::Nint,
            Self::Bool(_) | Self::Null | Self::Float(_) | Self::Double(_) => MajorType::Simple,
            Self::Bstr(_) | Self::ViewBstr(_) => MajorType::Bstr,
            Self::Tstr(_) | Self::ViewTstr(_) => MajorType::Tstr,
            Self::Array(_) => MajorType::Array,
            Self::Map(_) => MajorType::Map,
            Self::Tag(..) => MajorType::Semantic,
        }
    }

    /// Returns `true` for items that contain other items.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Map(_) | Self::Tag(..))
    }

    /// Returns `true` for strings borrowed from the input buffer.
    #[must_use]
    pub const fn is_view(&self) -> bool {
        matches!(self, Self::ViewBstr(_) | Self::ViewTstr(_))
    }

    /// Unsigned integer value.
    #[must_use]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer value if it fits in `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Uint(v) => i64::try_from(*v).ok(),
            Self::Nint(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns `true` for `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Single-precision value.
    #[must_use]
    pub const fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Floating-point value; single precision is widened.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Byte string contents, owned or borrowed.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bstr(v) => Some(v),
            Self::ViewBstr(v) => Some(v),
            _ => None,
        }
    }

    /// Raw text string bytes, owned or borrowed.
    #[must_use]
    pub fn as_text_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Tstr(v) => Some(v),
            Self::ViewTstr(v) => Some(v),
            _ => None,
        }
    }

    /// Text string contents if they are valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_text_bytes().and_then(crate::utf8::validate)
    }

    /// Array elements.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Item<'a>]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Map entries.
    #[must_use]
    pub fn as_map(&self) -> Option<&[(Item<'a>, Item<'a>)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Tag number and tagged item.
    #[must_use]
    pub fn as_tag(&self) -> Option<(u64, &Item<'a>)> {
        match self {
            Self::Tag(tag, item) => Some((*tag, item)),
            _ => None,
        }
    }

    /// Copy every borrowed string so the tree no longer references the input buffer.
    ///
    /// View strings become their owned counterparts; everything else is moved.
    #[must_use]
    pub fn into_owned(self) -> Item<'static> {
        match self {
            Self::Uint(v) => Item::Uint(v),
            Self::Nint(v) => Item::Nint(v),
            Self::Bool(v) => Item::Bool(v),
            Self::Null => Item::Null,
            Self::Float(v) => Item::Float(v),
            Self::Double(v) => Item::Double(v),
            Self::Bstr(v) => Item::Bstr(v),
            Self::Tstr(v) => Item::Tstr(v),
            Self::ViewBstr(v) => Item::Bstr(v.to_vec()),
            Self::ViewTstr(v) => Item::Tstr(v.to_vec()),
            Self::Array(items) => Item::Array(items.into_iter().map(Item::into_owned).collect()),
            Self::Map(entries) => Item::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
            ),
            Self::Tag(tag, item) => Item::Tag(tag, Box::new(item.into_owned())),
        }
    }
}
