use core::fmt;

use crate::stream::CborStream;
use crate::{CborError, ErrorCode};

/// Additional info: value in the following byte.
pub const ONE_BYTE_LENGTH: u8 = 24;
/// Additional info: value in the following two big-endian bytes.
pub const TWO_BYTE_LENGTH: u8 = 25;
/// Additional info: value in the following four big-endian bytes.
pub const FOUR_BYTE_LENGTH: u8 = 26;
/// Additional info: value in the following eight big-endian bytes.
pub const EIGHT_BYTE_LENGTH: u8 = 27;
/// Additional info: indefinite length, terminated by [`BREAK`].
pub const INDEFINITE_LENGTH: u8 = 31;

/// Simple value `false`.
pub const SIMPLE_FALSE: u8 = 20;
/// Simple value `true`.
pub const SIMPLE_TRUE: u8 = 21;
/// Simple value `null`.
pub const SIMPLE_NULL: u8 = 22;
/// Single-precision float follows.
pub const SIMPLE_FLOAT: u8 = 26;
/// Double-precision float follows.
pub const SIMPLE_DOUBLE: u8 = 27;

/// Stop code terminating an indefinite-length item.
pub const BREAK: u8 = 0xff;

/// CBOR major type: the top three bits of the initial byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MajorType {
    /// Major type 0.
    Uint = 0,
    /// Major type 1.
    Nint = 1,
    /// Major type 2.
    Bstr = 2,
    /// Major type 3.
    Tstr = 3,
    /// Major type 4.
    Array = 4,
    /// Major type 5.
    Map = 5,
    /// Major type 6 (tag).
    Semantic = 6,
    /// Major type 7 (simple values and floats).
    Simple = 7,
}

impl MajorType {
    /// Major type encoded in `initial_byte`.
    #[must_use]
    pub const fn from_initial_byte(initial_byte: u8) -> Self {
        match initial_byte >> 5 {
            0 => Self::Uint,
            1 => Self::Nint,
            2 => Self::Bstr,
            3 => Self::Tstr,
            4 => Self::Array,
            5 => Self::Map,
            6 => Self::Semantic,
            _ => Self::Simple,
        }
    }

    /// Human-readable name, as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uint => "unsigned integer",
            Self::Nint => "negative integer",
            Self::Bstr => "byte string",
            Self::Tstr => "text string",
            Self::Array => "array",
            Self::Map => "map",
            Self::Semantic => "semantic",
            Self::Simple => "simple",
        }
    }
}

impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded initial byte plus its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Major type.
    pub major: MajorType,
    /// Raw additional-info bits (low five bits of the initial byte).
    pub ai: u8,
    /// Argument value; `None` for indefinite length.
    pub arg: Option<u64>,
}

/// Decode one header at the stream position.
///
/// Errors are reported at the offset of the initial byte. The caller guarantees at least one
/// byte remains.
pub fn read_header(stream: &mut CborStream<'_>) -> Result<Header, CborError> {
    let off = stream.position();
    let Some(ib) = stream.next_u8() else {
        return Err(CborError::new(ErrorCode::EmptyInput, off));
    };
    let major = MajorType::from_initial_byte(ib);
    let ai = ib & 0x1f;

    let arg = match ai {
        0..=23 => Some(u64::from(ai)),
        ONE_BYTE_LENGTH => Some(stream.read_be_arg::<1>(off)?),
        TWO_BYTE_LENGTH => Some(stream.read_be_arg::<2>(off)?),
        FOUR_BYTE_LENGTH => Some(stream.read_be_arg::<4>(off)?),
        EIGHT_BYTE_LENGTH => Some(stream.read_be_arg::<8>(off)?),
        INDEFINITE_LENGTH => None,
        _ => return Err(CborError::new(ErrorCode::ReservedAdditionalInfo, off)),
    };

    Ok(Header { major, ai, arg })
}

/// Decode the header at the start of `data`, returning it with the offset of the first byte
/// after the header.
///
/// # Errors
///
/// Returns `EmptyInput` for an empty slice, `ReservedAdditionalInfo` for additional info 28..=30,
/// and `InsufficientLength` when the length field is truncated.
pub fn decode_header(data: &[u8]) -> Result<(Header, usize), CborError> {
    let mut stream = CborStream::new(data);
    let header = read_header(&mut stream)?;
    Ok((header, stream.position()))
}
