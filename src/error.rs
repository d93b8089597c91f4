use core::fmt;

use crate::limits::MAX_DEPTH;
use crate::wire::MajorType;

/// The field a truncation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncatedField {
    /// The 1/2/4/8 big-endian bytes following the initial byte.
    Length,
    /// The payload of a definite-length byte string.
    ByteString,
    /// The payload of a definite-length text string.
    TextString,
}

impl TruncatedField {
    const fn label(self) -> &'static str {
        match self {
            Self::Length => "length field",
            Self::ByteString => "byte string",
            Self::TextString => "text string",
        }
    }
}

/// A structured error code identifying why a CBOR item was rejected.
///
/// The `Display` impl renders the stable human-readable message for each code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The input slice was empty.
    EmptyInput,
    /// More than [`MAX_DEPTH`] nested levels.
    DepthLimitExceeded,
    /// Additional-info value 28..=30 was used.
    ReservedAdditionalInfo,
    /// A negative integer whose wire magnitude exceeds `i64::MAX`.
    NintOutOfRange,
    /// Fewer bytes remain than a length field or string payload requires.
    InsufficientLength {
        /// Which field was truncated.
        field: TruncatedField,
        /// Bytes required.
        needed: u64,
        /// Bytes available.
        available: usize,
    },
    /// Input ended before a compound item received all its entries or its break byte.
    NotEnoughEntries(MajorType),
    /// Indefinite length on a major type that does not support it in the current mode.
    UnsupportedIndefiniteLength,
    /// Half-precision float or an unassigned simple value.
    UnsupportedSimpleValue,
    /// A chunk of an indefinite-length byte string was not a definite byte string.
    ExpectedBstrChunk,
    /// A chunk of an indefinite-length text string was not a definite text string.
    ExpectedTstrChunk,
    /// Bytes remain after the single top-level item (strict parsing only).
    TrailingBytes,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyInput => f.write_str(
                "Input buffer is empty. Begin and end cannot point to the same location.",
            ),
            Self::DepthLimitExceeded => write!(
                f,
                "Max depth reached.  Cannot parse CBOR structures with more than {MAX_DEPTH} levels."
            ),
            Self::ReservedAdditionalInfo => f.write_str("Reserved additional information value."),
            Self::NintOutOfRange => {
                f.write_str("NINT values that don't fit in int64_t are not supported.")
            }
            Self::InsufficientLength {
                field,
                needed,
                available,
            } => write!(
                f,
                "Need {needed} byte(s) for {}, have {available}.",
                field.label()
            ),
            Self::NotEnoughEntries(major) => write!(f, "Not enough entries for {}.", major.name()),
            Self::UnsupportedIndefiniteLength => f.write_str("Unsupported indefinite length item."),
            Self::UnsupportedSimpleValue => {
                f.write_str("Unsupported half-floating-point or simple value.")
            }
            Self::ExpectedBstrChunk => f.write_str("Expected BSTR in indefinite-length string."),
            Self::ExpectedTstrChunk => f.write_str("Expected TSTR in indefinite-length string."),
            Self::TrailingBytes => f.write_str("Trailing bytes after CBOR item."),
        }
    }
}

/// A parse error with a stable code and the byte offset where it was detected.
///
/// For item-level failures the offset is the header of the offending item, so callers can
/// localize the problem in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CborError {
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset into the input.
    pub offset: usize,
}

impl CborError {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }
}

impl fmt::Display for CborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cbor parse failed at {}: {}", self.offset, self.code)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CborError {}
