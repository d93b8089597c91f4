use alloc::vec::Vec;

use crate::value::Item;
use crate::wire::{MajorType, SIMPLE_DOUBLE, SIMPLE_FALSE, SIMPLE_FLOAT, SIMPLE_NULL, SIMPLE_TRUE};

/// Streaming encoder writing definite-length, shortest-form CBOR into a `Vec<u8>`.
///
/// Container methods only write the header; the caller writes the declared number of entries
/// (two items per map pair) afterwards. Map keys are written in the order given.
#[derive(Debug, Default, Clone)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    /// Create an empty encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create an encoder with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no bytes have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume and return the encoded bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    fn major_arg(&mut self, major: MajorType, value: u64) {
        let m = (major as u8) << 5;
        if let Ok(v8) = u8::try_from(value) {
            if v8 < 24 {
                self.buf.push(m | v8);
            } else {
                self.buf.extend_from_slice(&[m | 24, v8]);
            }
        } else if let Ok(v16) = u16::try_from(value) {
            self.buf.push(m | 25);
            self.buf.extend_from_slice(&v16.to_be_bytes());
        } else if let Ok(v32) = u32::try_from(value) {
            self.buf.push(m | 26);
            self.buf.extend_from_slice(&v32.to_be_bytes());
        } else {
            self.buf.push(m | 27);
            self.buf.extend_from_slice(&value.to_be_bytes());
        }
    }

    fn major_len(&mut self, major: MajorType, len: usize) {
        self.major_arg(major, len as u64);
    }

    fn simple(&mut self, ai: u8) {
        self.buf.push(((MajorType::Simple as u8) << 5) | ai);
    }

    /// Encode an unsigned integer.
    pub fn uint(&mut self, v: u64) -> &mut Self {
        self.major_arg(MajorType::Uint, v);
        self
    }

    /// Encode a signed integer as major type 0 or 1.
    pub fn int(&mut self, v: i64) -> &mut Self {
        if v >= 0 {
            self.major_arg(MajorType::Uint, v.unsigned_abs());
        } else {
            self.major_arg(MajorType::Nint, v.unsigned_abs() - 1);
        }
        self
    }

    /// Encode `false` or `true`.
    pub fn bool(&mut self, v: bool) -> &mut Self {
        self.simple(if v { SIMPLE_TRUE } else { SIMPLE_FALSE });
        self
    }

    /// Encode `null`.
    pub fn null(&mut self) -> &mut Self {
        self.simple(SIMPLE_NULL);
        self
    }

    /// Encode a single-precision float (additional info 26).
    pub fn float(&mut self, v: f32) -> &mut Self {
        self.simple(SIMPLE_FLOAT);
        self.buf.extend_from_slice(&v.to_bits().to_be_bytes());
        self
    }

    /// Encode a double-precision float (additional info 27).
    pub fn double(&mut self, v: f64) -> &mut Self {
        self.simple(SIMPLE_DOUBLE);
        self.buf.extend_from_slice(&v.to_bits().to_be_bytes());
        self
    }

    /// Encode a byte string.
    pub fn bytes(&mut self, b: &[u8]) -> &mut Self {
        self.major_len(MajorType::Bstr, b.len());
        self.buf.extend_from_slice(b);
        self
    }

    /// Encode a text string.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.text_bytes(s.as_bytes())
    }

    /// Encode raw bytes as a text string without checking UTF-8.
    pub fn text_bytes(&mut self, b: &[u8]) -> &mut Self {
        self.major_len(MajorType::Tstr, b.len());
        self.buf.extend_from_slice(b);
        self
    }

    /// Write an array header for `len` entries.
    pub fn array(&mut self, len: usize) -> &mut Self {
        self.major_len(MajorType::Array, len);
        self
    }

    /// Write a map header for `pairs` key/value pairs.
    pub fn map(&mut self, pairs: usize) -> &mut Self {
        self.major_len(MajorType::Map, pairs);
        self
    }

    /// Write a tag header; the tagged item must follow.
    pub fn tag(&mut self, tag: u64) -> &mut Self {
        self.major_arg(MajorType::Semantic, tag);
        self
    }

    /// Encode a whole item tree.
    pub fn item(&mut self, item: &Item<'_>) -> &mut Self {
        match item {
            Item::Uint(v) => self.uint(*v),
            Item::Nint(v) => self.int(*v),
            Item::Bool(v) => self.bool(*v),
            Item::Null => self.null(),
            Item::Float(v) => self.float(*v),
            Item::Double(v) => self.double(*v),
            Item::Bstr(v) => self.bytes(v),
            Item::ViewBstr(v) => self.bytes(v),
            Item::Tstr(v) => self.text_bytes(v),
            Item::ViewTstr(v) => self.text_bytes(v),
            Item::Array(items) => {
                self.array(items.len());
                for child in items {
                    self.item(child);
                }
                self
            }
            Item::Map(entries) => {
                self.map(entries.len());
                for (k, v) in entries {
                    self.item(k).item(v);
                }
                self
            }
            Item::Tag(tag, inner) => self.tag(*tag).item(inner),
        }
    }
}

impl Item<'_> {
    /// Encode this item as definite-length, shortest-form CBOR.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut enc = Encoder::new();
        enc.item(self);
        enc.into_vec()
    }

    /// Append the encoding of this item to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let mut enc = Encoder {
            buf: core::mem::take(out),
        };
        enc.item(self);
        *out = enc.into_vec();
    }
}
