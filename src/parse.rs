use core::ops::ControlFlow;

use crate::client::{Compound, ItemSpan, Node, ParseClient};
use crate::error::TruncatedField;
use crate::limits::MAX_DEPTH;
use crate::stream::CborStream;
use crate::tree::TreeBuilder;
use crate::value::Item;
use crate::wire::{
    read_header, Header, MajorType, BREAK, SIMPLE_DOUBLE, SIMPLE_FALSE, SIMPLE_FLOAT, SIMPLE_NULL,
    SIMPLE_TRUE,
};
use crate::{CborError, ErrorCode};

type Flow = Result<ControlFlow<()>, CborError>;

/// Recursive-descent decoder feeding a [`ParseClient`].
///
/// `'d` is the lifetime of the input; `'a` is the lifetime of the items handed to the client.
/// In view mode both are the same buffer and string leaves borrow from it; in owned mode string
/// leaves are copied and `'a` is unconstrained.
struct Parser<'d, 'a> {
    stream: CborStream<'d>,
    views: Option<&'a [u8]>,
}

impl<'d, 'a> Parser<'d, 'a> {
    const fn owned(data: &'d [u8]) -> Self {
        Self {
            stream: CborStream::new(data),
            views: None,
        }
    }
}

impl<'a> Parser<'a, 'a> {
    const fn with_views(data: &'a [u8]) -> Self {
        Self {
            stream: CborStream::new(data),
            views: Some(data),
        }
    }
}

impl<'d, 'a> Parser<'d, 'a> {
    /// Parse one top-level item. Returns the offset where parsing stopped: the end of the
    /// last consumed item, or the error offset.
    fn run<C: ParseClient<'a> + ?Sized>(&mut self, client: &mut C) -> usize {
        match self.parse_value(client, 0) {
            Ok(_) => self.stream.position(),
            Err(err) => {
                tracing::debug!(offset = err.offset, error = %err.code, "CBOR parse failed");
                client.error(&err);
                err.offset
            }
        }
    }

    fn parse_value<C: ParseClient<'a> + ?Sized>(&mut self, client: &mut C, depth: usize) -> Flow {
        let start = self.stream.position();
        if self.stream.is_at_end() {
            return Err(CborError::new(ErrorCode::EmptyInput, start));
        }
        // Bounds recursion on the call stack.
        if depth > MAX_DEPTH {
            return Err(CborError::new(ErrorCode::DepthLimitExceeded, start));
        }

        let header = read_header(&mut self.stream)?;
        let Some(arg) = header.arg else {
            return self.parse_indefinite(client, header.major, start, depth);
        };

        match header.major {
            MajorType::Array => {
                let compound = Compound::Array { len: Some(arg) };
                self.parse_compound(client, compound, Some(arg), start, depth)
            }
            MajorType::Map => {
                let compound = Compound::Map { pairs: Some(arg) };
                // Keys and values are delivered as one flat child sequence.
                self.parse_compound(client, compound, Some(arg.saturating_mul(2)), start, depth)
            }
            MajorType::Semantic => {
                self.parse_compound(client, Compound::Tag { tag: arg }, Some(1), start, depth)
            }
            _ => self.parse_leaf(client, header, arg, start),
        }
    }

    fn parse_indefinite<C: ParseClient<'a> + ?Sized>(
        &mut self,
        client: &mut C,
        major: MajorType,
        start: usize,
        depth: usize,
    ) -> Flow {
        // A view cannot span the disjoint chunks of an indefinite-length string.
        let compound = match major {
            MajorType::Array => Compound::Array { len: None },
            MajorType::Map => Compound::Map { pairs: None },
            MajorType::Bstr if self.views.is_none() => Compound::IndefiniteBstr,
            MajorType::Tstr if self.views.is_none() => Compound::IndefiniteTstr,
            _ => {
                return Err(CborError::new(
                    ErrorCode::UnsupportedIndefiniteLength,
                    start,
                ))
            }
        };
        self.parse_compound(client, compound, None, start, depth)
    }

    fn parse_compound<C: ParseClient<'a> + ?Sized>(
        &mut self,
        client: &mut C,
        compound: Compound,
        entries: Option<u64>,
        start: usize,
        depth: usize,
    ) -> Flow {
        let value = self.stream.position();
        let opening = ItemSpan {
            header: start,
            value,
            end: value,
        };
        if client.item(Node::Compound(compound), opening).is_break() {
            return Ok(ControlFlow::Break(()));
        }

        let not_enough = CborError::new(ErrorCode::NotEnoughEntries(compound.major_type()), start);
        match entries {
            Some(count) => {
                for _ in 0..count {
                    if self.stream.is_at_end() {
                        return Err(not_enough);
                    }
                    if self.parse_value(client, depth + 1)?.is_break() {
                        return Ok(ControlFlow::Break(()));
                    }
                }
            }
            None => loop {
                match self.stream.peek_u8() {
                    None => return Err(not_enough),
                    Some(BREAK) => {
                        self.stream.advance(1);
                        break;
                    }
                    Some(_) => {
                        if self.parse_value(client, depth + 1)?.is_break() {
                            return Ok(ControlFlow::Break(()));
                        }
                    }
                }
            },
        }

        let span = ItemSpan {
            header: start,
            value,
            end: self.stream.position(),
        };
        Ok(client.item_end(compound, span))
    }

    fn parse_leaf<C: ParseClient<'a> + ?Sized>(
        &mut self,
        client: &mut C,
        header: Header,
        arg: u64,
        start: usize,
    ) -> Flow {
        let value = self.stream.position();
        let item = match header.major {
            MajorType::Uint => Item::Uint(arg),
            MajorType::Nint => {
                let n = i64::try_from(arg)
                    .map_err(|_| CborError::new(ErrorCode::NintOutOfRange, start))?;
                Item::Nint(-1 - n)
            }
            MajorType::Bstr | MajorType::Tstr => self.read_string(header.major, arg, start)?,
            _ => Self::simple(header.ai, arg, start)?,
        };
        let span = ItemSpan {
            header: start,
            value,
            end: self.stream.position(),
        };
        Ok(client.item(Node::Leaf(item), span))
    }

    fn read_string(
        &mut self,
        major: MajorType,
        len: u64,
        start: usize,
    ) -> Result<Item<'a>, CborError> {
        let field = if major == MajorType::Bstr {
            TruncatedField::ByteString
        } else {
            TruncatedField::TextString
        };
        let value = self.stream.position();
        let Ok(n) = usize::try_from(len) else {
            let available = self.stream.remaining();
            return Err(CborError::new(
                ErrorCode::InsufficientLength {
                    field,
                    needed: len,
                    available,
                },
                start,
            ));
        };
        let bytes = self.stream.read_exact(n, field, start)?;

        Ok(match (self.views, major) {
            (Some(buf), MajorType::Bstr) => Item::ViewBstr(&buf[value..value + n]),
            (Some(buf), _) => Item::ViewTstr(&buf[value..value + n]),
            (None, MajorType::Bstr) => Item::Bstr(bytes.to_vec()),
            (None, _) => Item::Tstr(bytes.to_vec()),
        })
    }

    fn simple(ai: u8, arg: u64, start: usize) -> Result<Item<'a>, CborError> {
        let unsupported = CborError::new(ErrorCode::UnsupportedSimpleValue, start);
        match ai {
            SIMPLE_FALSE => Ok(Item::Bool(false)),
            SIMPLE_TRUE => Ok(Item::Bool(true)),
            SIMPLE_NULL => Ok(Item::Null),
            SIMPLE_FLOAT => {
                let bits = u32::try_from(arg).map_err(|_| unsupported)?;
                Ok(Item::Float(f32::from_bits(bits)))
            }
            SIMPLE_DOUBLE => Ok(Item::Double(f64::from_bits(arg))),
            _ => Err(unsupported),
        }
    }
}

/// Parse the first CBOR item in `data` into an owned tree.
///
/// Returns the item and the offset of the first byte after it. Bytes after the item are not
/// inspected; compare the offset with `data.len()` or use [`parse_exact`] to reject them.
///
/// # Errors
///
/// Returns the first error encountered, positioned at the header of the offending item.
pub fn parse(data: &[u8]) -> Result<(Item<'static>, usize), CborError> {
    let mut builder = TreeBuilder::new();
    Parser::owned(data).run(&mut builder);
    builder.finish()
}

/// Parse the first CBOR item in `data`, borrowing string contents from `data`.
///
/// Definite-length byte and text strings become [`Item::ViewBstr`] / [`Item::ViewTstr`].
/// Indefinite-length strings are rejected because their chunks are not contiguous.
///
/// # Errors
///
/// As [`parse`], plus `UnsupportedIndefiniteLength` for indefinite-length strings.
pub fn parse_with_views(data: &[u8]) -> Result<(Item<'_>, usize), CborError> {
    let mut builder = TreeBuilder::new();
    Parser::with_views(data).run(&mut builder);
    builder.finish()
}

/// Parse exactly one CBOR item spanning all of `data`.
///
/// # Errors
///
/// As [`parse`], plus `TrailingBytes` at the end of the item when bytes remain.
pub fn parse_exact(data: &[u8]) -> Result<Item<'static>, CborError> {
    let (item, end) = parse(data)?;
    if end != data.len() {
        return Err(CborError::new(ErrorCode::TrailingBytes, end));
    }
    Ok(item)
}

/// Drive `client` over the first CBOR item in `data`, with owned string leaves.
///
/// Returns the offset where parsing stopped: the end of the item, the point where the client
/// broke off, or the error offset reported to [`ParseClient::error`].
pub fn parse_with_client<'a, C: ParseClient<'a> + ?Sized>(data: &[u8], client: &mut C) -> usize {
    Parser::owned(data).run(client)
}

/// Drive `client` over the first CBOR item in `data`, with string leaves borrowed from `data`.
///
/// Returns the offset where parsing stopped, as [`parse_with_client`].
pub fn parse_with_views_and_client<'a, C: ParseClient<'a> + ?Sized>(
    data: &'a [u8],
    client: &mut C,
) -> usize {
    Parser::with_views(data).run(client)
}
