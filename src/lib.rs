//! # cbor-tree
//!
//! An event-driven CBOR ([RFC 8949](https://www.rfc-editor.org/rfc/rfc8949)) parser that decodes a
//! contiguous byte slice into a strongly-typed [`Item`] tree, or streams structural events to a
//! caller-supplied [`ParseClient`].
//!
//! ## Entry points
//!
//! - [`parse`]: materialize the first item as an owned tree.
//! - [`parse_with_views`]: same, but byte and text strings borrow from the input.
//! - [`parse_with_client`] / [`parse_with_views_and_client`]: drive your own [`ParseClient`].
//! - [`parse_exact`]: owned parse that also rejects trailing bytes.
//!
//! Every entry point parses a single top-level item. The returned offset is the first byte after
//! it; trailing bytes are left for the caller to judge.
//!
//! ## Accepted data model
//!
//! - Unsigned and negative integers. Negative integers must fit in `i64`.
//! - Definite- and indefinite-length byte strings, text strings, arrays and maps.
//!   Indefinite-length strings are not accepted in view mode.
//! - Tags of any number, wrapping exactly one item. Tags are not interpreted.
//! - `false`, `true`, `null`, single- and double-precision floats.
//!   Half-precision floats and other simple values are rejected.
//!
//! Text strings are not UTF-8 validated while parsing; [`Item::as_str`] validates on demand.
//!
//! ## Resource bounds
//!
//! Nesting is limited to [`MAX_DEPTH`] levels, which also bounds recursion. Declared container
//! lengths pre-reserve at most [`MAX_RESERVE`] slots, so a hostile header cannot force a large
//! allocation; memory use stays proportional to the bytes actually consumed.
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`CborError`].
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation in [`Item::as_str`].
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible and requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

extern crate alloc;

mod client;
mod encode;
mod error;
mod incomplete;
mod limits;
mod parse;
mod stream;
mod tree;
pub(crate) mod utf8;
mod value;
mod wire;

pub use crate::client::{Compound, ItemSpan, Node, ParseClient};
pub use crate::encode::Encoder;
pub use crate::error::{CborError, ErrorCode, TruncatedField};
pub use crate::limits::{reserve_hint, MAX_DEPTH, MAX_RESERVE};
pub use crate::parse::{
    parse, parse_exact, parse_with_client, parse_with_views, parse_with_views_and_client,
};
pub use crate::value::Item;
pub use crate::wire::{
    decode_header, Header, MajorType, BREAK, EIGHT_BYTE_LENGTH, FOUR_BYTE_LENGTH,
    INDEFINITE_LENGTH, ONE_BYTE_LENGTH, SIMPLE_DOUBLE, SIMPLE_FALSE, SIMPLE_FLOAT, SIMPLE_NULL,
    SIMPLE_TRUE, TWO_BYTE_LENGTH,
};
