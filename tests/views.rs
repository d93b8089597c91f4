#![allow(clippy::unwrap_used)]

use cbor_tree::{parse, parse_with_views, ErrorCode, Item};

fn hex(s: &str) -> Vec<u8> {
    s.split_whitespace()
        .map(|b| u8::from_str_radix(b, 16).unwrap())
        .collect()
}

fn points_into(view: &[u8], buf: &[u8], at: usize) -> bool {
    let range = buf.as_ptr_range();
    range.contains(&view.as_ptr()) && view.as_ptr() == buf[at..].as_ptr()
}

#[test]
fn byte_string_borrows_input() {
    let data = hex("43 01 02 03");
    let (item, end) = parse_with_views(&data).unwrap();
    assert_eq!(end, 4);
    assert!(item.is_view());
    let Item::ViewBstr(view) = item else {
        panic!("expected a byte string view, got {item:?}");
    };
    assert_eq!(view, &[1, 2, 3]);
    assert!(points_into(view, &data, 1));
}

#[test]
fn map_of_text_views() {
    let data = hex("A1 61 6B 62 68 69");
    let (item, _) = parse_with_views(&data).unwrap();
    let entries = item.as_map().unwrap();
    assert_eq!(entries.len(), 1);
    let (key, value) = &entries[0];
    assert_eq!(key, &Item::ViewTstr(b"k"));
    assert_eq!(value.as_str(), Some("hi"));
    assert!(points_into(key.as_text_bytes().unwrap(), &data, 2));
    assert!(points_into(value.as_text_bytes().unwrap(), &data, 4));
}

#[test]
fn empty_string_view() {
    let data = hex("82 40 60");
    let (item, _) = parse_with_views(&data).unwrap();
    assert_eq!(
        item,
        Item::Array(vec![Item::ViewBstr(&[]), Item::ViewTstr(b"")])
    );
}

#[test]
fn indefinite_strings_rejected() {
    for (bytes, offset) in [
        (hex("5F 41 00 FF"), 0),
        (hex("7F FF"), 0),
        (hex("82 01 5F FF"), 2),
    ] {
        let err = parse_with_views(&bytes).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedIndefiniteLength);
        assert_eq!(err.offset, offset);
    }
}

#[test]
fn indefinite_containers_allowed() {
    let data = hex("9F 41 00 BF 61 61 F6 FF FF");
    let (item, end) = parse_with_views(&data).unwrap();
    assert_eq!(end, data.len());
    assert_eq!(
        item,
        Item::Array(vec![
            Item::ViewBstr(&[0]),
            Item::Map(vec![(Item::ViewTstr(b"a"), Item::Null)]),
        ])
    );
}

#[test]
fn views_differ_from_owned_until_converted() {
    let data = hex("C2 82 41 0A 61 7A");
    let (view, _) = parse_with_views(&data).unwrap();
    let (owned, _) = parse(&data).unwrap();
    assert_ne!(view, owned);
    assert_eq!(view.clone().into_owned(), owned);
    assert_eq!(view.encode(), owned.encode());
}

#[test]
fn owned_tree_outlives_input() {
    let owned = {
        let data = hex("81 43 61 62 63");
        let (view, _) = parse_with_views(&data).unwrap();
        view.into_owned()
    };
    assert_eq!(owned, Item::Array(vec![Item::Bstr(b"abc".to_vec())]));
    assert!(!owned.as_array().unwrap()[0].is_view());
}

#[test]
fn scalars_identical_in_both_modes() {
    let data = hex("85 00 20 F5 F6 FA 3F C0 00 00");
    assert_eq!(parse_with_views(&data).unwrap(), parse(&data).unwrap());
}

#[test]
fn errors_identical_in_both_modes() {
    for s in ["", "82 01", "3B FF FF FF FF FF FF FF FF", "43 01", "F9 00 00", "1C"] {
        let data = hex(s);
        assert_eq!(
            parse_with_views(&data).unwrap_err(),
            parse(&data).unwrap_err(),
            "input {s:?}"
        );
    }
}
