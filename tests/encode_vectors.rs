#![allow(clippy::unwrap_used)]

use cbor_tree::{parse, Encoder, Item};

fn hex(s: &str) -> Vec<u8> {
    s.split_whitespace()
        .map(|b| u8::from_str_radix(b, 16).unwrap())
        .collect()
}

fn enc(f: impl FnOnce(&mut Encoder)) -> Vec<u8> {
    let mut e = Encoder::new();
    f(&mut e);
    e.into_vec()
}

#[test]
fn uint_boundaries() {
    let vectors: &[(u64, &str)] = &[
        (0, "00"),
        (23, "17"),
        (24, "18 18"),
        (255, "18 FF"),
        (256, "19 01 00"),
        (65_535, "19 FF FF"),
        (65_536, "1A 00 01 00 00"),
        (u64::from(u32::MAX), "1A FF FF FF FF"),
        (u64::from(u32::MAX) + 1, "1B 00 00 00 01 00 00 00 00"),
        (u64::MAX, "1B FF FF FF FF FF FF FF FF"),
    ];
    for &(v, expected) in vectors {
        assert_eq!(enc(|e| {
            e.uint(v);
        }), hex(expected), "uint {v}");
    }
}

#[test]
fn int_boundaries() {
    let vectors: &[(i64, &str)] = &[
        (0, "00"),
        (1, "01"),
        (-1, "20"),
        (-24, "37"),
        (-25, "38 18"),
        (-256, "38 FF"),
        (-257, "39 01 00"),
        (i64::MAX, "1B 7F FF FF FF FF FF FF FF"),
        (i64::MIN, "3B 7F FF FF FF FF FF FF FF"),
    ];
    for &(v, expected) in vectors {
        assert_eq!(enc(|e| {
            e.int(v);
        }), hex(expected), "int {v}");
    }
}

#[test]
fn simple_and_floats() {
    assert_eq!(enc(|e| {
        e.bool(false).bool(true).null();
    }), hex("F4 F5 F6"));
    assert_eq!(enc(|e| {
        e.float(1.5);
    }), hex("FA 3F C0 00 00"));
    assert_eq!(enc(|e| {
        e.double(-4.1);
    }), hex("FB C0 10 66 66 66 66 66 66"));
}

#[test]
fn strings_and_headers() {
    assert_eq!(enc(|e| {
        e.bytes(&[]);
    }), hex("40"));
    assert_eq!(enc(|e| {
        e.text("IETF");
    }), hex("64 49 45 54 46"));
    assert_eq!(enc(|e| {
        e.text_bytes(&[0xff]);
    }), hex("61 FF"));
    assert_eq!(enc(|e| {
        e.bytes(&[0u8; 24]);
    })[..2], hex("58 18"));
    assert_eq!(enc(|e| {
        e.array(3).uint(1).uint(2).uint(3);
    }), hex("83 01 02 03"));
    assert_eq!(enc(|e| {
        e.map(1).text("a").int(-1);
    }), hex("A1 61 61 20"));
    assert_eq!(enc(|e| {
        e.tag(55_799).null();
    }), hex("D9 D9 F7 F6"));
}

#[test]
fn item_trees_encode_to_canonical_wire() {
    for s in [
        "83 01 02 03",
        "A2 61 61 01 61 62 02",
        "C2 41 00",
        "82 F5 FB 40 09 21 FB 54 44 2D 18",
        "A2 01 80 20 A0",
        "D8 20 81 3A 00 01 00 00",
    ] {
        let bytes = hex(s);
        let (item, _) = parse(&bytes).unwrap();
        assert_eq!(item.encode(), bytes, "input {s}");
    }
}

#[test]
fn non_shortest_input_reencodes_shortest() {
    let (item, _) = parse(&hex("1B 00 00 00 00 00 00 00 FF")).unwrap();
    assert_eq!(item.encode(), hex("18 FF"));

    let (item, _) = parse(&hex("9F 5F 41 01 41 02 FF FF")).unwrap();
    assert_eq!(item.encode(), hex("81 42 01 02"));
}

#[test]
fn view_items_encode_like_owned() {
    assert_eq!(Item::ViewBstr(&[1, 2]).encode(), Item::Bstr(vec![1, 2]).encode());
    assert_eq!(Item::ViewTstr(b"z").encode(), hex("61 7A"));
}

#[test]
fn encode_into_appends() {
    let mut out = vec![0xAA];
    Item::Uint(1).encode_into(&mut out);
    Item::Array(vec![Item::Null]).encode_into(&mut out);
    assert_eq!(out, hex("AA 01 81 F6"));
}

#[test]
fn encoder_accessors() {
    let mut e = Encoder::with_capacity(16);
    assert!(e.is_empty());
    e.item(&Item::Tag(1, Box::new(Item::Uint(0))));
    assert_eq!(e.len(), 2);
    assert_eq!(e.as_bytes(), &hex("C1 00")[..]);
}
