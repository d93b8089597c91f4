#![no_main]

use libfuzzer_sys::fuzz_target;

use cbor_tree::{parse, parse_with_views};

fuzz_target!(|data: &[u8]| {
    // Both modes must agree on where parsing stops unless views reject an indefinite string.
    let owned = parse(data);
    let views = parse_with_views(data);
    match (&owned, &views) {
        (Ok((_, a)), Ok((_, b))) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert!(a.offset <= data.len() && b.offset <= data.len()),
        _ => {}
    }
});
