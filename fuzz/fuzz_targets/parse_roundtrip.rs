#![no_main]

use libfuzzer_sys::fuzz_target;

use cbor_tree::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok((item, end)) = parse(data) {
        assert!(end <= data.len());
        // Re-encoding is shortest-form and definite-length, so it must parse back to itself.
        let out = item.encode();
        let (again, n) = parse(&out).expect("re-parse");
        assert_eq!(n, out.len());
        assert_eq!(again.encode(), out);
    }
});
