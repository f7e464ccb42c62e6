#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibprint_core::sequence::BoundedSequence;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 32 {
        return;
    }
    let limit = BigUint::from_bytes_le(data);

    let mut seq = BoundedSequence::new(limit.clone());
    let mut prev: Option<BigUint> = None;
    for term in seq.by_ref() {
        assert!(term <= limit);
        if let Some(p) = &prev {
            assert!(*p < term);
        }
        prev = Some(term);
    }
    assert!(seq.pending_term() > limit);
});
