#![no_main]

use libfuzzer_sys::fuzz_target;

use fibprint_core::bound::Bound;
use fibprint_core::sequence::BoundedSequence;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap input length so generation stays fast
    if text.len() > 64 {
        return;
    }

    // Should not panic; a parsed bound must drive a finite sequence
    if let Ok(bound) = Bound::parse(text) {
        let count = BoundedSequence::from_bound(&bound).count();
        assert_eq!(count == 0, bound.is_too_low());
    }
});
