#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use lookup_result::found;
use shared::{Configure, apply_all};

#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
pub struct FuzzData {
    value: i32,
    calls: Vec<Configure>,
}

fuzz_target!(|data: FuzzData| {
    let result = apply_all(found(data.value), data.calls.clone());
    assert!(
        result == found(data.value),
        "configuring a found result changed it, value: {:?}, calls: {:?}, result: {:?}",
        data.value,
        data.calls,
        result,
    );
});
