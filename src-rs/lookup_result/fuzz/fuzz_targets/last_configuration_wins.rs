#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use lookup_result::not_found;
use shared::{Configure, apply_all};

#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
pub struct FuzzData {
    calls: Vec<Configure>,
    message: String,
    null_object: i32,
}

fuzz_target!(|data: FuzzData| {
    let result = apply_all(not_found(), data.calls.clone())
        .with_error_message(data.message.clone())
        .with_null_object(data.null_object);

    assert!(
        result.error_message() == Ok(data.message.as_str()),
        "last error message ({:?}) did not win after calls {:?}",
        data.message,
        data.calls,
    );
    assert!(
        result.or_null_object() == Ok(&data.null_object),
        "last null object ({:?}) did not win after calls {:?}",
        data.null_object,
        data.calls,
    );
});
