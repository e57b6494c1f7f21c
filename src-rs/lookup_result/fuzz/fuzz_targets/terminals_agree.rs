#![no_main]

use libfuzzer_sys::fuzz_target;
use lookup_result::{LookupError, LookupResult};

fuzz_target!(|result: LookupResult<i32>| {
    assert_eq!(result.succeeded(), result.was_found());
    assert_eq!(result.succeeded(), !result.failed());

    match &result {
        LookupResult::Found(value) => {
            assert_eq!(result.value(), Ok(value));
            assert_eq!(result.ensure(), Ok(value));
            assert_eq!(result.or_undef(), Some(value));
            assert_eq!(result.slip().collect::<Vec<_>>(), [value]);
            assert_eq!(result.or_null_object(), Ok(value));
            assert_eq!(result.error_message(), Err(LookupError::WrongVariant));
        }
        LookupResult::NotFound(absence) => {
            let message = absence.message();
            assert_eq!(result.value(), Err(LookupError::not_found(message)));
            assert_eq!(result.ensure(), Err(LookupError::not_found(message)));
            assert_eq!(result.or_undef(), None);
            assert_eq!(result.slip().count(), 0);
            assert_eq!(result.error_message(), Ok(message));
            match absence.null_object() {
                Some(null_object) => assert_eq!(result.or_null_object(), Ok(null_object)),
                None => assert_eq!(
                    result.or_null_object(),
                    Err(LookupError::no_null_object_configured(message))
                ),
            }
        }
    }
});
