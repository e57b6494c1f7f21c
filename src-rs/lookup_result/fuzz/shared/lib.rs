use libfuzzer_sys::arbitrary;
use lookup_result::{LookupError, LookupResult};

/// A configuration call applied to a lookup result
#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
pub enum Configure {
    ErrorMessage(String),
    Error(String),
    AppendToError(String),
    NullObject(i32),
    CustomThrow,
}

impl Configure {
    pub fn apply(self, result: LookupResult<i32>) -> LookupResult<i32> {
        match self {
            Self::ErrorMessage(message) => result.with_error_message(message),
            Self::Error(message) => result.with_error(message),
            Self::AppendToError(suffix) => result.transform_error(|error| error + &suffix),
            Self::NullObject(null_object) => result.with_null_object(null_object),
            Self::CustomThrow => result.with_custom_throw(|_| LookupError::wrong_variant()),
        }
    }
}

pub fn apply_all(result: LookupResult<i32>, calls: Vec<Configure>) -> LookupResult<i32> {
    calls.into_iter().fold(result, |result, call| call.apply(result))
}
