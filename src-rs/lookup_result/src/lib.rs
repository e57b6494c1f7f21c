#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! A result type for lookups that may legitimately find nothing

mod error;
mod handlers;
mod result;

#[cfg(feature = "arbitrary")]
mod arbitrary;

pub use error::{LookupError, MissingHandler};
pub use handlers::{MatchHandlers, Matcher};
pub use result::{Absence, DEFAULT_ERROR_MESSAGE, FailureAction, LookupResult, Slip};

/// Creates a result for a lookup that found `value`
///
/// This is shorthand for [`LookupResult::found`].
#[must_use]
pub const fn found<T>(value: T) -> LookupResult<T> {
    LookupResult::found(value)
}

/// Creates a result for a lookup that found nothing
///
/// The result carries [`DEFAULT_ERROR_MESSAGE`], no null object, and no
/// failure action. This is shorthand for [`LookupResult::not_found`].
#[must_use]
pub fn not_found<T>() -> LookupResult<T> {
    LookupResult::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(key: &str) -> LookupResult<i64> {
        match key {
            "existing" => found(1),
            "existing_2" => found(2),
            _ => not_found()
                .with_error_message(format!("\"{key}\" not found"))
                .with_null_object(0),
        }
    }

    #[test]
    fn slip_drops_failed_lookups() {
        let keys = ["existing", "nonexistant", "existing_2"];

        let values: Vec<i64> = keys
            .iter()
            .map(|key| lookup(key))
            .flat_map(LookupResult::into_iter)
            .collect();

        assert_eq!(values, [1, 2]);
    }

    #[test]
    fn borrowed_slip_drops_failed_lookups() {
        let results: Vec<_> = ["existing", "nonexistant", "existing_2"]
            .iter()
            .map(|key| lookup(key))
            .collect();

        let values: Vec<&i64> = results.iter().flat_map(LookupResult::slip).collect();

        assert_eq!(values, [&1, &2]);
    }

    #[test]
    fn or_undef_keeps_gaps() {
        let keys = ["existing", "nonexistant", "existing_2"];

        let values: Vec<Option<i64>> = keys.iter().map(|key| lookup(key).into()).collect();

        assert_eq!(values, [Some(1), None, Some(2)]);
    }

    #[test]
    fn or_null_object_sums_with_substitutes() {
        let keys = ["existing", "existing_2", "nonexistant", "nonexistant"];

        let total: Result<i64, LookupError> = keys
            .iter()
            .map(|key| lookup(key).into_or_null_object())
            .sum();

        assert_eq!(total, Ok(3));
    }

    #[test]
    fn demanding_a_missing_key_reports_the_key() {
        let error = lookup("nonexistant").ensure().expect_err("key should be missing");

        assert_eq!(error, LookupError::not_found("\"nonexistant\" not found"));
        assert_eq!(error.to_string(), "\"nonexistant\" not found");
    }

    #[test]
    fn match_describes_both_outcomes() {
        let describe = |result: &LookupResult<i64>| {
            result.match_with(MatchHandlers {
                found: |value| format!("Succeeded. Value: {value}"),
                not_found: |error| format!("Failed. Error: {error}"),
            })
        };

        assert_eq!(describe(&found(1)), "Succeeded. Value: 1");
        assert_eq!(
            describe(&not_found().with_error_message("\"nonexistant\" not found")),
            "Failed. Error: \"nonexistant\" not found"
        );
    }

    #[test]
    fn results_are_shareable_across_threads() {
        const fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<LookupResult<String>>();
        assert_send_sync::<LookupError>();
    }
}
