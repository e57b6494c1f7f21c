//! One report per way of consuming lookup results
//!
//! Each report looks up every key in order and resolves the results with a
//! single strategy.

use std::{error::Error, fmt};

use lookup_result::{LookupError, LookupResult, MatchHandlers};

use crate::store::Store;

/// An error that stops a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A lookup could not be resolved
    Lookup(LookupError),
    /// The sum of the values does not fit in an `i64`
    Overflow,
}

impl From<LookupError> for ReportError {
    fn from(error: LookupError) -> Self {
        Self::Lookup(error)
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup(error) => write!(f, "{error}"),
            Self::Overflow => write!(f, "the sum of the values overflows a 64-bit integer"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lookup(error) => Some(error),
            Self::Overflow => None,
        }
    }
}

/// A line of report output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A value that was found or substituted
    Value(i64),
    /// A key that was not found
    Undefined,
    /// A sum over several keys
    Total(i64),
    /// The outcome of a match, and whether the key was found
    Matched { text: String, found: bool },
}

/// Values of the found keys; missing keys are dropped
pub fn slip(store: &Store, keys: &[String]) -> Vec<Line> {
    keys.iter()
        .map(|key| store.lookup(key))
        .flat_map(LookupResult::into_iter)
        .map(Line::Value)
        .collect()
}

/// One line per key, `Undefined` for missing keys
pub fn or_undef(store: &Store, keys: &[String]) -> Vec<Line> {
    keys.iter()
        .map(|key| {
            store
                .lookup(key)
                .into_option()
                .map_or(Line::Undefined, Line::Value)
        })
        .collect()
}

/// Sum of the values, with missing keys replaced by the null object
///
/// # Errors
///
/// Fails on the first missing key if the store has no null object, and as
/// soon as the running total overflows.
pub fn sum(store: &Store, keys: &[String]) -> Result<i64, ReportError> {
    keys.iter().try_fold(0_i64, |total, key| {
        let value = store.lookup(key).into_or_null_object()?;
        total.checked_add(value).ok_or(ReportError::Overflow)
    })
}

/// Values of every key
///
/// # Errors
///
/// Fails on the first missing key with a
/// [`MissingKey`](crate::store::MissingKey) error.
pub fn ensure(store: &Store, keys: &[String]) -> Result<Vec<Line>, LookupError> {
    keys.iter()
        .map(|key| store.require(key).into_value().map(Line::Value))
        .collect()
}

/// A description of every lookup, whether it succeeded or not
pub fn describe(store: &Store, keys: &[String]) -> Vec<Line> {
    keys.iter()
        .map(|key| {
            store.lookup(key).match_with(MatchHandlers {
                found: |value| Line::Matched {
                    text: format!("Succeeded. Value: {value}"),
                    found: true,
                },
                not_found: |error| Line::Matched {
                    text: format!("Failed. Error: {error}"),
                    found: false,
                },
            })
        })
        .collect()
}
