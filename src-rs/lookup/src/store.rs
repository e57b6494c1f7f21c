//! A key/value store whose lookups return `LookupResult`

use std::fmt;

use indexmap::IndexMap;
use lookup_result::{LookupError, LookupResult, found, not_found};

/// An in-memory store of integer values keyed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    entries: IndexMap<String, i64>,
    null_object: Option<i64>,
}

impl Store {
    /// Creates a store from its entries
    ///
    /// Lookups of missing keys carry `null_object` as their substitute value
    /// if one is given.
    pub fn new(entries: impl IntoIterator<Item = (String, i64)>, null_object: Option<i64>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            null_object,
        }
    }

    /// Creates the store used when no entries are given on the command line
    pub fn sample(null_object: Option<i64>) -> Self {
        Self::new(
            [("existing".to_string(), 1), ("existing_2".to_string(), 2)],
            null_object,
        )
    }

    /// Looks up `key`
    ///
    /// A missing key produces a `NotFound` naming the key, with the store's
    /// null object attached.
    pub fn lookup(&self, key: &str) -> LookupResult<i64> {
        self.entries
            .get(key)
            .map_or_else(|| self.missing(key), |value| found(*value))
    }

    /// Looks up `key`, reporting a missing key as a [`MissingKey`] error
    pub fn require(&self, key: &str) -> LookupResult<i64> {
        let key = key.to_string();
        self.lookup(&key).with_custom_throw(move |failed| {
            let message = failed.error_message().unwrap_or_default();
            LookupError::custom(MissingKey::new(key.clone(), message))
        })
    }

    fn missing(&self, key: &str) -> LookupResult<i64> {
        let missing = not_found().with_error_message(format!("\"{key}\" not found"));

        let Some(null_object) = self.null_object else {
            return missing;
        };

        missing.with_null_object(null_object)
    }
}

/// A required key was missing from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    key: String,
    message: String,
}

impl MissingKey {
    /// Creates a new error for the missing `key`
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for MissingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = &self.key;
        let message = &self.message;
        write!(f, "key `{key}` is missing: {message}")
    }
}

impl std::error::Error for MissingKey {}

/// Parses a `KEY=VALUE` store entry
pub fn parse_entry(entry: &str) -> Result<(String, i64), String> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected `KEY=VALUE`, found `{entry}`"))?;

    if key.is_empty() {
        return Err(format!("entry `{entry}` has an empty key"));
    }

    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|error| format!("invalid value for key `{key}`: {error}"))?;

    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_existing_key() {
        let store = Store::sample(Some(0));

        assert_eq!(store.lookup("existing"), found(1));
        assert_eq!(store.lookup("existing_2"), found(2));
    }

    #[test]
    fn lookup_missing_key_names_key() {
        let store = Store::sample(Some(0));
        let result = store.lookup("nonexistant");

        assert!(result.failed());
        assert_eq!(result.error_message(), Ok("\"nonexistant\" not found"));
        assert_eq!(result.or_null_object(), Ok(&0));
    }

    #[test]
    fn lookup_missing_key_without_null_object() {
        let store = Store::sample(None);
        let result = store.lookup("nonexistant");

        assert_eq!(
            result.or_null_object(),
            Err(LookupError::no_null_object_configured(
                "\"nonexistant\" not found"
            ))
        );
    }

    #[test]
    fn require_reports_missing_key() {
        let store = Store::sample(Some(0));
        let error = store
            .require("nonexistant")
            .into_value()
            .expect_err("key should be missing");

        assert_eq!(
            error.downcast_ref::<MissingKey>(),
            Some(&MissingKey::new("nonexistant", "\"nonexistant\" not found"))
        );
        assert_eq!(
            error.to_string(),
            "key `nonexistant` is missing: \"nonexistant\" not found"
        );
    }

    #[test]
    fn require_existing_key() {
        let store = Store::sample(Some(0));

        assert_eq!(store.require("existing").into_value(), Ok(1));
    }

    #[test]
    fn entries_keep_insertion_order() {
        let store = Store::new(
            [("b".to_string(), 2), ("a".to_string(), 1), ("b".to_string(), 3)],
            None,
        );

        assert_eq!(store.entries.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(store.lookup("b"), found(3));
    }

    #[test]
    fn parse_valid_entry() {
        assert_eq!(parse_entry("answer=42"), Ok(("answer".to_string(), 42)));
        assert_eq!(parse_entry("neg=-3"), Ok(("neg".to_string(), -3)));
    }

    #[test]
    fn parse_entry_without_separator() {
        assert_eq!(
            parse_entry("answer"),
            Err("expected `KEY=VALUE`, found `answer`".to_string())
        );
    }

    #[test]
    fn parse_entry_with_empty_key() {
        assert_eq!(
            parse_entry("=1"),
            Err("entry `=1` has an empty key".to_string())
        );
    }

    #[test]
    fn parse_entry_with_invalid_value() {
        let error = parse_entry("answer=forty").expect_err("value should be invalid");

        assert!(error.starts_with("invalid value for key `answer`"));
    }
}
