use std::{error::Error, fmt, sync::Arc};

/// An error reported by a terminal operation on a
/// [`LookupResult`](crate::LookupResult)
#[derive(Debug, Clone)]
pub enum LookupError {
    /// The value of a `NotFound` result was demanded.
    NotFound {
        /// The error message of the result
        message: String,
    },
    /// The error message of a `Found` result was requested.
    WrongVariant,
    /// A [`Matcher`](crate::Matcher) was applied without a handler for every
    /// outcome.
    IncompleteMatch {
        /// The handlers that were not registered
        missing: MissingHandler,
    },
    /// A `NotFound` result was asked for its null object, but none was set.
    NoNullObjectConfigured {
        /// The error message of the result
        message: String,
    },
    /// An error produced by a failure action set with
    /// [`LookupResult::with_custom_throw`](crate::LookupResult::with_custom_throw).
    Custom(Arc<dyn Error + Send + Sync>),
}

impl LookupError {
    /// Creates a new error indicating that a missing value was demanded.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates a new error indicating that a found result has no error message.
    #[must_use]
    pub const fn wrong_variant() -> Self {
        Self::WrongVariant
    }

    /// Creates a new error indicating that a match is missing handlers.
    #[must_use]
    pub const fn incomplete_match(missing: MissingHandler) -> Self {
        Self::IncompleteMatch { missing }
    }

    /// Creates a new error indicating that no null object was set.
    #[must_use]
    pub fn no_null_object_configured(message: impl Into<String>) -> Self {
        Self::NoNullObjectConfigured {
            message: message.into(),
        }
    }

    /// Wraps a caller-defined error.
    #[must_use]
    pub fn custom(error: impl Error + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(error))
    }

    /// Returns the lookup's error message, if this error carries one
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message } | Self::NoNullObjectConfigured { message } => {
                Some(message.as_str())
            }
            Self::WrongVariant | Self::IncompleteMatch { .. } | Self::Custom(_) => None,
        }
    }

    /// Returns `true` if a missing value was demanded without a failure action
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the wrapped custom error if it is of type `E`
    #[must_use]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Custom(error) => error.downcast_ref::<E>(),
            Self::NotFound { .. }
            | Self::WrongVariant
            | Self::IncompleteMatch { .. }
            | Self::NoNullObjectConfigured { .. } => None,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { message } => write!(f, "{message}"),
            Self::WrongVariant => write!(f, "the lookup found a value, so it has no error message"),
            Self::IncompleteMatch { missing } => {
                write!(f, "match is missing a handler for {missing}")
            }
            Self::NoNullObjectConfigured { message } => {
                write!(f, "{message} (no null object configured)")
            }
            Self::Custom(error) => write!(f, "{error}"),
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Custom(error) => error.source(),
            Self::NotFound { .. }
            | Self::WrongVariant
            | Self::IncompleteMatch { .. }
            | Self::NoNullObjectConfigured { .. } => None,
        }
    }
}

// custom errors are opaque, so they are only equal to themselves
impl PartialEq for LookupError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound { message: lhs }, Self::NotFound { message: rhs })
            | (
                Self::NoNullObjectConfigured { message: lhs },
                Self::NoNullObjectConfigured { message: rhs },
            ) => lhs == rhs,
            (Self::WrongVariant, Self::WrongVariant) => true,
            (Self::IncompleteMatch { missing: lhs }, Self::IncompleteMatch { missing: rhs }) => {
                lhs == rhs
            }
            (Self::Custom(lhs), Self::Custom(rhs)) => Arc::ptr_eq(lhs, rhs),
            (
                Self::NotFound { .. }
                | Self::WrongVariant
                | Self::IncompleteMatch { .. }
                | Self::NoNullObjectConfigured { .. }
                | Self::Custom(_),
                _,
            ) => false,
        }
    }
}

impl Eq for LookupError {}

/// The handlers missing from an incomplete [`Matcher`](crate::Matcher)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingHandler {
    /// No handler for a found value
    Found,
    /// No handler for a missing value
    NotFound,
    /// Neither handler was registered
    Both,
}

impl fmt::Display for MissingHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found => write!(f, "`found`"),
            Self::NotFound => write!(f, "`not_found`"),
            Self::Both => write!(f, "`found` and `not_found`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "outer")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn display_messages() {
        assert_eq!(LookupError::not_found("Not found").to_string(), "Not found");
        assert_eq!(
            LookupError::wrong_variant().to_string(),
            "the lookup found a value, so it has no error message"
        );
        assert_eq!(
            LookupError::incomplete_match(MissingHandler::NotFound).to_string(),
            "match is missing a handler for `not_found`"
        );
        assert_eq!(
            LookupError::incomplete_match(MissingHandler::Both).to_string(),
            "match is missing a handler for `found` and `not_found`"
        );
        assert_eq!(
            LookupError::no_null_object_configured("\"x\" not found").to_string(),
            "\"x\" not found (no null object configured)"
        );
    }

    #[test]
    fn message_is_carried_by_lookup_failures() {
        assert_eq!(LookupError::not_found("gone").message(), Some("gone"));
        assert_eq!(
            LookupError::no_null_object_configured("gone").message(),
            Some("gone")
        );
        assert_eq!(LookupError::wrong_variant().message(), None);
    }

    #[test]
    fn is_not_found_only_for_missing_values() {
        assert!(LookupError::not_found("gone").is_not_found());
        assert!(!LookupError::no_null_object_configured("gone").is_not_found());
        assert!(!LookupError::wrong_variant().is_not_found());
    }

    #[test]
    fn custom_errors_downcast_and_expose_source() {
        let error = LookupError::custom(Outer(std::io::Error::other("disk")));

        assert_eq!(error.to_string(), "outer");
        assert!(error.downcast_ref::<Outer>().is_some());
        assert!(error.downcast_ref::<std::io::Error>().is_none());

        let source = error.source().expect("custom error should have a source");
        assert_eq!(source.to_string(), "disk");
    }

    #[test]
    fn custom_errors_compare_by_identity() {
        let error = LookupError::custom(Outer(std::io::Error::other("disk")));
        let other = LookupError::custom(Outer(std::io::Error::other("disk")));

        assert_eq!(error.clone(), error);
        assert_ne!(error, other);
        assert_ne!(error, LookupError::wrong_variant());
    }
}
