//! Handlers for exhaustive dispatch over a lookup result

use crate::{LookupError, LookupResult, MissingHandler};

/// One handler per outcome, passed to [`LookupResult::match_with`]
///
/// Both fields are required, so leaving out a branch is a compile error.
///
/// # Examples
///
/// ```rust
/// use lookup_result::{MatchHandlers, found};
///
/// let message = found(1).match_with(MatchHandlers {
///     found: |value| format!("Succeeded. Value: {value}"),
///     not_found: |error| format!("Failed. Error: {error}"),
/// });
///
/// assert_eq!(message, "Succeeded. Value: 1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatchHandlers<F, N> {
    /// Called with the value of a `Found` result
    pub found: F,
    /// Called with the error message of a `NotFound` result
    pub not_found: N,
}

type FoundHandler<'a, T, R> = Box<dyn FnOnce(&T) -> R + 'a>;
type NotFoundHandler<'a, R> = Box<dyn FnOnce(&str) -> R + 'a>;

/// A set of match handlers assembled at runtime
///
/// Unlike [`MatchHandlers`], a `Matcher` may be applied before both handlers
/// are registered. [`Matcher::apply`] then fails regardless of the outcome
/// of the result it is applied to.
pub struct Matcher<'a, T, R> {
    found: Option<FoundHandler<'a, T, R>>,
    not_found: Option<NotFoundHandler<'a, R>>,
}

impl<'a, T, R> Matcher<'a, T, R> {
    /// Creates a matcher with no handlers
    #[must_use]
    pub const fn new() -> Self {
        Self {
            found: None,
            not_found: None,
        }
    }

    /// Registers the handler for a found value, replacing any previous one
    #[must_use]
    pub fn on_found(mut self, handler: impl FnOnce(&T) -> R + 'a) -> Self {
        self.found = Some(Box::new(handler));
        self
    }

    /// Registers the handler for a missing value, replacing any previous one
    #[must_use]
    pub fn on_not_found(mut self, handler: impl FnOnce(&str) -> R + 'a) -> Self {
        self.not_found = Some(Box::new(handler));
        self
    }

    /// Calls the handler matching the outcome of `result`
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::IncompleteMatch`] if either handler is missing.
    /// This is checked before `result` is inspected.
    pub fn apply(self, result: &LookupResult<T>) -> Result<R, LookupError> {
        match (self.found, self.not_found) {
            (Some(found), Some(not_found)) => {
                Ok(result.match_with(MatchHandlers { found, not_found }))
            }
            (None, Some(_)) => Err(LookupError::incomplete_match(MissingHandler::Found)),
            (Some(_), None) => Err(LookupError::incomplete_match(MissingHandler::NotFound)),
            (None, None) => Err(LookupError::incomplete_match(MissingHandler::Both)),
        }
    }
}

impl<T, R> Default for Matcher<'_, T, R> {
    fn default() -> Self {
        Self::new()
    }
}
