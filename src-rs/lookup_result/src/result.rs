//! The lookup result type and its combinators

use std::{fmt, sync::Arc};

use crate::{LookupError, MatchHandlers};

/// The error message carried by a [`LookupResult::NotFound`] that was never
/// given a custom one
pub const DEFAULT_ERROR_MESSAGE: &str = "Not found";

/// An action that decides which error is reported when a missing value is
/// demanded
///
/// The action receives the failing result and returns the error that
/// [`LookupResult::value`], [`LookupResult::ensure`], and
/// [`LookupResult::into_value`] report in place of
/// [`LookupError::NotFound`].
pub type FailureAction<T> = Arc<dyn Fn(&LookupResult<T>) -> LookupError + Send + Sync>;

/// Iterator over the zero or one values of a borrowed [`LookupResult`]
pub type Slip<'a, T> = std::option::IntoIter<&'a T>;

/// The outcome of a lookup
///
/// A lookup either found a value or it didn't. Failure metadata (an error
/// message, a null object, and a failure action) only ever lives on the
/// `NotFound` variant. Configuring it on a `Found` result returns the result
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use lookup_result::{LookupError, LookupResult};
///
/// let found = LookupResult::found(42);
/// assert_eq!(found.value(), Ok(&42));
///
/// let missing: LookupResult<i32> = LookupResult::not_found().with_error("no such user");
/// assert_eq!(missing.value(), Err(LookupError::not_found("no such user")));
/// assert_eq!(missing.or_undef(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult<T> {
    /// The lookup produced a value
    Found(T),
    /// The lookup produced nothing
    NotFound(Absence<T>),
}

impl<T> LookupResult<T> {
    /// Creates a result for a lookup that found `value`
    ///
    /// Any value is accepted, including ones that look "empty" such as `0`,
    /// `""`, or `false`. The variant, not the value, decides success.
    #[must_use]
    pub const fn found(value: T) -> Self {
        Self::Found(value)
    }

    /// Creates a result for a lookup that found nothing
    ///
    /// The result carries [`DEFAULT_ERROR_MESSAGE`], no null object, and no
    /// failure action.
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound(Absence::default())
    }

    /// Converts an `Option` into a result, mapping `None` to a default
    /// `NotFound`
    #[must_use]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or_else(Self::not_found, Self::found)
    }

    /// Replaces the error message of a `NotFound` result
    #[must_use]
    pub fn with_error_message(self, message: impl Into<String>) -> Self {
        self.configure(|absence| absence.message = message.into())
    }

    /// Alias of [`LookupResult::with_error_message`]
    #[must_use]
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.with_error_message(message)
    }

    /// Replaces the error message of a `NotFound` result with
    /// `transform(current_message)`
    ///
    /// `transform` is not called on a `Found` result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lookup_result::not_found;
    ///
    /// let result = not_found::<()>()
    ///     .with_error("Key not found")
    ///     .transform_error(|error| error + ": 'foo'");
    ///
    /// assert_eq!(result.error_message(), Ok("Key not found: 'foo'"));
    /// ```
    #[must_use]
    pub fn transform_error(self, transform: impl FnOnce(String) -> String) -> Self {
        self.configure(|absence| {
            let message = std::mem::take(&mut absence.message);
            absence.message = transform(message);
        })
    }

    /// Sets the substitute value returned by
    /// [`LookupResult::or_null_object`] on a `NotFound` result
    #[must_use]
    pub fn with_null_object(self, null_object: T) -> Self {
        self.configure(|absence| absence.null_object = Some(null_object))
    }

    /// Sets the action that produces the error reported when the value of a
    /// `NotFound` result is demanded
    ///
    /// This lets a higher layer report its own error type without the
    /// producer knowing about it. Use [`LookupError::custom`] to wrap it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::fmt;
    ///
    /// use lookup_result::{LookupError, not_found};
    ///
    /// #[derive(Debug)]
    /// struct UserMissing;
    ///
    /// impl fmt::Display for UserMissing {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "user is missing")
    ///     }
    /// }
    ///
    /// impl std::error::Error for UserMissing {}
    ///
    /// let result = not_found::<u32>().with_custom_throw(|_| LookupError::custom(UserMissing));
    /// let error = result.ensure().unwrap_err();
    ///
    /// assert!(error.downcast_ref::<UserMissing>().is_some());
    /// ```
    #[must_use]
    pub fn with_custom_throw<F>(self, action: F) -> Self
    where
        F: Fn(&Self) -> LookupError + Send + Sync + 'static,
    {
        let action: FailureAction<T> = Arc::new(action);
        self.configure(|absence| absence.failure_action = Some(action))
    }

    /// Returns `true` if the lookup found a value
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Alias of [`LookupResult::succeeded`]
    #[must_use]
    pub const fn was_found(&self) -> bool {
        self.succeeded()
    }

    /// Returns `true` if the lookup found nothing
    #[must_use]
    pub const fn failed(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns the found value
    ///
    /// # Errors
    ///
    /// On a `NotFound` result, returns the error produced by the failure
    /// action if one is set, and [`LookupError::NotFound`] carrying the
    /// error message otherwise.
    pub fn value(&self) -> Result<&T, LookupError> {
        match self {
            Self::Found(value) => Ok(value),
            Self::NotFound(absence) => Err(self.failure(absence)),
        }
    }

    /// Returns the found value, treating its absence as an error
    ///
    /// This behaves exactly like [`LookupResult::value`]. The name marks call
    /// sites where a missing value is fatal.
    ///
    /// # Errors
    ///
    /// See [`LookupResult::value`].
    pub fn ensure(&self) -> Result<&T, LookupError> {
        self.value()
    }

    /// Consumes the result and returns the found value
    ///
    /// # Errors
    ///
    /// See [`LookupResult::value`].
    pub fn into_value(self) -> Result<T, LookupError> {
        match self {
            Self::Found(value) => Ok(value),
            Self::NotFound(ref absence) => Err(self.failure(absence)),
        }
    }

    /// Returns the found value, or `None` if the lookup found nothing
    #[must_use]
    pub const fn or_undef(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound(_) => None,
        }
    }

    /// Consumes the result and returns the found value, or `None`
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound(_) => None,
        }
    }

    /// Returns an iterator over the found value
    ///
    /// The iterator yields one item for a `Found` result and none for a
    /// `NotFound` result. Flat-mapping over it drops failed lookups.
    ///
    /// ```rust
    /// use lookup_result::{LookupResult, found, not_found};
    ///
    /// let results = [found(1), not_found(), found(3)];
    /// let values: Vec<_> = results.iter().flat_map(LookupResult::slip).collect();
    ///
    /// assert_eq!(values, [&1, &3]);
    /// ```
    pub fn slip(&self) -> Slip<'_, T> {
        self.or_undef().into_iter()
    }

    /// Returns the found value, or the configured null object
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NoNullObjectConfigured`] if the lookup found
    /// nothing and no null object was set with
    /// [`LookupResult::with_null_object`].
    pub fn or_null_object(&self) -> Result<&T, LookupError> {
        match self {
            Self::Found(value) => Ok(value),
            Self::NotFound(absence) => absence
                .null_object
                .as_ref()
                .ok_or_else(|| LookupError::no_null_object_configured(absence.message.clone())),
        }
    }

    /// Consumes the result and returns the found value, or the configured
    /// null object
    ///
    /// # Errors
    ///
    /// See [`LookupResult::or_null_object`].
    pub fn into_or_null_object(self) -> Result<T, LookupError> {
        match self {
            Self::Found(value) => Ok(value),
            Self::NotFound(Absence {
                message,
                null_object,
                failure_action: _,
            }) => null_object.ok_or_else(|| LookupError::no_null_object_configured(message)),
        }
    }

    /// Returns the error message of a `NotFound` result
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::WrongVariant`] if the lookup found a value.
    pub fn error_message(&self) -> Result<&str, LookupError> {
        match self {
            Self::Found(_) => Err(LookupError::wrong_variant()),
            Self::NotFound(absence) => Ok(absence.message()),
        }
    }

    /// Alias of [`LookupResult::error_message`]
    ///
    /// # Errors
    ///
    /// See [`LookupResult::error_message`].
    pub fn error(&self) -> Result<&str, LookupError> {
        self.error_message()
    }

    /// Calls the handler matching the outcome and returns its result
    ///
    /// Both handlers are required by [`MatchHandlers`], so every caller
    /// states what happens in both cases. The handlers borrow from the result,
    /// so they may return references into it.
    pub fn match_with<'a, R, F, N>(&'a self, handlers: MatchHandlers<F, N>) -> R
    where
        F: FnOnce(&'a T) -> R,
        N: FnOnce(&'a str) -> R,
    {
        let MatchHandlers { found, not_found } = handlers;

        match self {
            Self::Found(value) => found(value),
            Self::NotFound(absence) => not_found(absence.message()),
        }
    }

    fn failure(&self, absence: &Absence<T>) -> LookupError {
        absence.failure_action.as_ref().map_or_else(
            || LookupError::not_found(absence.message.clone()),
            |action| action(self),
        )
    }

    fn configure(self, configure: impl FnOnce(&mut Absence<T>)) -> Self {
        match self {
            found @ Self::Found(_) => found,
            Self::NotFound(mut absence) => {
                configure(&mut absence);
                Self::NotFound(absence)
            }
        }
    }
}

impl<T> From<Option<T>> for LookupResult<T> {
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<LookupResult<T>> for Option<T> {
    fn from(result: LookupResult<T>) -> Self {
        result.into_option()
    }
}

impl<T> IntoIterator for LookupResult<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LookupResult<T> {
    type Item = &'a T;
    type IntoIter = Slip<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slip()
    }
}

/// The failure metadata of a [`LookupResult::NotFound`]
#[derive(Clone)]
pub struct Absence<T> {
    message: String,
    null_object: Option<T>,
    failure_action: Option<FailureAction<T>>,
}

impl<T> Absence<T> {
    /// Returns the error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the null object, if one was set
    #[must_use]
    pub const fn null_object(&self) -> Option<&T> {
        self.null_object.as_ref()
    }

    /// Returns `true` if a failure action was set
    #[must_use]
    pub const fn has_failure_action(&self) -> bool {
        self.failure_action.is_some()
    }
}

impl<T> Default for Absence<T> {
    fn default() -> Self {
        Self {
            message: DEFAULT_ERROR_MESSAGE.to_string(),
            null_object: None,
            failure_action: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Absence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Absence")
            .field("message", &self.message)
            .field("null_object", &self.null_object)
            .field("has_failure_action", &self.has_failure_action())
            .finish()
    }
}

// failure actions have no meaningful equality, so two absences only compare
// equal when they share the same action
impl<T: PartialEq> PartialEq for Absence<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_action = match (&self.failure_action, &other.failure_action) {
            (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
            (None, None) => true,
            (Some(_), None) | (None, Some(_)) => false,
        };

        self.message == other.message && self.null_object == other.null_object && same_action
    }
}

impl<T: Eq> Eq for Absence<T> {}
