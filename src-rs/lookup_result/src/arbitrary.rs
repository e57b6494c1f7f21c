use ::arbitrary::{Arbitrary, Result, Unstructured};

use crate::LookupResult;

// failure actions are closures, so they are never generated
impl<'a, T: Arbitrary<'a>> Arbitrary<'a> for LookupResult<T> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        if u.arbitrary::<bool>()? {
            return Ok(Self::found(u.arbitrary()?));
        }

        let mut result = Self::not_found();

        if let Some(message) = u.arbitrary::<Option<String>>()? {
            result = result.with_error_message(message);
        }

        if let Some(null_object) = u.arbitrary::<Option<T>>()? {
            result = result.with_null_object(null_object);
        }

        Ok(result)
    }
}
