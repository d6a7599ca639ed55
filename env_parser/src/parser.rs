//! The typed reader over an [`EnvSource`].
//!
//! Each getter comes in two forms. The optional form returns `Ok(None)` when
//! the variable is unset and validates the value otherwise; the required form
//! delegates to it and turns `None` into [`EnvError::Missing`]. Absence always
//! short-circuits validation, so a missing variable never reports a pattern,
//! integer, or membership error.

use tracing::{debug, trace};

use crate::{
    errors::EnvError,
    integer::{BoundViolation, IntegerBounds, parse_safe_integer},
    pattern::Pattern,
    source::{EnvSource, ProcessEnv},
};

/// Validating accessor over an environment mapping.
///
/// The source is consulted on every call; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct EnvParser<E = ProcessEnv> {
    env: E,
}

impl EnvParser<ProcessEnv> {
    /// Reader over the current process environment.
    pub fn from_process_env() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> EnvParser<E> {
    /// Reader over an injected source, e.g. `&HashMap<String, String>`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// The wrapped source.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Read `name` as a string, or `Ok(None)` if it is unset.
    ///
    /// When `pattern` is given, the whole value must match it.
    /// The value is returned verbatim: no trimming, no case folding.
    pub fn get_optional_string(
        &self,
        name: &str,
        pattern: Option<&Pattern>,
    ) -> Result<Option<String>, EnvError> {
        let Some(value) = self.lookup(name) else {
            return Ok(None);
        };

        if let Some(pattern) = pattern.filter(|p| !p.is_match(&value)) {
            return Err(fail(EnvError::PatternMismatch {
                name: name.to_string(),
                pattern: pattern.to_string(),
            }));
        }

        Ok(Some(value))
    }

    /// Like [`get_optional_string`](Self::get_optional_string) but fails with
    /// [`EnvError::Missing`] when the variable is unset.
    pub fn get_string(&self, name: &str, pattern: Option<&Pattern>) -> Result<String, EnvError> {
        required(name, self.get_optional_string(name, pattern)?)
    }

    /// Read `name` as a strict safe integer, or `Ok(None)` if it is unset.
    ///
    /// See [`crate::integer`] for the accepted grammar. Bounds are inclusive and
    /// the minimum is checked before the maximum.
    pub fn get_optional_integer(
        &self,
        name: &str,
        bounds: IntegerBounds,
    ) -> Result<Option<i64>, EnvError> {
        let Some(value) = self.lookup(name) else {
            return Ok(None);
        };

        let int_value = parse_safe_integer(&value).ok_or_else(|| {
            fail(EnvError::NotAnInteger {
                name: name.to_string(),
            })
        })?;

        bounds.check(int_value).map_err(|violation| {
            let name = name.to_string();
            fail(match violation {
                BoundViolation::BelowMinimum(min) => EnvError::BelowMinimum { name, min },
                BoundViolation::AboveMaximum(max) => EnvError::AboveMaximum { name, max },
            })
        })?;

        Ok(Some(int_value))
    }

    /// Like [`get_optional_integer`](Self::get_optional_integer) but fails with
    /// [`EnvError::Missing`] when the variable is unset.
    pub fn get_integer(&self, name: &str, bounds: IntegerBounds) -> Result<i64, EnvError> {
        required(name, self.get_optional_integer(name, bounds)?)
    }

    /// Read `name` and check it against `allowed`, or `Ok(None)` if it is unset.
    ///
    /// Membership is exact string equality. On success the matching element of
    /// `allowed` is returned, so callers can pass a slice of their own
    /// `AsRef<str>` type and get that type back.
    pub fn get_optional_one_of<'a, T: AsRef<str>>(
        &self,
        name: &str,
        allowed: &'a [T],
    ) -> Result<Option<&'a T>, EnvError> {
        let Some(value) = self.lookup(name) else {
            return Ok(None);
        };

        allowed
            .iter()
            .find(|candidate| candidate.as_ref() == value.as_str())
            .map(Some)
            .ok_or_else(|| fail(EnvError::not_allowed(name, allowed)))
    }

    /// Like [`get_optional_one_of`](Self::get_optional_one_of) but fails with
    /// [`EnvError::Missing`] when the variable is unset.
    pub fn get_one_of<'a, T: AsRef<str>>(
        &self,
        name: &str,
        allowed: &'a [T],
    ) -> Result<&'a T, EnvError> {
        required(name, self.get_optional_one_of(name, allowed)?)
    }

    fn lookup(&self, name: &str) -> Option<String> {
        let value = self.env.lookup(name).map(|v| v.into_owned());
        trace!(name, present = value.is_some(), "environment lookup");
        value
    }
}

fn required<T>(name: &str, value: Option<T>) -> Result<T, EnvError> {
    value.ok_or_else(|| {
        fail(EnvError::Missing {
            name: name.to_string(),
        })
    })
}

fn fail(err: EnvError) -> EnvError {
    debug!(name = err.name(), error = %err, "environment variable rejected");
    err
}
