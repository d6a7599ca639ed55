//! Backing stores an [`EnvParser`](crate::EnvParser) reads from.
//!
//! [`EnvSource`] is the only seam between the parser and the outside world.
//! [`ProcessEnv`] goes to the real process environment; any `HashMap` or
//! `BTreeMap` keyed by strings works as a substitute, which is how tests and
//! embedders inject a fixed environment.
//!
//! Map values implement [`EnvValue`], so a map can hold plain strings or
//! `Option`s; an entry whose value is `None` counts as unset.

use std::{
    borrow::{Borrow, Cow},
    collections::{BTreeMap, HashMap},
    env,
    hash::{BuildHasher, Hash},
};

/// A string-keyed, string-valued lookup. `None` means the variable is unset.
///
/// Implementations must not cache: every call reflects the store's current contents.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when it is unset.
    ///
    /// An empty string is a value, not an absence.
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Zero-sized handle to the process environment; delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        // `var_os` is not defined for these names.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        let value = env::var_os(name)?;
        let value = match value.into_string() {
            Ok(s) => s,
            Err(raw) => raw.to_string_lossy().into_owned(),
        };
        Some(Cow::Owned(value))
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(name)
    }
}

impl<K, V, S> EnvSource for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: EnvValue,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)
            .and_then(EnvValue::as_env_str)
            .map(Cow::Borrowed)
    }
}

impl<K, V> EnvSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: EnvValue,
{
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)
            .and_then(EnvValue::as_env_str)
            .map(Cow::Borrowed)
    }
}

/// A value slot in a substitute environment map.
pub trait EnvValue {
    /// The stored string, or `None` if the slot represents an unset variable.
    fn as_env_str(&self) -> Option<&str>;
}

impl EnvValue for String {
    fn as_env_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl EnvValue for &str {
    fn as_env_str(&self) -> Option<&str> {
        Some(*self)
    }
}

impl EnvValue for Box<str> {
    fn as_env_str(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl EnvValue for Cow<'_, str> {
    fn as_env_str(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<V: EnvValue> EnvValue for Option<V> {
    fn as_env_str(&self) -> Option<&str> {
        self.as_ref().and_then(EnvValue::as_env_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_lookup() {
        let env = HashMap::from([("USER".to_string(), "testuser".to_string())]);
        assert_eq!(env.lookup("USER").as_deref(), Some("testuser"));
        assert_eq!(env.lookup("MISSING"), None);
    }

    #[test]
    fn empty_string_is_present() {
        let env = HashMap::from([("EMPTY", "")]);
        assert_eq!(env.lookup("EMPTY").as_deref(), Some(""));
    }

    #[test]
    fn none_value_counts_as_unset() {
        let env = BTreeMap::from([("SET", Some("1")), ("UNSET", None)]);
        assert_eq!(env.lookup("SET").as_deref(), Some("1"));
        assert_eq!(env.lookup("UNSET"), None);
    }

    #[test]
    fn lookup_through_reference() {
        fn read<E: EnvSource>(env: E, key: &str) -> Option<String> {
            env.lookup(key).map(Cow::into_owned)
        }

        let env = HashMap::from([("A", "1")]);
        assert_eq!(read(&env, "A").as_deref(), Some("1"));
        assert_eq!(read(&&env, "B"), None);
    }

    #[test]
    fn process_env_delegation() {
        let std_result = std::env::var("PATH").ok();
        let provider_result = ProcessEnv.lookup("PATH").map(Cow::into_owned);
        assert_eq!(std_result, provider_result);
    }

    #[test]
    fn process_env_rejects_invalid_names() {
        assert_eq!(ProcessEnv.lookup(""), None);
        assert_eq!(ProcessEnv.lookup("A=B"), None);
        assert_eq!(ProcessEnv.lookup("A\0B"), None);
    }
}
