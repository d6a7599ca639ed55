//! Typed, validating access to environment variables.
//!
//! [`EnvParser`] wraps an [`EnvSource`] (the process environment by default, or
//! any map supplied by the caller) and hands back either a correctly typed
//! value or an [`EnvError`] carrying a precise message. Optional getters
//! return `Ok(None)` when a variable is unset; required getters turn that into
//! [`EnvError::Missing`].
//!
//! ```
//! use std::collections::HashMap;
//! use env_parser::{EnvParser, IntegerBounds};
//!
//! let env = HashMap::from([("PORT", "8080"), ("LOG_LEVEL", "info")]);
//! let parser = EnvParser::new(&env);
//!
//! let port = parser.get_integer("PORT", IntegerBounds::between(1, 65535)).unwrap();
//! let level = parser.get_one_of("LOG_LEVEL", &["debug", "info", "warn"]).unwrap();
//! assert_eq!(port, 8080);
//! assert_eq!(*level, "info");
//! ```

#![deny(missing_docs)]

pub mod errors;
pub mod integer;
pub mod parser;
pub mod pattern;
pub mod source;

pub use errors::EnvError;
pub use integer::{IntegerBounds, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use parser::EnvParser;
pub use pattern::Pattern;
pub use source::{EnvSource, EnvValue, ProcessEnv};
