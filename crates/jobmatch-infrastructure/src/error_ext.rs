//! Context helpers for foreign errors
//!
//! Wraps `std` and third-party errors into the domain [`Error`], prefixing
//! the message and keeping the wrapped error as `source()`.

use std::fmt::Display;

use jobmatch_domain::error::{BoxedSource, Error, Result};

/// Adds a context message to a foreign `Result`
///
/// ```ignore
/// use jobmatch_infrastructure::error_ext::ErrorContext;
///
/// let raw = std::fs::read_to_string(&path).config_context("reading jobmatch.toml")?;
/// ```
pub trait ErrorContext<T> {
    /// Wrap as [`Error::Infrastructure`]
    fn context<C: Display>(self, context: C) -> Result<T>;

    /// Wrap as [`Error::Configuration`]
    fn config_context<C: Display>(self, context: C) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            wrap(context, err, |message, source| Error::Infrastructure { message, source })
        })
    }

    fn config_context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            wrap(context, err, |message, source| Error::Configuration { message, source })
        })
    }
}

fn wrap<C, E, F>(context: C, err: E, variant: F) -> Error
where
    C: Display,
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce(String, Option<BoxedSource>) -> Error,
{
    variant(format!("{context}: {err}"), Some(Box::new(err)))
}

/// Turn a registry resolution message into a configuration error
pub fn registry_error(kind: &str, message: String) -> Error {
    Error::configuration(format!("{kind} provider: {message}"))
}
