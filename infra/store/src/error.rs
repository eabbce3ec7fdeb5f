//! # Store Errors
//!
//! [`StoreError`] is the only failure the store reports: a lookup whose query is not covered
//! by any stored configuration. Every other operation is total.

use crate::key::Configuration;
use std::borrow::Cow;

/// A specialized [`StoreError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No stored configuration is a subset of the query.
    #[error("Configuration not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl StoreError {
    pub(crate) fn not_found(query: &Configuration) -> Self {
        Self::NotFound {
            message: format!("{query} does not match a stored configuration").into(),
            context: None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Adds `.context(...)` to results carrying a [`StoreError`].
pub trait StoreErrorExt<T> {
    /// Attaches a caller-supplied context to the error.
    ///
    /// # Errors
    /// Returns the original error with its context replaced.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, StoreError>;
}

impl<T> StoreErrorExt<T> for Result<T, StoreError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                StoreError::NotFound { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration;

    #[test]
    fn not_found_names_the_query() {
        let err = StoreError::not_found(&configuration! { "lang" => "ca" });

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Configuration not found: {lang=ca} does not match a stored configuration"
        );
    }

    #[test]
    fn context_is_rendered_in_parentheses() {
        let result: Result<(), StoreError> = Err(StoreError::not_found(&Configuration::new()));
        let err = result.context("Resolving greeting").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration not found (Resolving greeting): {} does not match a stored configuration"
        );
    }
}
