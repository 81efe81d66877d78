//! Container for the problems collected during one resolution.

use std::{error::Error, fmt};

use super::LoadConfigError;

/// Every [`LoadConfigError`] found while resolving one configuration.
///
/// Missing required parameters are reported together so a user can fix the
/// environment or the file in one pass.
///
/// # Examples
///
/// ```
/// use load_config::{EnvSnapshot, LoadConfigError, LoadOptions, MemoryReader, resolve};
///
/// let options = LoadOptions::builder()
///     .required(["db_url", "api_key"])
///     .ignore_missing_file(true)
///     .build();
/// let err = resolve(&options, &EnvSnapshot::default(), &MemoryReader::new())
///     .expect_err("both keys are missing");
/// let LoadConfigError::Aggregate(problems) = err else {
///     panic!("expected several problems");
/// };
/// assert_eq!(problems.missing_keys().collect::<Vec<_>>(), ["api_key", "db_url"]);
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<LoadConfigError>);

impl AggregatedErrors {
    /// Wrap the problems found during one resolution.
    #[must_use]
    pub const fn new(errors: Vec<LoadConfigError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, LoadConfigError> {
        self.0.iter()
    }

    /// Canonical keys of every missing required parameter, in report order.
    pub fn missing_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().filter_map(|err| match err {
            LoadConfigError::MissingRequiredParameter { key, .. } => Some(key.as_str()),
            _ => None,
        })
    }

    /// Number of problems.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no problem was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut problems = self.0.iter();
        if let Some(first) = problems.next() {
            write!(f, "  - {first}")?;
        }
        for problem in problems {
            write!(f, "\n  - {problem}")?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a LoadConfigError;
    type IntoIter = std::slice::Iter<'a, LoadConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
