//! Constructors and aggregation helpers for `LoadConfigError`.

use camino::Utf8Path;

use super::{AggregatedErrors, LoadConfigError};

impl LoadConfigError {
    /// Tries to build a [`LoadConfigError`] from an iterator of errors.
    ///
    /// The iterator is consumed eagerly. It returns:
    /// * `None` when no errors are supplied;
    /// * the inner error when exactly one error is supplied; and
    /// * [`Self::Aggregate`] combining every error for two or more inputs.
    #[must_use]
    pub fn try_aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut errors: Vec<Self> = errors.into_iter().collect();
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors)))),
        }
    }

    /// Construct an [`LoadConfigError::InvalidArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use load_config::LoadConfigError;
    /// let e = LoadConfigError::invalid_argument("priority", "priority must be 'env' or 'file'");
    /// assert_eq!(e.to_string(), "priority must be 'env' or 'file'");
    /// ```
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    /// Construct a [`LoadConfigError::Syntax`] from a parser failure.
    pub(crate) fn syntax(
        path: &Utf8Path,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            path: path.to_path_buf(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Wrap a [`json5::Error`] raised while parsing `path`.
    ///
    /// Failures without a position, such as a value that does not fit the
    /// target type, are reported at the start of the file.
    pub(crate) fn from_json5(path: &Utf8Path, err: json5::Error) -> Self {
        match err {
            json5::Error::Message { msg, location } => {
                let (line, column) = location.map_or((1, 1), |at| (at.line, at.column));
                Self::syntax(path, line, column, msg)
            }
        }
    }

    /// Returns `true` when this error, or every error inside an aggregate,
    /// reports a missing required parameter.
    #[must_use]
    pub fn is_missing_parameter(&self) -> bool {
        match self {
            Self::MissingRequiredParameter { .. } => true,
            Self::Aggregate(errors) => errors.iter().all(Self::is_missing_parameter),
            _ => false,
        }
    }

    /// Print the error to standard error and terminate the process with
    /// status `1`.
    #[expect(
        clippy::print_stderr,
        reason = "terminating with a diagnostic is the purpose of this helper"
    )]
    pub fn exit(&self) -> ! {
        eprintln!("{self}");
        std::process::exit(1)
    }
}
