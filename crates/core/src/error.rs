use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::time::Duration;

use banter_model::{ErrorKind as ModelErrorKind, ModelProviderError};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The model provider failed the request.
    Provider(ModelErrorKind),
    /// The model provider did not answer in time.
    Timeout,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Provider(kind) => write!(f, "{kind}"),
            ErrorKind::Timeout => write!(f, "timed out"),
        }
    }
}

/// A failed remote completion call.
///
/// The conversation cannot go on without the reply, so callers are
/// expected to stop when they see this error.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    reason: String,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub(crate) fn provider<E: ModelProviderError>(err: E) -> Self {
        Self {
            kind: ErrorKind::Provider(err.kind()),
            reason: "remote completion call failed".to_owned(),
            source: Some(Box::new(err)),
        }
    }

    pub(crate) fn timeout(after: Duration) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            reason: format!(
                "remote completion call timed out after {}s",
                after.as_secs_f32()
            ),
            source: None,
        }
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn StdError + 'static))
    }
}
