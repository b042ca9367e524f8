use std::error::Error as StdError;
use thiserror::Error;

/// Any failure to reach the daemon or to read its answer.
///
/// The message is always a single line so it can be reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConnectionError {
    message: String,
}

impl ConnectionError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = message.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<Vec<_>>().join(" ");
        Self { message }
    }

    /// Prefix the message with what was being attempted.
    pub fn context(self, context: impl AsRef<str>) -> Self {
        Self::new(format!("{}: {}", context.as_ref(), self.message))
    }
}

impl From<bollard::errors::Error> for ConnectionError {
    fn from(err: bollard::errors::Error) -> Self {
        // bollard's top-level message hides the io error behind it
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        Self::new(message)
    }
}
