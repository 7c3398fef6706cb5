use thiserror::Error;

/// Core error type for the relata runtime
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A verb was invoked with the wrong number or arrangement of tokens
    #[error("Invalid use of '{verb}', expected: {usage}")]
    HookUsage {
        /// The reserved word that was invoked
        verb: String,
        /// The usage pattern the verb accepts
        usage: String,
    },

    /// A hook failed for a reason other than its arguments
    #[error("Hook '{verb}' failed: {message}")]
    HookFailed {
        /// The reserved word that was invoked
        verb: String,
        /// What went wrong
        message: String,
    },

    /// No hook is known under the requested name
    #[error("Unknown hook: {0}")]
    UnknownHook(String),

    /// Hook continuations for one statement exceeded the configured bound
    #[error("Continuation limit of {0} exceeded")]
    ContinuationLimit(usize),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::HookUsage`]
    pub fn usage(verb: impl Into<String>, usage: impl Into<String>) -> Self {
        CoreError::HookUsage {
            verb: verb.into(),
            usage: usage.into(),
        }
    }

    /// Shorthand for a [`CoreError::HookFailed`]
    pub fn hook_failed(verb: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::HookFailed {
            verb: verb.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        CoreError::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        CoreError::Other(err.to_string())
    }
}
