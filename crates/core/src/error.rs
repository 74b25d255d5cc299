//! Context Slot Errors
//!
//! Failures reported when a consumer asks the slot for a context value.
//! Both variants carry type names so a decode failure points at the value
//! type that was waiting for its context.

/// Error produced when the calling thread's slot cannot satisfy a typed consume
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Nothing was pending on this thread when the consumer ran
    MissingContext { expected: &'static str },
    /// A value was pending but it has a different type than the consumer needs
    ContextTypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl ContextError {
    /// Type name of the context the consumer was waiting for
    pub fn expected(&self) -> &'static str {
        match self {
            ContextError::MissingContext { expected } => expected,
            ContextError::ContextTypeMismatch { expected, .. } => expected,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ContextError::MissingContext { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ContextError::ContextTypeMismatch { .. })
    }
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextError::MissingContext { expected } => {
                write!(f, "Context is empty: expected a value of type {}", expected)
            }
            ContextError::ContextTypeMismatch { expected, actual } => write!(
                f,
                "Context has different type: expected {}, found {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ContextError {}
