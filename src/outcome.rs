use serde_json::Value;

use crate::error::BridgeError;

/// Failure code the shell currently expects on every failed call.
pub const FAILURE_CODE: &str = "0";

/// The single result of one method call. Exactly one is produced per
/// request and it is never reused across requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The call completed. `Value::Null` for void methods, a scalar
    /// (currently only booleans) for predicates.
    Success(Value),
    /// An OS call failed. Propagated verbatim to the shell; no retry here.
    Failure { code: String, message: String },
    /// Method recognized but unfinished, or the platform offers no
    /// sanctioned mechanism. The shell treats this as "feature
    /// unavailable", not as an application error.
    NotImplemented,
}

impl Outcome {
    /// Void success.
    pub fn null() -> Self {
        Outcome::Success(Value::Null)
    }

    /// Predicate result. Denied/failed is `false`, never a `Failure`.
    pub fn bool(value: bool) -> Self {
        Outcome::Success(Value::Bool(value))
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure {
            code: FAILURE_CODE.to_string(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl From<BridgeError> for Outcome {
    fn from(err: BridgeError) -> Self {
        Outcome::failure(err.to_string())
    }
}
