//! Service Errors

use thiserror::Error;

/// Failure of a call to the to-do service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The IPC call itself was rejected
    #[error("{command} failed: {message}")]
    Invoke { command: &'static str, message: String },

    #[error("could not encode arguments for {command}: {message}")]
    Encode { command: &'static str, message: String },

    #[error("unexpected response from {command}: {message}")]
    Decode { command: &'static str, message: String },

    /// The service answered but reported no success
    #[error("{command} was not accepted by the service")]
    Rejected { command: &'static str },
}

impl ServiceError {
    pub fn command(&self) -> &'static str {
        match self {
            ServiceError::Invoke { command, .. }
            | ServiceError::Encode { command, .. }
            | ServiceError::Decode { command, .. }
            | ServiceError::Rejected { command } => command,
        }
    }
}
