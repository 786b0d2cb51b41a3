/// Errors from running a command.
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ClientError;
use crate::plan::Violation;

/// Broad failure category, independent of the text a command printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not enough positional arguments.
    Usage,
    /// Rejected locally before any request was sent.
    Validation,
    /// The round trip failed or returned a non-success status.
    Transport,
    /// A body could not be encoded or decoded.
    Decode,
    /// Writing to the output stream failed.
    Output,
}

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The dispatcher supplied fewer positional arguments than the command needs.
    #[error("{command} expects at least {expected} argument(s), got {got}\nUsage: {usage}")]
    MissingArgs {
        /// Command name.
        command: &'static str,
        /// Usage line of the command.
        usage: &'static str,
        /// Minimum positional arguments.
        expected: usize,
        /// Positional arguments supplied.
        got: usize,
    },

    /// The plan broke one or more validation rules.
    #[error(
        "Invalid plan: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
    )]
    Validation(Vec<Violation>),

    /// The API could not be reached.
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// The API answered with a non-success status.
    #[error("Request failed with status {0}")]
    Status(StatusCode),

    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(serde_json::Error),

    /// Writing to the output stream failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgs { .. } => ErrorKind::Usage,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport(_) | Self::Status(_) => ErrorKind::Transport,
            Self::Encode(_) | Self::Decode(_) => ErrorKind::Decode,
            Self::Output(_) => ErrorKind::Output,
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Output => 1,
            ErrorKind::Usage => 2,
            ErrorKind::Validation => 3,
            ErrorKind::Transport => 4,
            ErrorKind::Decode => 5,
        }
    }
}
