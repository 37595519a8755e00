//! Error types shared by the fetcher, the prompts and the interactive session.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Mandatory input that failed validation. Ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("API key cannot be empty.")]
    EmptyApiKey,

    #[error("City name cannot be empty.")]
    EmptyCity,
}

/// Failure to obtain a payload from the weather provider.
///
/// Recoverable: the session reports it and renders a "no data" report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connection or timeout failure. The request URL is stripped so the
    /// API key never ends up in a message.
    #[error("request to weather provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather provider responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("weather provider returned a body that is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.without_url())
    }
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt was cancelled")]
    Cancelled,

    #[error("input stream closed before a value was entered")]
    InputClosed,

    #[error("failed to read from the terminal: {0}")]
    Io(#[from] io::Error),

    #[error("prompt failed: {0}")]
    Backend(String),
}

/// Anything that ends an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("failed to write to the terminal: {0}")]
    Output(#[from] io::Error),
}

impl SessionError {
    /// Process exit code for a session that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionError::Input(_) => 2,
            SessionError::Prompt(_) | SessionError::Output(_) => 1,
        }
    }
}
