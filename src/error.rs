//! Errors raised by the syntax provider and session plumbing
//!
//! Type-resolution trouble never shows up here: unresolvable generics,
//! missing bounds and unmatched parameter docs all degrade to a best-effort
//! string. A missing nested declaration is recorded on the session result
//! rather than returned as an error.

use thiserror::Error;

/// Hard failures of a parse call
#[derive(Error, Debug)]
pub enum ApiSigError {
    #[error("Failed to load Java grammar: {0}")]
    Language(String),

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session is busy with another parse")]
    SessionBusy,
}

pub type ApiSigResult<T> = Result<T, ApiSigError>;
