//! Centralized error types for mailnotify using thiserror.
//!
//! Every error is fatal to the run: nothing is retried, and `main` is the
//! single place where errors are logged and turned into a process abort.

use thiserror::Error;

/// Errors raised while resolving and validating the merged option set.
#[derive(Error, Debug)]
pub enum OptionError {
    /// A mandatory option is absent after merging flags and environment.
    #[error("Require option {option}")]
    Missing { option: &'static str },
    /// The template file named on the command line does not exist.
    ///
    /// Checked right after argument parsing, before any other validation.
    #[error("Templatefile {path} does not exist")]
    TemplateFileNotFound { path: String },
}

/// Errors raised while rendering the notification template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template file '{path}': {message}")]
    ReadFailed { path: String, message: String },
    #[error("template render failed: {message}")]
    RenderFailed { message: String },
}

/// Errors raised while composing the envelope or talking to the relay.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("no sender address, set --mailfrom or MAILFROM")]
    MissingSender,
    #[error("invalid mail address '{address}': {message}")]
    InvalidAddress { address: String, message: String },
    #[error("envelope has no recipients")]
    NoRecipients,
    #[error("failed to send mail: {0}")]
    SendFailed(String),
}

/// Umbrella error for the whole notification run.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("{0}")]
    Option(#[from] OptionError),
    #[error("{0}")]
    Template(#[from] TemplateError),
    #[error("{0}")]
    Mail(#[from] MailError),
}
