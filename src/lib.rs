// src/lib.rs
//! mailnotify - Templated e-mail notifications for Icinga 2.
//!
//! Invoked once per notification event. The pipeline runs strictly
//! forward: merge flags and environment, validate, render the operator
//! template, deliver over SMTP. Any failure aborts the run after logging.

pub mod cli;
pub mod context;
pub mod error;
pub mod logging;
pub mod mailer;
pub mod template;

// Re-export commonly used types
pub use cli::Cli;
pub use context::NotificationContext;
pub use error::{MailError, NotifyError, OptionError, TemplateError};
pub use mailer::{Mailer, Recipients, MAIL_HOST, SMTP_PORT};
pub use template::TemplateEngine;
