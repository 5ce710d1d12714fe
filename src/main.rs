//! mailnotify - Templated e-mail notifications for Icinga 2.

use std::path::Path;

use clap::Parser;
use tracing::{debug, error, info};

use mailnotify::cli::Cli;
use mailnotify::context::NotificationContext;
use mailnotify::error::{NotifyError, OptionError};
use mailnotify::logging;
use mailnotify::mailer::{Mailer, Recipients};
use mailnotify::template::TemplateEngine;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let cli = Cli::parse();

    let _guard = logging::init(Path::new(logging::LOG_PATH));

    debug!(args = ?argv, "parsed arguments");
    debug!(options = %cli.summary(), "merged option set");

    match run(&cli) {
        Ok(()) => {
            info!("Mail sent: {}", cli.summary());
        }
        Err(err) => {
            debug!(error = ?err, "run failed");
            // -v/--log diverts the fatal line away from the log file.
            if !cli.log {
                error!(
                    "Error in script. The variables or options were: {}",
                    cli.summary()
                );
            }
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// The notification pipeline: check template file, validate, render, send.
fn run(cli: &Cli) -> Result<(), NotifyError> {
    // The template file is checked right after parsing, before the other
    // mandatory fields: a bad path is reported even when more is missing.
    if let Some(path) = &cli.templatefile {
        if !path.exists() {
            return Err(OptionError::TemplateFileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
    }

    let ctx = NotificationContext::resolve(cli)?;

    let engine = TemplateEngine::new();
    let message = engine.render_file(&ctx.templatefile, &ctx.scope())?;

    let to = Recipients::Single(ctx.usermail.clone());
    let mailer = Mailer::new();
    mailer.send(ctx.mailfrom.as_deref(), &to, &Recipients::Absent, &message)?;

    Ok(())
}
