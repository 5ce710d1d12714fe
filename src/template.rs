//! Rendering of the operator-authored notification template.
//!
//! The rendered string IS the full SMTP message payload: templates carry
//! their own header lines (Subject:, To:, ...) and mailnotify never
//! synthesizes MIME headers on top.
//!
//! Templates use minijinja syntax with the notification fields as
//! directly addressable variables plus conditionals and loops:
//!
//! ```text
//! Subject: {{ notificationtype }} - {{ hostdisplayname }} - {{ servicedisplayname }}
//!
//! {{ servicedisplayname }} on {{ hostname }} is {{ servicestate }}!
//! {% if comment %}Comment by {{ author }}: {{ comment }}{% endif %}
//! {% for info in extrainformation %}{{ info }}
//! {% endfor %}
//! ```
//!
//! Referencing a name outside the notification fields is a render error.

use std::path::Path;

use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;

use crate::error::TemplateError;

/// Template engine wrapping a single minijinja `Environment`.
///
/// The environment is created once per run; undefined variables are a hard
/// error and the template's trailing newline is preserved so a template of
/// pure field references reproduces the field values byte for byte.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Render a template source string against the notification scope.
    pub fn render_str(&self, source: &str, scope: &Value) -> Result<String, TemplateError> {
        self.env
            .render_str(source, scope)
            .map_err(|e| TemplateError::RenderFailed {
                message: e.to_string(),
            })
    }

    /// Read and render the template file into the full mail payload.
    pub fn render_file(&self, path: &Path, scope: &Value) -> Result<String, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|e| TemplateError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.render_str(&source, scope)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish()
    }
}
