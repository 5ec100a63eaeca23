//! Errors raised while loading `acreage.toml`.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Dotted key of a config field, e.g. `seo.title_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file is not valid TOML")]
    Toml(#[from] toml::de::Error),

    /// Parsed fine but failed validation. Carries every problem found.
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// One rejected field value.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    /// Attach a suggestion shown under the message.
    pub fn hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Problems gathered while validating all sections.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem with `field`. Chain `.hint(..)` to add a suggestion.
    pub fn report(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
    ) -> &mut ConfigDiagnostic {
        let index = self.errors.len();
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: None,
        });
        &mut self.errors[index]
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let noun = if count == 1 { "problem" } else { "problems" };
        write!(f, "{} ({count} {noun})", "invalid configuration".red().bold())?;
        for diag in &self.errors {
            write!(f, "\n  {}: {}", diag.field.as_str().cyan(), diag.message)?;
            if let Some(hint) = &diag.hint {
                write!(f, "\n    {} {hint}", "hint:".yellow())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
