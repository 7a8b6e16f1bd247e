//! Where pagination reports things that are worth knowing about but are not
//! errors: deprecated options, truncated button lists, and failures that
//! happened after the first page was already shown.

use std::fmt;
use std::sync::Mutex;

use crate::{hey, nay};

/// A non fatal problem with the pagination configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// `pages` was used instead of `page_list`.
    DeprecatedPages,
    /// More than 5 buttons were provided, only the first 5 are kept.
    ButtonsTruncated { provided: usize },
    /// `private_reply` and `reply_message` were both set; the private reply wins.
    PrivateReplyOverridesReply,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DeprecatedPages => {
                write!(f, "pages reference deprecated, replace pages with page_list")
            }
            Warning::ButtonsTruncated { provided } => write!(
                f,
                "{} buttons have been provided, the extras beyond 5 will be removed",
                provided
            ),
            Warning::PrivateReplyOverridesReply => write!(
                f,
                "The private_reply setting overwrites and disables the reply_message setting"
            ),
        }
    }
}

/// The part of a running session a suppressed failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Updating the message after a button press.
    Navigate,
    /// Deleting the message from the delete button.
    Delete,
    /// Checking whether the message still exists on expiry.
    Lookup,
    /// Disabling the buttons or auto deleting on expiry.
    Expire,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Navigate => "navigate",
            Stage::Delete => "delete",
            Stage::Lookup => "lookup",
            Stage::Expire => "expire",
        };
        f.write_str(name)
    }
}

/// A Discord failure that happened inside a session and was not propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressedFailure {
    pub stage: Stage,
    pub error: String,
}

/// Sink for warnings and suppressed failures.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, warning: Warning);
    fn suppressed(&self, failure: SuppressedFailure);
}

/// Logs to the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn warn(&self, warning: Warning) {
        hey!("Pagination: {}", warning);
    }

    fn suppressed(&self, failure: SuppressedFailure) {
        nay!(
            "Pagination session failed to {}: {}",
            failure.stage,
            failure.error
        );
    }
}

/// Keeps everything in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: Mutex<Vec<Warning>>,
    failures: Mutex<Vec<SuppressedFailure>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }

    pub fn failures(&self) -> Vec<SuppressedFailure> {
        self.failures
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, warning: Warning) {
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.push(warning);
        }
    }

    fn suppressed(&self, failure: SuppressedFailure) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(failure);
        }
    }
}
