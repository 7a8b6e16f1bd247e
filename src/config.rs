use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
    time::Duration,
};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::hey;

pub const DEFAULT_TIMEOUT_MS: u64 = 12_000;
pub const MIN_TIMEOUT_MS: u64 = 1_000;
pub const DEFAULT_SLIDER: &str = "▣";
pub const DEFAULT_BAR: &str = "▢";

/// Settings shared by every pagination session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationOptions {
    /// Inactivity window in milliseconds before the buttons are disabled.
    pub timeout_ms: u64,
    /// Reply to the triggering message instead of sending to the channel.
    pub reply_message: bool,
    /// Delete the message on expiry instead of disabling the buttons.
    pub auto_delete: bool,
    /// Ephemeral reply for interactions, direct message for messages.
    pub private_reply: bool,
    /// Show a progress bar under the page counter.
    pub progress_bar: bool,
    /// Progress bar glyph for the current page.
    pub pro_slider: String,
    /// Progress bar glyph for every other page.
    pub pro_bar: String,
    /// When false only the invoking user may press the buttons.
    pub author_independent: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            reply_message: false,
            auto_delete: false,
            private_reply: false,
            progress_bar: false,
            pro_slider: DEFAULT_SLIDER.to_string(),
            pro_bar: DEFAULT_BAR.to_string(),
            author_independent: true,
        }
    }
}

impl PaginationOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Loads options from a json file, writing the defaults there if it does not exist yet.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            Self::generate(path);
            return Self::default();
        }

        let Ok(data) = fs::read_to_string(path) else {
            hey!("Failed to read pagination config {}", path.display());
            return Self::default();
        };

        match serde_json::from_str(data.as_str()) {
            Ok(options) => options,
            Err(e) => {
                hey!("Failed to parse pagination config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn generate(path: &Path) {
        let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
        else {
            hey!("Failed to create pagination config {}", path.display());
            return;
        };

        let Ok(data) = serde_json::to_string_pretty(&Self::default()) else {
            hey!("Failed to serialize pagination config.");
            return;
        };

        if let Err(e) = write!(file, "{}", data) {
            hey!("Failed to write pagination config: {}", e);
        }
    }
}

/// Whether `glyph` renders as exactly one character.
pub fn is_single_glyph(glyph: &str) -> bool {
    glyph.graphemes(true).count() == 1
}
