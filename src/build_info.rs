//! Build descriptor loaded from `site/assets/build.json`.
//!
//! Checkpoint tooling stamps this file on every build; the QA gate only
//! needs the label and build id. Unknown fields are ignored so stamp-side
//! additions (build dates, kit versions) never break the gate.

use serde::Deserialize;

/// Parsed build descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildInfo {
    #[serde(default = "default_label")]
    pub label: String,

    #[serde(default)]
    pub build_id: String,
}

fn default_label() -> String {
    "CP??".to_string()
}

impl BuildInfo {
    /// Parse a descriptor from JSON text.
    ///
    /// The serde error is surfaced verbatim so the gate can print the parse
    /// failure exactly as reported.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
