use serde::{Deserialize, Serialize};

/// Glyph shown next to a notice or dialog title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Question,
}

impl Icon {
    /// Icon-font class of the glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Info => "bi-info-circle-fill",
            Icon::Success => "bi-check-circle-fill",
            Icon::Warning => "bi-exclamation-triangle-fill",
            Icon::Error => "bi-x-circle-fill",
            Icon::Question => "bi-question-circle-fill",
        }
    }
}
