//! Request payloads for the two presentation kinds.
//!
//! Every field except the message is optional; omitted fields are resolved
//! against [`crate::config::Config`] when the request is presented. An empty
//! message turns the whole request into a no-op.

use std::time::Duration;

use crate::{icon::Icon, position::Position, theme::Theme};

/// Request for a transient, auto-dismissing notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeRequest {
    /// Optional heading. Switches the notice to the header + body layout.
    pub title: Option<String>,
    /// Text of the notice.
    pub message: String,
    /// Color category of the notice.
    pub theme: Option<Theme>,
    /// Screen anchor of the notice container.
    pub position: Option<Position>,
    /// Glyph shown before the title or message.
    pub icon: Option<Icon>,
    /// How long the notice stays shown before its hide transition.
    pub duration: Option<Duration>,
}

impl NoticeRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Same as [`NoticeRequest::duration`], in milliseconds.
    pub fn duration_ms(self, milliseconds: u64) -> Self {
        self.duration(Duration::from_millis(milliseconds))
    }
}

/// Request for a modal dialog that stays until the user dismisses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogRequest {
    /// Optional heading shown next to the icon.
    pub title: Option<String>,
    /// Body text of the dialog.
    pub message: String,
    /// Glyph shown in the dialog header.
    pub icon: Option<Icon>,
    /// Label of the single confirm button.
    pub confirm_button_text: Option<String>,
    /// Color category of the confirm button.
    pub confirm_button_theme: Option<Theme>,
    /// Optional line of text rendered in the footer before the button.
    pub footer: Option<String>,
}

impl DialogRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn confirm_button_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_button_text = Some(text.into());
        self
    }

    pub fn confirm_button_theme(mut self, theme: Theme) -> Self {
        self.confirm_button_theme = Some(theme);
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_builder_only_sets_what_is_asked() {
        let request = NoticeRequest::new("Saved").theme(Theme::Green);

        assert_eq!(request.message, "Saved");
        assert_eq!(request.theme, Some(Theme::Green));
        assert!(request.title.is_none());
        assert!(request.position.is_none());
        assert!(request.duration.is_none());
    }

    #[test]
    fn notice_duration_ms_converts() {
        let request = NoticeRequest::new("x").duration_ms(1000);
        assert_eq!(request.duration, Some(Duration::from_secs(1)));
    }

    #[test]
    fn dialog_builder_sets_button() {
        let request = DialogRequest::new("Delete item?")
            .title("Confirm")
            .confirm_button_text("Delete")
            .confirm_button_theme(Theme::Red);

        assert_eq!(request.title.as_deref(), Some("Confirm"));
        assert_eq!(request.confirm_button_text.as_deref(), Some("Delete"));
        assert_eq!(request.confirm_button_theme, Some(Theme::Red));
        assert!(request.icon.is_none());
    }
}
