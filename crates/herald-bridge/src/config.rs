use serde::{Deserialize, Serialize};

use crate::{icon::Icon, position::Position, theme::Theme};

/// Default display time of a notice, in milliseconds.
pub const DEFAULT_NOTICE_DURATION_MILLISECONDS: u64 = 4000;

/// Time between a notice's hide transition and the removal of its container,
/// in milliseconds. Matches the fade-out animation of the widget layer.
pub const FADE_OUT_MILLISECONDS: u64 = 300;

/// Defaults applied to notice fields the request leaves out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoticeDefaults {
    /// Color category of notices without an explicit theme.
    pub theme: Theme,
    /// Screen anchor of notices without an explicit position.
    pub position: Position,
    /// Glyph of notices without an explicit icon.
    pub icon: Icon,
    /// Display time in milliseconds of notices without an explicit duration.
    pub duration_ms: u64,
}

impl Default for NoticeDefaults {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            position: Position::TopEnd,
            icon: Icon::Info,
            duration_ms: DEFAULT_NOTICE_DURATION_MILLISECONDS,
        }
    }
}

/// Defaults applied to dialog fields the request leaves out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DialogDefaults {
    /// Glyph of dialogs without an explicit icon.
    pub icon: Icon,
    /// Confirm button label of dialogs without an explicit one.
    pub confirm_button_text: String,
    /// Confirm button theme of dialogs without an explicit one.
    pub confirm_button_theme: Theme,
}

impl Default for DialogDefaults {
    fn default() -> Self {
        Self {
            icon: Icon::Info,
            confirm_button_text: "OK".to_owned(),
            confirm_button_theme: Theme::Green,
        }
    }
}

/// Global presenter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Fallbacks for notice requests.
    pub notice: NoticeDefaults,
    /// Fallbacks for dialog requests.
    pub dialog: DialogDefaults,
    /// Override of [`FADE_OUT_MILLISECONDS`]. Only change it together with the
    /// widget layer's fade-out animation.
    pub fade_out_ms: Option<u64>,
}

impl Config {
    /// Delay between a notice's hide transition and its removal.
    pub fn fade_out_ms(&self) -> u64 {
        self.fade_out_ms.unwrap_or(FADE_OUT_MILLISECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();

        assert_eq!(config.notice.theme, Theme::Light);
        assert_eq!(config.notice.position, Position::TopEnd);
        assert_eq!(config.notice.icon, Icon::Info);
        assert_eq!(config.notice.duration_ms, 4000);
        assert_eq!(config.dialog.confirm_button_text, "OK");
        assert_eq!(config.dialog.confirm_button_theme, Theme::Green);
        assert_eq!(config.fade_out_ms(), 300);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [notice]
            position = "bottom-center"
            duration_ms = 2500
            "#,
        )
        .unwrap();

        assert_eq!(config.notice.position, Position::BottomCenter);
        assert_eq!(config.notice.duration_ms, 2500);
        assert_eq!(config.notice.theme, Theme::Light);
        assert_eq!(config.dialog, DialogDefaults::default());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
