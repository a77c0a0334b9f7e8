use serde::{Deserialize, Serialize};

/// Semantic color category applied to notices and dialog buttons.
///
/// Each theme maps to a display-color token understood by the styling layer
/// and decides whether dismiss controls drawn on top of it use the light
/// variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Primary accent, used for neutral highlights.
    Blue,
    /// Muted secondary accent.
    Gray,
    /// Affirmative outcome. Default for dialog confirm buttons.
    Green,
    /// Failure or destructive action.
    Red,
    /// Non-critical issue the user should notice.
    Yellow,
    /// Informational accent.
    LightBlue,
    /// Neutral light surface. Default for notices.
    #[default]
    Light,
    /// Neutral dark surface.
    Dark,
}

impl Theme {
    /// Every theme, in table order.
    pub const ALL: [Theme; 8] = [
        Theme::Blue,
        Theme::Gray,
        Theme::Green,
        Theme::Red,
        Theme::Yellow,
        Theme::LightBlue,
        Theme::Light,
        Theme::Dark,
    ];

    /// Display-color token of the theme.
    pub fn token(self) -> &'static str {
        match self {
            Theme::Blue => "primary",
            Theme::Gray => "secondary",
            Theme::Green => "success",
            Theme::Red => "danger",
            Theme::Yellow => "warning",
            Theme::LightBlue => "info",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Whether dismiss controls should render light-on-dark on this theme.
    pub fn light_dismiss(self) -> bool {
        match self {
            Theme::Blue | Theme::Gray | Theme::Green | Theme::Red | Theme::Dark => true,
            Theme::Yellow | Theme::LightBlue | Theme::Light => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            for b in &Theme::ALL[i + 1..] {
                assert_ne!(a.token(), b.token());
            }
        }
    }

    #[test]
    fn neutral_theme_is_default() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().light_dismiss());
    }

    #[test]
    fn dark_backgrounds_use_light_dismiss() {
        assert!(Theme::Red.light_dismiss());
        assert!(Theme::Dark.light_dismiss());
        assert!(!Theme::Yellow.light_dismiss());
    }

    #[test]
    fn theme_names_are_kebab_case_in_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }

        let wrapper: Wrapper = toml::from_str("theme = \"light-blue\"").unwrap();
        assert_eq!(wrapper.theme, Theme::LightBlue);
    }
}
