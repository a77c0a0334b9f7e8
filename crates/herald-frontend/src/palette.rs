use gpui::{Hsla, rgb};
use herald_bridge::Theme;

/// Background and text colors of a themed surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Hsla,
    pub foreground: Hsla,
}

const LIGHT_TEXT: u32 = 0xffffff;
const DARK_TEXT: u32 = 0x212529;

/// Resolves the display-color token of a theme to concrete colors.
pub fn theme_colors(theme: Theme) -> ThemeColors {
    let background = match theme {
        Theme::Blue => 0x0d6efd,
        Theme::Gray => 0x6c757d,
        Theme::Green => 0x198754,
        Theme::Red => 0xdc3545,
        Theme::Yellow => 0xffc107,
        Theme::LightBlue => 0x0dcaf0,
        Theme::Light => 0xf8f9fa,
        Theme::Dark => 0x212529,
    };
    // light dismiss controls sit on dark backgrounds, so text follows them
    let foreground = if theme.light_dismiss() {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    };

    ThemeColors {
        background: rgb(background).into(),
        foreground: rgb(foreground).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_a_distinct_background() {
        let backgrounds: Vec<Hsla> = Theme::ALL
            .iter()
            .map(|theme| theme_colors(*theme).background)
            .collect();

        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn text_contrasts_with_background() {
        for theme in Theme::ALL {
            let colors = theme_colors(theme);
            assert!(
                (colors.background.l - colors.foreground.l).abs() > 0.3,
                "{theme:?} text is too close to its background"
            );
        }
    }
}
