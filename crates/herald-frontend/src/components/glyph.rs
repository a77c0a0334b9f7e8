use gpui_component::IconName;
use herald_bridge::Icon;

/// Icon set glyph standing in for a prompt icon.
pub fn icon_name(icon: Icon) -> IconName {
    match icon {
        Icon::Info => IconName::Info,
        Icon::Success => IconName::CircleCheck,
        Icon::Warning => IconName::TriangleAlert,
        Icon::Error => IconName::CircleX,
        // the bundled icon set has no question mark glyph
        Icon::Question => IconName::Info,
    }
}
