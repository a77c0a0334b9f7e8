use serde::{Deserialize, Serialize};

/// Vertical anchor of a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Top,
    Middle,
    Bottom,
}

/// Horizontal anchor of a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Start,
    Center,
    End,
}

/// Screen anchor of a notice on a nine-point grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopStart,
    TopCenter,
    #[default]
    TopEnd,
    MiddleStart,
    MiddleCenter,
    MiddleEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}

impl Position {
    /// Every position, row by row.
    pub const ALL: [Position; 9] = [
        Position::TopStart,
        Position::TopCenter,
        Position::TopEnd,
        Position::MiddleStart,
        Position::MiddleCenter,
        Position::MiddleEnd,
        Position::BottomStart,
        Position::BottomCenter,
        Position::BottomEnd,
    ];

    /// Placement classes applied to the positioned notice container.
    pub fn placement(self) -> &'static str {
        match self {
            Position::TopStart => "top-0 start-0",
            Position::TopCenter => "top-0 start-50 translate-middle-x",
            Position::TopEnd => "top-0 end-0",
            Position::MiddleStart => "top-50 start-0 translate-middle-y",
            Position::MiddleCenter => "top-50 start-50 translate-middle",
            Position::MiddleEnd => "top-50 end-0 translate-middle-y",
            Position::BottomStart => "bottom-0 start-0",
            Position::BottomCenter => "bottom-0 start-50 translate-middle-x",
            Position::BottomEnd => "bottom-0 end-0",
        }
    }

    pub fn vertical(self) -> Vertical {
        match self {
            Position::TopStart | Position::TopCenter | Position::TopEnd => Vertical::Top,
            Position::MiddleStart | Position::MiddleCenter | Position::MiddleEnd => {
                Vertical::Middle
            }
            Position::BottomStart | Position::BottomCenter | Position::BottomEnd => {
                Vertical::Bottom
            }
        }
    }

    pub fn horizontal(self) -> Horizontal {
        match self {
            Position::TopStart | Position::MiddleStart | Position::BottomStart => Horizontal::Start,
            Position::TopCenter | Position::MiddleCenter | Position::BottomCenter => {
                Horizontal::Center
            }
            Position::TopEnd | Position::MiddleEnd | Position::BottomEnd => Horizontal::End,
        }
    }
}
