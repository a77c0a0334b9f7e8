pub mod dialog;
pub mod glyph;
pub mod notice_card;
