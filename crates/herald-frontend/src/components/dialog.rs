use gpui::{App, Entity, ParentElement, Styled, Window, div};
use gpui_component::{
    ActiveTheme, Icon, WindowExt,
    button::ButtonVariant,
    dialog::DialogButtonProps,
    h_flex, v_flex,
};
use herald_bridge::Theme;
use herald_presenter::{Control, DialogFragment};

use crate::{components::glyph::icon_name, entities::presenter_entity::PresenterEntity};

/// Button variant matching the confirm theme.
pub fn confirm_variant(theme: Theme) -> ButtonVariant {
    match theme {
        Theme::Blue => ButtonVariant::Primary,
        Theme::Green => ButtonVariant::Success,
        Theme::Red => ButtonVariant::Danger,
        Theme::Yellow => ButtonVariant::Warning,
        Theme::LightBlue => ButtonVariant::Info,
        Theme::Gray | Theme::Light | Theme::Dark => ButtonVariant::Secondary,
    }
}

/// Hands a mounted dialog to the window's dialog layer. Confirm and every
/// other way of closing (header button, Escape, backdrop) remove it from the
/// document.
pub fn open(dialog: DialogFragment, presenter: Entity<PresenterEntity>, window: &mut Window, cx: &mut App) {
    let id = dialog.id;
    window.open_dialog(cx, move |builder, _, cx| {
        let title = h_flex()
            .gap_2()
            .items_center()
            .child(Icon::new(icon_name(dialog.icon)))
            .child(dialog.title.clone().unwrap_or_default());

        let mut body = v_flex().gap_3().child(dialog.message.clone());
        if let Some(footer) = dialog.footer.clone() {
            body = body.child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(footer),
            );
        }

        let on_confirm = presenter.clone();
        let on_close = presenter.clone();
        builder
            .title(title)
            .child(body)
            .alert()
            .button_props(
                DialogButtonProps::default()
                    .ok_text(dialog.confirm_button_text.clone())
                    .ok_variant(confirm_variant(dialog.confirm_button_theme)),
            )
            .on_ok(move |_, _, cx| {
                on_confirm.update(cx, |entity, cx| entity.activate(id, Control::Confirm, cx));
                true
            })
            .on_close(move |_, _, cx| {
                // no-op when confirm already removed it
                on_close.update(cx, |entity, cx| entity.activate(id, Control::Close, cx));
            })
    });
}
