use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{
    StyledExt,
    button::{Button, ButtonVariants},
};
use herald_bridge::{DialogRequest, Icon, NoticeRequest, Position, Theme};

use crate::entities::{DataEntities, presenter_entity::PresenterEntity};

/// Page with one button per kind of prompt.
pub struct ShowcasePage {
    presenter: Entity<PresenterEntity>,
}

impl ShowcasePage {
    pub fn new(data: &DataEntities) -> Self {
        Self {
            presenter: data.presenter.clone(),
        }
    }

    fn prompt_button(
        &self,
        id: &'static str,
        label: &'static str,
        prompt: impl Fn(&mut PresenterEntity, &mut Context<PresenterEntity>) + 'static,
    ) -> Button {
        let presenter = self.presenter.clone();
        Button::new(id).label(label).on_click(move |_, _, cx| {
            presenter.update(cx, |entity, cx| prompt(entity, cx));
        })
    }
}

impl Render for ShowcasePage {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child("Prompts").text_2xl().font_bold())
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .child(
                        self.prompt_button("notice_saved", "Saved", |entity, cx| {
                            entity.notice(NoticeRequest::new("Saved"), cx)
                        })
                        .primary(),
                    )
                    .child(self.prompt_button("notice_error", "Save failed", |entity, cx| {
                        entity.notice(
                            NoticeRequest::new("Failed to save")
                                .title("Error")
                                .theme(Theme::Red)
                                .icon(Icon::Error)
                                .duration_ms(1000),
                            cx,
                        )
                    }))
                    .child(self.prompt_button("notice_grid", "Every position", |entity, cx| {
                        let themes = Theme::ALL.into_iter().cycle();
                        for (position, theme) in Position::ALL.into_iter().zip(themes) {
                            entity.notice(
                                NoticeRequest::new(format!("{position:?}"))
                                    .position(position)
                                    .theme(theme),
                                cx,
                            );
                        }
                    })),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .child(self.prompt_button("dialog_confirm", "Delete item", |entity, cx| {
                        entity.dialog(
                            DialogRequest::new("Delete item?")
                                .title("Confirm")
                                .icon(Icon::Question)
                                .confirm_button_text("Delete")
                                .confirm_button_theme(Theme::Red),
                            cx,
                        )
                    }))
                    .child(self.prompt_button("dialog_success", "Success", |entity, cx| {
                        entity.success(
                            "Reservation saved",
                            "A confirmation email is on its way.",
                            cx,
                        )
                    }))
                    .child(self.prompt_button("dialog_error", "Error", |entity, cx| {
                        entity.error(
                            "Reservation failed",
                            "The room is no longer available.",
                            cx,
                        )
                    })),
            )
    }
}
