use gpui::{
    App, ElementId, Entity, IntoElement, ParentElement, RenderOnce, Styled, Window, div, hsla,
    px,
};
use gpui_component::{
    Icon, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};
use herald_presenter::{Control, NoticeFragment, NoticeLayout, Phase};

use crate::{
    components::glyph::icon_name, entities::presenter_entity::PresenterEntity,
    palette::theme_colors,
};

const NOTICE_WIDTH: f32 = 340.0;

/// A single notice drawn from its fragment.
#[derive(IntoElement)]
pub struct NoticeCard {
    notice: NoticeFragment,
    phase: Phase,
    presenter: Entity<PresenterEntity>,
}

impl NoticeCard {
    pub fn new(notice: NoticeFragment, phase: Phase, presenter: Entity<PresenterEntity>) -> Self {
        Self {
            notice,
            phase,
            presenter,
        }
    }

    fn dismiss_button(&self) -> Button {
        let id = self.notice.id;
        let presenter = self.presenter.clone();
        Button::new(ElementId::Name(format!("notice-dismiss-{}", id.get()).into()))
            .icon(IconName::Close)
            .ghost()
            .small()
            .on_click(move |_, _, cx| {
                presenter.update(cx, |entity, cx| entity.activate(id, Control::Dismiss, cx));
            })
    }
}

impl RenderOnce for NoticeCard {
    fn render(self, _: &mut Window, _: &mut App) -> impl IntoElement {
        let colors = theme_colors(self.notice.theme);
        let opacity = if self.phase == Phase::Shown { 1.0 } else { 0.0 };
        let icon = div().flex_none().child(Icon::new(icon_name(self.notice.icon)));
        let dismiss = self.dismiss_button();

        let card = div()
            .w(px(NOTICE_WIDTH))
            .rounded_md()
            .shadow_lg()
            .opacity(opacity)
            .bg(colors.background)
            .text_color(colors.foreground);

        match self.notice.layout() {
            NoticeLayout::HeaderBody => card.child(
                v_flex()
                    .child(
                        h_flex()
                            .gap_2()
                            .px_3()
                            .py_2()
                            .items_center()
                            .border_b_1()
                            .border_color(hsla(0., 0., 0., 0.15))
                            .child(icon)
                            .child(
                                div()
                                    .flex_1()
                                    .font_semibold()
                                    .child(self.notice.title.clone().unwrap_or_default()),
                            )
                            .child(dismiss),
                    )
                    .child(div().p_3().child(self.notice.message)),
            ),
            NoticeLayout::Inline => card.child(
                h_flex()
                    .gap_2()
                    .p_3()
                    .items_center()
                    .child(icon)
                    .child(div().flex_1().child(self.notice.message))
                    .child(dismiss),
            ),
        }
    }
}
