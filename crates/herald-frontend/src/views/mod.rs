mod showcase_page;

use std::collections::HashSet;

use gpui::{
    AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
};
use gpui_component::Root;
use herald_bridge::{
    Position,
    position::{Horizontal, Vertical},
};
use herald_presenter::NodeId;

use crate::{
    components::{dialog, notice_card::NoticeCard},
    entities::DataEntities,
    views::showcase_page::ShowcasePage,
};

/// Root view of the window: the page content with the notice layers and the
/// dialog layer drawn on top.
pub struct HeraldUi {
    data: DataEntities,
    page: Entity<ShowcasePage>,
    /// Dialogs already handed to the window's dialog layer.
    opened_dialogs: HashSet<NodeId>,
}

impl HeraldUi {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe_in(&data.presenter, window, |this, _, window, cx| {
            this.sync_dialogs(window, cx);
            cx.notify();
        })
        .detach();

        let page = cx.new(|_| ShowcasePage::new(data));
        Self {
            data: data.clone(),
            page,
            opened_dialogs: HashSet::new(),
        }
    }

    /// Opens every dialog newly mounted on the document and forgets the ones
    /// that have been dismissed.
    fn sync_dialogs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let presenter = self.data.presenter.clone();
        let mounted: Vec<_> = presenter
            .read(cx)
            .document()
            .dialogs()
            .map(|(dialog, _)| dialog.clone())
            .collect();

        self.opened_dialogs
            .retain(|id| mounted.iter().any(|dialog| dialog.id == *id));
        for fragment in mounted {
            if self.opened_dialogs.insert(fragment.id) {
                log::debug!("Opening dialog {} in the dialog layer", fragment.id);
                dialog::open(fragment, presenter.clone(), window, cx);
            }
        }
    }
}

/// Full-window layer anchoring its notices at `position`.
fn notice_layer(position: Position) -> Div {
    let layer = div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .p_3()
        .flex()
        .flex_col()
        .gap_2();

    let layer = match position.vertical() {
        Vertical::Top => layer.justify_start(),
        Vertical::Middle => layer.justify_center(),
        Vertical::Bottom => layer.justify_end(),
    };
    match position.horizontal() {
        Horizontal::Start => layer.items_start(),
        Horizontal::Center => layer.items_center(),
        Horizontal::End => layer.items_end(),
    }
}

impl Render for HeraldUi {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dialog_layer = Root::render_dialog_layer(window, cx);
        let notices: Vec<_> = self
            .data
            .presenter
            .read(cx)
            .document()
            .notices()
            .map(|(notice, phase)| (notice.clone(), phase))
            .collect();

        let presenter = self.data.presenter.clone();
        let notice_layers = Position::ALL.into_iter().filter_map(|position| {
            let cards: Vec<NoticeCard> = notices
                .iter()
                .filter(|(notice, _)| notice.position == position)
                .map(|(notice, phase)| NoticeCard::new(notice.clone(), *phase, presenter.clone()))
                .collect();
            (!cards.is_empty()).then(|| notice_layer(position).children(cards))
        });

        div()
            .relative()
            .size_full()
            .child(div().p_5().size_full().child(self.page.clone()))
            .children(notice_layers)
            .children(dialog_layer)
    }
}
