//! Retained, in-memory document body.
//!
//! [`Document`] keeps every mounted notice and dialog in insertion order
//! together with the phase of its show/hide transition. Hosts that draw
//! themselves (the gpui frontend) render straight from it, and tests use
//! [`Document::activate`] to stand in for user clicks.

use crate::{
    fragment::{DialogFragment, NodeId, NoticeFragment},
    surface::Surface,
};

/// Transition phase of a mounted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached but not yet shown.
    Mounted,
    Shown,
    /// Exit transition started; the node is still attached.
    Hidden,
}

/// A user-operable control of a mounted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Close button of a notice.
    Dismiss,
    /// Close button in a dialog header.
    Close,
    /// Confirm button in a dialog footer.
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Notice(NoticeFragment),
    Dialog(DialogFragment),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Notice(notice) => notice.id,
            Node::Dialog(dialog) => dialog.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedNode {
    pub node: Node,
    pub phase: Phase,
}

#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<MountedNode>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mounted containers, notices and dialogs alike.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&MountedNode> {
        self.position(id).map(|index| &self.nodes[index])
    }

    pub fn phase(&self, id: NodeId) -> Option<Phase> {
        self.get(id).map(|mounted| mounted.phase)
    }

    /// Mounted nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &MountedNode> {
        self.nodes.iter()
    }

    /// Mounted notices with their phase, in insertion order.
    pub fn notices(&self) -> impl Iterator<Item = (&NoticeFragment, Phase)> {
        self.nodes.iter().filter_map(|mounted| match &mounted.node {
            Node::Notice(notice) => Some((notice, mounted.phase)),
            Node::Dialog(_) => None,
        })
    }

    /// Mounted dialogs with their phase, in insertion order.
    pub fn dialogs(&self) -> impl Iterator<Item = (&DialogFragment, Phase)> {
        self.nodes.iter().filter_map(|mounted| match &mounted.node {
            Node::Dialog(dialog) => Some((dialog, mounted.phase)),
            Node::Notice(_) => None,
        })
    }

    /// Simulates a user activating a control of the node.
    ///
    /// Dismissing a notice starts its exit transition; the container is still
    /// removed by the presenter's teardown. Closing or confirming a dialog
    /// removes it. Returns `false` when the node is gone or does not have the
    /// control.
    pub fn activate(&mut self, id: NodeId, control: Control) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        match (&self.nodes[index].node, control) {
            (Node::Notice(_), Control::Dismiss) => {
                self.nodes[index].phase = Phase::Hidden;
                true
            }
            (Node::Dialog(_), Control::Close | Control::Confirm) => {
                log::debug!("Dialog {id} dismissed with {control:?}");
                self.nodes.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Serializes the body: every notice wrapped in its positioned container,
    /// followed in insertion order by the dialogs.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for mounted in &self.nodes {
            match &mounted.node {
                Node::Notice(notice) => {
                    html.push_str(&format!(
                        r#"<div class="{}" id="{}">{}</div>"#,
                        notice.container_class(),
                        notice.id,
                        notice.to_html()
                    ));
                }
                Node::Dialog(dialog) => html.push_str(&dialog.to_html()),
            }
        }
        html
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|mounted| mounted.node.id() == id)
    }

    fn set_phase(&mut self, id: NodeId, phase: Phase) {
        match self.position(id) {
            Some(index) => self.nodes[index].phase = phase,
            None => log::trace!("Ignoring {phase:?} for detached node {id}"),
        }
    }
}

impl Surface for Document {
    fn mount_notice(&mut self, notice: NoticeFragment) {
        self.nodes.push(MountedNode {
            node: Node::Notice(notice),
            phase: Phase::Mounted,
        });
    }

    fn show_notice(&mut self, id: NodeId) {
        self.set_phase(id, Phase::Shown);
    }

    fn hide_notice(&mut self, id: NodeId) {
        self.set_phase(id, Phase::Hidden);
    }

    fn unmount(&mut self, id: NodeId) {
        match self.position(id) {
            Some(index) => {
                self.nodes.remove(index);
            }
            None => log::warn!("Node {id} was already detached"),
        }
    }

    fn mount_dialog(&mut self, dialog: DialogFragment) {
        self.nodes.push(MountedNode {
            node: Node::Dialog(dialog),
            phase: Phase::Mounted,
        });
    }

    fn show_dialog(&mut self, id: NodeId) {
        self.set_phase(id, Phase::Shown);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use herald_bridge::{Icon, Position, Theme};

    use super::*;

    fn notice(id: u64) -> NoticeFragment {
        NoticeFragment {
            id: NodeId(id),
            title: None,
            message: format!("notice {id}"),
            theme: Theme::Light,
            position: Position::TopEnd,
            icon: Icon::Info,
            duration: Duration::from_secs(4),
        }
    }

    fn dialog(id: u64) -> DialogFragment {
        DialogFragment {
            id: NodeId(id),
            title: Some("Confirm".to_owned()),
            message: "Sure?".to_owned(),
            icon: Icon::Question,
            confirm_button_text: "OK".to_owned(),
            confirm_button_theme: Theme::Green,
            footer: None,
        }
    }

    #[test]
    fn notice_phases_follow_surface_calls() {
        let mut document = Document::new();
        document.mount_notice(notice(1));
        assert_eq!(document.phase(NodeId(1)), Some(Phase::Mounted));

        document.show_notice(NodeId(1));
        assert_eq!(document.phase(NodeId(1)), Some(Phase::Shown));

        document.hide_notice(NodeId(1));
        assert_eq!(document.phase(NodeId(1)), Some(Phase::Hidden));

        document.unmount(NodeId(1));
        assert!(document.is_empty());
    }

    #[test]
    fn dismissing_a_notice_hides_but_keeps_it_mounted() {
        let mut document = Document::new();
        document.mount_notice(notice(1));
        document.show_notice(NodeId(1));

        assert!(document.activate(NodeId(1), Control::Dismiss));
        assert_eq!(document.phase(NodeId(1)), Some(Phase::Hidden));
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn dialog_controls_remove_the_dialog() {
        let mut document = Document::new();
        document.mount_dialog(dialog(1));
        document.mount_dialog(dialog(2));

        assert!(document.activate(NodeId(1), Control::Close));
        assert!(document.activate(NodeId(2), Control::Confirm));
        assert!(document.is_empty());
    }

    #[test]
    fn controls_must_match_the_node_kind() {
        let mut document = Document::new();
        document.mount_notice(notice(1));
        document.mount_dialog(dialog(2));

        assert!(!document.activate(NodeId(1), Control::Confirm));
        assert!(!document.activate(NodeId(2), Control::Dismiss));
        assert!(!document.activate(NodeId(3), Control::Close));
        assert_eq!(document.len(), 2);
    }

    #[test]
    fn html_wraps_notices_in_their_own_container() {
        let mut document = Document::new();
        document.mount_notice(notice(1));
        document.mount_notice(notice(2));

        let html = document.to_html();
        assert_eq!(html.matches("toast-container").count(), 2);
        assert!(html.contains(r#"id="herald-1""#));
        assert!(html.contains(r#"id="herald-2""#));
    }

    #[test]
    fn iterators_split_by_kind() {
        let mut document = Document::new();
        document.mount_notice(notice(1));
        document.mount_dialog(dialog(2));
        document.mount_notice(notice(3));

        let notices: Vec<_> = document.notices().map(|(n, _)| n.id).collect();
        let dialogs: Vec<_> = document.dialogs().map(|(d, _)| d.id).collect();
        assert_eq!(notices, vec![NodeId(1), NodeId(3)]);
        assert_eq!(dialogs, vec![NodeId(2)]);
    }
}
