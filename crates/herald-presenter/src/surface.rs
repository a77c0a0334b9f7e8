use crate::fragment::{DialogFragment, NodeId, NoticeFragment};

/// The document and widget layer a presenter draws on.
///
/// Mount and unmount calls mutate the document tree. Show and hide calls
/// trigger the widget layer's transitions; their animations are owned by the
/// implementation. None of the calls can fail from the presenter's point of
/// view.
pub trait Surface {
    /// Inserts a positioned container holding the notice.
    fn mount_notice(&mut self, notice: NoticeFragment);

    /// Starts the notice's entrance transition.
    fn show_notice(&mut self, id: NodeId);

    /// Starts the notice's exit transition. The container stays mounted.
    fn hide_notice(&mut self, id: NodeId);

    /// Detaches and discards the container of the node.
    fn unmount(&mut self, id: NodeId);

    /// Inserts the dialog. Its close and confirm controls are wired to the
    /// surface's own dismiss mechanism.
    fn mount_dialog(&mut self, dialog: DialogFragment);

    /// Opens the dialog.
    fn show_dialog(&mut self, id: NodeId);
}
