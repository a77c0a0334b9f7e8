//! The notice and dialog presenter.
//!
//! A [`Presenter`] is constructed once by the UI layer and passed to whoever
//! needs to raise prompts. Every operation is fire-and-forget: it mounts and
//! shows at most one node on the surface and returns nothing. Notices are
//! torn down later by [`Presenter::run_due`], which the host calls from its
//! event loop.

use std::time::Duration;

use herald_bridge::{DialogRequest, Icon, NoticeRequest, PromptRequest, config::Config};

use crate::{
    clock::Clock,
    fragment::{DialogFragment, NodeId, NoticeFragment},
    surface::Surface,
    timeline::{Step, StepKind, Timeline},
};

pub struct Presenter<S, C> {
    surface: S,
    clock: C,
    config: Config,
    timeline: Timeline,
    next_id: u64,
}

impl<S: Surface, C: Clock> Presenter<S, C> {
    pub fn new(surface: S, clock: C, config: Config) -> Self {
        Self {
            surface,
            clock,
            config,
            timeline: Timeline::new(),
            next_id: 0,
        }
    }

    /// Shows a transient notice and schedules its teardown.
    ///
    /// The notice is hidden once its duration has elapsed and its container
    /// is removed after the fade-out delay that follows. An empty message
    /// does nothing.
    pub fn notice(&mut self, request: NoticeRequest) {
        let id = self.next_node_id();
        let Some(notice) = NoticeFragment::resolve(id, request, &self.config.notice) else {
            log::debug!("Skipping notice with an empty message");
            return;
        };
        self.next_id = id.get();

        // A duration past the end of the clock means the notice never hides.
        let hide_at = self.clock.now().saturating_add(notice.duration);
        log::debug!(
            "Showing notice {id} ({:?}, {:?}) until {hide_at:?}",
            notice.theme,
            notice.position
        );

        self.surface.mount_notice(notice);
        self.surface.show_notice(id);
        self.timeline.schedule(Step {
            at: hide_at,
            node: id,
            kind: StepKind::Hide,
        });
    }

    /// Opens a modal dialog. It stays until the user activates its close or
    /// confirm control; the caller is not told which. An empty message does
    /// nothing.
    pub fn dialog(&mut self, request: DialogRequest) {
        let id = self.next_node_id();
        let Some(dialog) = DialogFragment::resolve(id, request, &self.config.dialog) else {
            log::debug!("Skipping dialog with an empty message");
            return;
        };
        self.next_id = id.get();

        log::debug!("Opening dialog {id}");
        self.surface.mount_dialog(dialog);
        self.surface.show_dialog(id);
    }

    /// Opens a dialog with the success glyph.
    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.dialog(DialogRequest::new(message).title(title).icon(Icon::Success));
    }

    /// Opens a dialog with the error glyph.
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.dialog(DialogRequest::new(message).title(title).icon(Icon::Error));
    }

    /// Presents a request received over the prompt bridge.
    pub fn present(&mut self, request: PromptRequest) {
        match request {
            PromptRequest::Notice(request) => self.notice(request),
            PromptRequest::Dialog(request) => self.dialog(request),
        }
    }

    /// Runs every teardown step that is due, including removals that become
    /// due while hiding. Returns how many steps ran.
    pub fn run_due(&mut self) -> usize {
        let now = self.clock.now();
        let fade_out = Duration::from_millis(self.config.fade_out_ms());
        let mut executed = 0;

        while let Some(step) = self.timeline.pop_due(now) {
            match step.kind {
                StepKind::Hide => {
                    log::trace!("Hiding notice {}", step.node);
                    self.surface.hide_notice(step.node);
                    self.timeline.schedule(Step {
                        at: step.at.saturating_add(fade_out),
                        node: step.node,
                        kind: StepKind::Remove,
                    });
                }
                StepKind::Remove => {
                    log::trace!("Removing notice {}", step.node);
                    self.surface.unmount(step.node);
                }
            }
            executed += 1;
        }

        executed
    }

    /// Earliest pending teardown deadline, on the presenter's clock.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    /// Time left until the next teardown step, zero if one is already due.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_deadline().map(|deadline| deadline.saturating_sub(now))
    }

    pub fn pending_steps(&self) -> usize {
        self.timeline.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts forwarding user input to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Id the next mounted node gets. Only taken once the request resolves.
    fn next_node_id(&self) -> NodeId {
        NodeId(self.next_id + 1)
    }
}
