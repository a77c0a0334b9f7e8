use std::time::Duration;

use gpui::Context;
use herald_bridge::{DialogRequest, NoticeRequest, PromptRequest, config::Config};
use herald_presenter::{Control, Document, NodeId, Presenter, SystemClock};

/// Longest sleep between teardown checks while steps are pending. Bounds how
/// late a step scheduled during a sleep can run.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Sleep before the next teardown check, `None` once nothing is pending.
fn next_wake(time_until_next: Option<Duration>) -> Option<Duration> {
    time_until_next.map(|wait| wait.min(TICK_INTERVAL))
}

/// Owns the window's presenter and drives its teardown timeline from the
/// foreground executor.
pub struct PresenterEntity {
    presenter: Presenter<Document, SystemClock>,
    ticking: bool,
}

impl PresenterEntity {
    pub fn new(config: Config) -> Self {
        Self {
            presenter: Presenter::new(Document::new(), SystemClock::new(), config),
            ticking: false,
        }
    }

    /// Starts the teardown loop if steps are pending and none is running.
    /// The loop ends once the timeline is empty.
    fn ensure_ticking(&mut self, cx: &mut Context<Self>) {
        if self.ticking || self.presenter.pending_steps() == 0 {
            return;
        }
        self.ticking = true;

        cx.spawn(async move |this, cx| {
            loop {
                let wait = this.update(cx, |entity, cx| {
                    if entity.presenter.run_due() > 0 {
                        cx.notify();
                    }
                    let wait = entity.presenter.time_until_next();
                    entity.ticking = wait.is_some();
                    wait
                });
                let Ok(Some(wait)) = wait.map(next_wake) else {
                    break;
                };
                cx.background_executor().timer(wait).await;
            }
        })
        .detach();
    }

    pub fn notice(&mut self, request: NoticeRequest, cx: &mut Context<Self>) {
        self.presenter.notice(request);
        self.ensure_ticking(cx);
        cx.notify();
    }

    pub fn dialog(&mut self, request: DialogRequest, cx: &mut Context<Self>) {
        self.presenter.dialog(request);
        cx.notify();
    }

    pub fn success(&mut self, title: &str, message: &str, cx: &mut Context<Self>) {
        self.presenter.success(title, message);
        cx.notify();
    }

    pub fn error(&mut self, title: &str, message: &str, cx: &mut Context<Self>) {
        self.presenter.error(title, message);
        cx.notify();
    }

    pub fn present(&mut self, request: PromptRequest, cx: &mut Context<Self>) {
        self.presenter.present(request);
        self.ensure_ticking(cx);
        cx.notify();
    }

    /// Forwards a click on a notice or dialog control to the document.
    pub fn activate(&mut self, id: NodeId, control: Control, cx: &mut Context<Self>) {
        if self.presenter.surface_mut().activate(id, control) {
            cx.notify();
        }
    }

    pub fn document(&self) -> &Document {
        self.presenter.surface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timeline_stops_the_loop() {
        assert_eq!(next_wake(None), None);
    }

    #[test]
    fn wake_is_capped_at_tick_interval() {
        assert_eq!(next_wake(Some(Duration::ZERO)), Some(Duration::ZERO));
        assert_eq!(next_wake(Some(Duration::from_millis(20))), Some(Duration::from_millis(20)));
        assert_eq!(next_wake(Some(Duration::MAX)), Some(TICK_INTERVAL));
    }
}
