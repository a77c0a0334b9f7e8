//! Shared vocabulary between prompt producers and the presenting UI.
//!
//! This crate defines the theme and position tables, the request payloads for
//! notices and dialogs, the presenter configuration, and a small channel
//! bridge so that code running off the UI thread can still raise prompts.
//!
//! The bridge is unidirectional:
//! - Producers hold a [`Prompter`] and send [`PromptRequest`]s.
//! - The UI owns the matching receiver and hands every request to its
//!   presenter.
//!
//! Prompts are fire-and-forget. Nothing flows back to the producer once the
//! request is accepted by the channel.

pub mod config;
pub mod icon;
pub mod position;
pub mod request;
pub mod theme;

use tokio::sync::mpsc::{self, Receiver, Sender};

pub use crate::{
    icon::Icon,
    position::Position,
    request::{DialogRequest, NoticeRequest},
    theme::Theme,
};

/// A prompt submitted through the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    Notice(NoticeRequest),
    Dialog(DialogRequest),
}

/// Raised when the presenting side of the bridge is gone.
#[derive(Debug, thiserror::Error)]
#[error("prompt receiver has been dropped")]
pub struct PromptError(pub PromptRequest);

/// Cheap, clonable handle for submitting prompts to the UI.
#[derive(Debug, Clone)]
pub struct Prompter {
    tx: Sender<PromptRequest>,
}

impl Prompter {
    /// Queues a notice, waiting for channel capacity if needed.
    pub async fn notice(&self, request: NoticeRequest) -> Result<(), PromptError> {
        self.send(PromptRequest::Notice(request)).await
    }

    /// Queues a dialog, waiting for channel capacity if needed.
    pub async fn dialog(&self, request: DialogRequest) -> Result<(), PromptError> {
        self.send(PromptRequest::Dialog(request)).await
    }

    /// Blocking variant of [`Prompter::notice`] for threads outside any
    /// async runtime.
    pub fn blocking_notice(&self, request: NoticeRequest) -> Result<(), PromptError> {
        self.blocking_send(PromptRequest::Notice(request))
    }

    /// Blocking variant of [`Prompter::dialog`].
    pub fn blocking_dialog(&self, request: DialogRequest) -> Result<(), PromptError> {
        self.blocking_send(PromptRequest::Dialog(request))
    }

    async fn send(&self, request: PromptRequest) -> Result<(), PromptError> {
        self.tx
            .send(request)
            .await
            .map_err(|error| PromptError(error.0))
    }

    fn blocking_send(&self, request: PromptRequest) -> Result<(), PromptError> {
        self.tx
            .blocking_send(request)
            .map_err(|error| PromptError(error.0))
    }
}

/// Paired sending handle and receiver for the prompt bridge.
pub struct PromptChannels {
    /// Handle given to prompt producers.
    pub prompter: Prompter,
    /// Receiver drained by the UI into its presenter.
    pub ui_rx: Receiver<PromptRequest>,
}

impl PromptChannels {
    /// Creates a new bridge with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (tx, ui_rx) = mpsc::channel(buffer);
        Self {
            prompter: Prompter { tx },
            ui_rx,
        }
    }
}

impl Default for PromptChannels {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn requests_arrive_in_order() {
        let PromptChannels {
            prompter,
            mut ui_rx,
        } = PromptChannels::new(4);

        prompter.notice(NoticeRequest::new("first")).await.unwrap();
        prompter.dialog(DialogRequest::new("second")).await.unwrap();

        assert_eq!(
            ui_rx.recv().await,
            Some(PromptRequest::Notice(NoticeRequest::new("first")))
        );
        assert_eq!(
            ui_rx.recv().await,
            Some(PromptRequest::Dialog(DialogRequest::new("second")))
        );
    }

    #[tokio::test]
    async fn send_fails_once_receiver_is_dropped() {
        let PromptChannels { prompter, ui_rx } = PromptChannels::new(1);
        drop(ui_rx);

        let error = prompter
            .notice(NoticeRequest::new("lost"))
            .await
            .unwrap_err();
        assert_eq!(error.0, PromptRequest::Notice(NoticeRequest::new("lost")));
    }

    #[test]
    fn blocking_send_works_off_runtime() {
        let PromptChannels {
            prompter,
            mut ui_rx,
        } = PromptChannels::new(1);

        std::thread::spawn(move || prompter.blocking_notice(NoticeRequest::new("hi")))
            .join()
            .unwrap()
            .unwrap();

        assert_eq!(
            ui_rx.try_recv().ok(),
            Some(PromptRequest::Notice(NoticeRequest::new("hi")))
        );
    }
}
