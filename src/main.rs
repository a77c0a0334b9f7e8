use std::thread;

use herald_bridge::{NoticeRequest, PromptChannels, Prompter, Theme, config::Config};

/// Loads the presenter configuration, falling back to the defaults when the
/// file cannot be read or parsed.
fn load_config() -> Config {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    match runtime.block_on(herald_presenter::config::load_config()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using default configuration: {e}");
            Config::default()
        }
    }
}

/// Greets the user from outside the UI thread, through the bridge.
fn announce_startup(prompter: Prompter) {
    thread::spawn(move || {
        let request = NoticeRequest::new("Herald is ready").theme(Theme::Blue);
        if let Err(e) = prompter.blocking_notice(request) {
            log::warn!("Startup notice was not delivered: {e}");
        }
    });
}

fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let config = load_config();
    let channels = PromptChannels::default();
    announce_startup(channels.prompter.clone());
    herald_frontend::run(config, channels.ui_rx).expect("failed to run frontend");
}
