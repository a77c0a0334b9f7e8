use gpui::{AppContext, Application, WindowOptions};
use gpui_component::Root;
use herald_bridge::{PromptRequest, config::Config};
use tokio::sync::mpsc;

use crate::entities::presenter_entity::PresenterEntity;

pub mod components;
pub mod entities;
pub mod palette;
mod views;

/// Opens the main window and presents every prompt arriving on `rx` until the
/// application quits.
pub fn run(config: Config, mut rx: mpsc::Receiver<PromptRequest>) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let presenter = cx.new(|_| PresenterEntity::new(config));
        let data = entities::DataEntities { presenter };

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                let listener = data.presenter.clone();
                cx.spawn(async move |cx| {
                    while let Some(request) = rx.recv().await {
                        log::debug!("Got a prompt from the bridge: {request:?}");
                        if listener
                            .update(cx, |entity, cx| entity.present(request, cx))
                            .is_err()
                        {
                            break;
                        }
                    }
                })
                .detach();

                let view = cx.new(|cx| crate::views::HeraldUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
