//! Obsidian Forge: wallet, token and contract tooling on top of the forge backend

#[cfg(not(target_arch = "wasm32"))]
use eframe::egui;

mod app;
mod executor;
mod toasts;
mod ui;
mod views;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Obsidian Forge");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Obsidian Forge")
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Obsidian Forge",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    tracing_wasm::set_as_global_default();
    tracing::info!("Starting Obsidian Forge");

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            tracing::error!("canvas element `the_canvas_id` not found");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(app::App::new(cc)?))),
            )
            .await;
        if let Err(err) = started {
            tracing::error!(error = ?err, "failed to start app");
        }
    });
}
