//! Modern Reader - egui-based shell
//!
//! Takes no arguments. Set `RUST_LOG` to change log verbosity.

mod canvas;
mod dialogs;
mod sidebar;
mod shell;
mod toolbar;

use eframe::egui;
use shell::ReaderApp;
use viewer_core::ShellConfig;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShellConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_position(config.position)
            .with_min_inner_size(config.min_inner_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    let engine = pdf_engine::default_engine();
    log::info!("using {} page renderer", engine.name());

    let app_name = config.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(ReaderApp::new(cc, config, engine)))),
    )
}
