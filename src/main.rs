mod config;
mod engine;
mod model;
mod ui;

use dotenv::dotenv;
use eframe::egui;
use log::error;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return Err(err);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Serenica - Mental Health Support Chatbot",
        options,
        Box::new(move |cc| Ok(Box::new(ui::app::ChatApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start UI: {err}"))
}
