//! Deskboard desktop entry point.

use deskboard_app::{AppConfig, DeskboardApp};
use deskboard_core::DashboardConfig;

fn main() -> eframe::Result<()> {
    // Loaded before the logger so the configured filter applies.
    let loaded = DashboardConfig::default_path()
        .as_deref()
        .map(DashboardConfig::load)
        .transpose();

    let filter = match &loaded {
        Ok(Some(config)) => config.log_filter.clone(),
        _ => DashboardConfig::default().log_filter,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = match loaded {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::warn!("{}; using default settings", e);
            DashboardConfig::default()
        }
    };
    log::info!("Starting Deskboard");

    let app_config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_config.title.clone())
            .with_inner_size([app_config.width as f32, app_config.height as f32])
            .with_min_inner_size([app_config.min_width as f32, app_config.min_height as f32]),
        ..Default::default()
    };

    let title = app_config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(DeskboardApp::new(cc, config, app_config)))),
    )
}
