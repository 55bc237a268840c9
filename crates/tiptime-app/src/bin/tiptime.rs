//! Tip Time desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Tip Time application.

use clap::Parser as _;
use tiptime_app::{
    TipTimeApp,
    config::{self, Cli},
};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.tiptime";

    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    if cli.list_locales {
        for line in config::locale_listing() {
            println!("{line}");
        }
        return Ok(());
    }

    let locale = cli.resolve_locale();
    log::info!(
        "Starting Tip Time, version={}",
        tiptime_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((400.0, 640.0))
            .with_min_inner_size((320.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Tip Time",
        options,
        Box::new(move |cc| Ok(Box::new(TipTimeApp::new(cc, locale)))),
    )
}
