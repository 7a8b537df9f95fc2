use timeline_dnr::cli::{Args, Parser};
use timeline_dnr::config::{self, LaunchArg};
use timeline_dnr::{app, data, utils::logger};

fn main() -> Result<(), eframe::Error> {
    let arg: LaunchArg = Args::parse().into();
    let logger = logger::init(arg.log_filter());
    let layout = match arg.layout_path() {
        Some(path) => config::load_layout(&path).unwrap_or_else(|e| {
            log::error!("{e}, falling back to the default layout");
            data::Layout::default()
        }),
        None => data::Layout::default(),
    };
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1200., 800.)),
        ..Default::default()
    };
    eframe::run_native(
        "timeline_dnr",
        native_options,
        Box::new(move |cc| Box::new(app::Model::new(cc, layout, logger))),
    )
}
