mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // seatpick-gui [geometry.json] [image.png]
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let geometry = args.next();
    let image = args.next();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 520.0])
            .with_title("Seatpick"),
        ..Default::default()
    };

    eframe::run_native(
        "Seatpick",
        options,
        Box::new(move |cc| Ok(Box::new(app::SeatpickApp::new(&cc.egui_ctx, geometry, image)))),
    )
}
