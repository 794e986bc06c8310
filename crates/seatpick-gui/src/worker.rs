use std::path::{Path, PathBuf};
use std::sync::mpsc;

use seatpick_core::geometry::{GeometryStore, Size};
use seatpick_core::io::image_io::load_bitmap;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the loader thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    initial_size: Size,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("seatpick-loader".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, initial_size);
        })?;

    Ok(cmd_tx)
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    initial_size: Size,
) {
    // Canvas size of the last geometry loaded, used to sanity-check bitmaps.
    let mut source_size = initial_size;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadGeometry {
                path,
                fallback_size,
            } => {
                if let Some(size) = handle_load_geometry(path, fallback_size, &tx, &ctx) {
                    source_size = size;
                }
            }
            WorkerCommand::LoadImage { path } => {
                handle_load_image(path, source_size, &tx, &ctx);
            }
        }
    }
}

fn handle_load_geometry(
    path: PathBuf,
    fallback_size: Size,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) -> Option<Size> {
    match GeometryStore::open(&path, fallback_size) {
        Ok(store) => {
            let size = store.source_size();
            send(tx, ctx, WorkerResult::GeometryLoaded { path, store });
            Some(size)
        }
        Err(e) => {
            send_error(tx, ctx, format!("Failed to load {}: {e}", display(&path)));
            None
        }
    }
}

fn handle_load_image(
    path: PathBuf,
    source_size: Size,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_bitmap(&path, source_size) {
        Ok(image) => send(tx, ctx, WorkerResult::ImageLoaded { path, image }),
        Err(e) => send_error(tx, ctx, format!("Failed to load {}: {e}", display(&path))),
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
