use std::path::PathBuf;

use image::RgbaImage;
use seatpick_core::config::PickerConfig;
use seatpick_core::geometry::{GeometryStore, Size};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Parse a geometry file. `fallback_size` applies when it has no viewBox.
    LoadGeometry { path: PathBuf, fallback_size: Size },

    /// Decode the stadium bitmap.
    LoadImage { path: PathBuf },
}

/// Results sent from worker and dialog threads back to UI thread.
pub enum WorkerResult {
    GeometryChosen {
        path: PathBuf,
    },
    ImageChosen {
        path: PathBuf,
    },
    GeometryLoaded {
        path: PathBuf,
        store: GeometryStore,
    },
    ImageLoaded {
        path: PathBuf,
        image: RgbaImage,
    },
    ConfigImported {
        config: PickerConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
