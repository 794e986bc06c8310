mod ui;
mod viewport;

pub use ui::UIState;
pub use viewport::{ViewportState, ZoomKey};
