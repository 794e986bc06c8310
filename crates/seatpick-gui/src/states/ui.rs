use std::path::PathBuf;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub geometry_path: Option<PathBuf>,
    pub image_path: Option<PathBuf>,

    /// Loads sent to the worker and not yet answered.
    pub pending_loads: usize,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.pending_loads > 0
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn load_finished(&mut self) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
    }
}
