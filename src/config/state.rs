// src/config/state.rs
use super::options::{AppOptions, WidgetSize};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Beach text field; applied to options on Refresh.
    pub beach_input: String,
    pub size: WidgetSize,
    pub window_w: f32,
    pub window_h: f32,
}

impl GuiState {
    pub fn from_options(options: &AppOptions) -> Self {
        Self {
            beach_input: options.beach.clone(),
            size: options.size,
            window_w: 820.0,
            window_h: 520.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState::from_options(&options);
        Self { options, gui }
    }

    /// Mirror the GUI inputs back into options before a fetch.
    pub fn sync_gui_into_options(&mut self) {
        let beach = self.gui.beach_input.trim();
        if !beach.is_empty() {
            self.options.beach = s!(beach);
        }
        self.options.size = self.gui.size;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}
