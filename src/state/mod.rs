pub mod forms;
pub mod panel;
pub mod ui;

pub use forms::{FormFocus, FormState};
pub use panel::{
    AuthMode, FormVisibility, PanelLabels, PanelOffsets, PanelToggle, PanelView, PanelVisuals,
};
pub use ui::UiState;

/// Configuration constants for the screen
pub struct AppConfig {
    pub tick_interval_ms: u64,
    pub form_swap_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            form_swap_delay_ms: 300,
        }
    }
}

impl AppConfig {
    /// Swap delay expressed in ticks of the event loop.
    pub fn swap_delay_ticks(&self) -> u64 {
        (self.form_swap_delay_ms / self.tick_interval_ms).max(1)
    }
}
