// src/app.rs

use crate::global_prefs::global_prefs;
use crate::state::{AppConfig, AuthMode, FormState, PanelToggle, PanelVisuals, UiState};
use tracing::debug;

/// Application glue: owns the state slices and drives per-tick work.
pub struct App {
    pub config: AppConfig,
    pub ui: UiState,
    pub panel: PanelToggle,
    pub view: PanelVisuals,
    pub forms: FormState,
}

impl App {
    pub fn new() -> App {
        let config = AppConfig::default();
        let panel = PanelToggle::new(AuthMode::Login, config.swap_delay_ticks());
        App {
            config,
            ui: UiState::default(),
            panel,
            view: PanelVisuals::default(),
            forms: FormState::default(),
        }
    }

    /// Slides the card to the other arrangement. Field contents and focus
    /// are left alone; only presentation changes.
    pub fn toggle_panels(&mut self) {
        self.panel.toggle(self.ui.tick_count, &mut self.view);
        debug!(mode = ?self.panel.mode(), "panels toggled");
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
        self.panel.on_tick(self.ui.tick_count, &mut self.view);
        if global_prefs().slide_animation_enabled {
            self.view.advance_slide(self.config.swap_delay_ticks());
        } else {
            self.view.snap();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
