/// State management for UI-specific state
pub struct UiState {
    pub should_quit: bool,
    pub tick_count: u64,

    // Quit confirmation
    pub show_quit_confirm: bool,
    pub quit_confirm_selected: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            should_quit: false,
            tick_count: 0,
            show_quit_confirm: false,
            quit_confirm_selected: 0,
        }
    }
}

impl UiState {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }
}
