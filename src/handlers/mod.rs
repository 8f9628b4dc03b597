pub mod auth;

use crate::app::App;
use crate::global_prefs::global_prefs_mut;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    // Quit confirmation dialog has priority over everything else
    if app.ui.show_quit_confirm {
        handle_quit_confirm_input(key, app);
        return;
    }

    if handle_global_shortcuts(key, app) {
        return;
    }

    auth::handle_auth_input(key, app);
}

/// Handle shortcuts that work regardless of focus
fn handle_global_shortcuts(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = true;
            app.ui.quit_confirm_selected = 1; // Default to "No"
            true
        }
        KeyCode::F(2) => {
            let mut prefs = global_prefs_mut();
            prefs.slide_animation_enabled = !prefs.slide_animation_enabled;
            prefs.save();
            info!(
                enabled = prefs.slide_animation_enabled,
                "slide animation preference toggled"
            );
            true
        }
        KeyCode::F(3) => {
            let mut prefs = global_prefs_mut();
            prefs.banner_glitch_enabled = !prefs.banner_glitch_enabled;
            prefs.save();
            info!(
                enabled = prefs.banner_glitch_enabled,
                "banner glitch preference toggled"
            );
            true
        }
        _ => false,
    }
}

fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Right => {
            app.ui.quit_confirm_selected = if app.ui.quit_confirm_selected == 0 { 1 } else { 0 };
        }
        KeyCode::Enter => {
            if app.ui.quit_confirm_selected == 0 {
                app.ui.quit();
            }
            app.ui.show_quit_confirm = false;
        }
        KeyCode::Esc => {
            app.ui.show_quit_confirm = false;
        }
        // A second Ctrl+C closes the dialog
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = false;
        }
        _ => {}
    }
}
