use crate::app::App;
use crate::state::FormFocus;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

/// Handle keyboard input on the login/registration screen
pub fn handle_auth_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(c) => {
            let visibility = app.view.visibility;
            if let Some(field) = app.forms.focused_field_mut(visibility) {
                field.push(c);
            }
        }
        KeyCode::Backspace => {
            let visibility = app.view.visibility;
            if let Some(field) = app.forms.focused_field_mut(visibility) {
                field.pop();
            }
        }
        KeyCode::Tab => app.forms.focus_next(),
        KeyCode::BackTab => app.forms.focus_prev(),
        KeyCode::Enter => match app.forms.focus {
            FormFocus::Username => app.forms.focus = FormFocus::Password,
            FormFocus::Password => app.forms.focus = FormFocus::Submit,
            FormFocus::Submit => {
                // Submission belongs to the embedding application.
                debug!(mode = ?app.panel.mode(), "submit activated");
            }
            FormFocus::Switch => app.toggle_panels(),
        },
        KeyCode::Esc => app.ui.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AuthMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn typing_lands_in_the_visible_form() {
        let mut app = App::new();
        handle_auth_input(key(KeyCode::Char('m')), &mut app);
        handle_auth_input(key(KeyCode::Char('e')), &mut app);
        assert_eq!(app.forms.login_username, "me");
        assert_eq!(app.forms.registration_username, "");

        handle_auth_input(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.forms.login_username, "m");
    }

    #[test]
    fn enter_walks_fields_then_submit() {
        let mut app = App::new();
        handle_auth_input(key(KeyCode::Enter), &mut app);
        assert_eq!(app.forms.focus, FormFocus::Password);
        handle_auth_input(key(KeyCode::Enter), &mut app);
        assert_eq!(app.forms.focus, FormFocus::Submit);
        // Submit is a presentation no-op; focus and mode stay put.
        handle_auth_input(key(KeyCode::Enter), &mut app);
        assert_eq!(app.forms.focus, FormFocus::Submit);
        assert_eq!(app.panel.mode(), AuthMode::Login);
    }

    #[test]
    fn enter_on_the_switch_button_toggles_the_panels() {
        let mut app = App::new();
        app.forms.focus = FormFocus::Switch;
        app.forms.login_username.push_str("kept");

        handle_auth_input(key(KeyCode::Enter), &mut app);
        assert_eq!(app.panel.mode(), AuthMode::Registration);
        // The toggle never touches field contents or focus.
        assert_eq!(app.forms.login_username, "kept");
        assert_eq!(app.forms.focus, FormFocus::Switch);

        // Until the deferred swap runs, typing still edits the login form.
        app.forms.focus = FormFocus::Username;
        handle_auth_input(key(KeyCode::Char('x')), &mut app);
        assert_eq!(app.forms.login_username, "keptx");
    }

    #[test]
    fn escape_quits() {
        let mut app = App::new();
        handle_auth_input(key(KeyCode::Esc), &mut app);
        assert!(app.ui.should_quit);
    }
}
