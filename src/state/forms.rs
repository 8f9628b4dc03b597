//! Input state for the two stacked forms.
//!
//! Each form keeps its own buffers; sliding the panels never touches them.
//! Focus is form-agnostic and resolves against whichever form is on screen.

use crate::state::panel::FormVisibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Username,
    Password,
    Submit,
    Switch,
}

const FOCUS_ORDER: [FormFocus; 4] = [
    FormFocus::Username,
    FormFocus::Password,
    FormFocus::Submit,
    FormFocus::Switch,
];

/// State management for form input.
#[derive(Debug, Default)]
pub struct FormState {
    pub login_username: String,
    pub login_password: String,
    pub registration_username: String,
    pub registration_password: String,
    pub focus: FormFocus,
}

impl FormState {
    pub fn focus_next(&mut self) {
        self.focus = FOCUS_ORDER[(self.focus_index() + 1) % FOCUS_ORDER.len()];
    }

    pub fn focus_prev(&mut self) {
        self.focus =
            FOCUS_ORDER[(self.focus_index() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()];
    }

    /// The buffer the focus points at, within the form that is on screen.
    /// `None` for the button positions.
    pub fn focused_field_mut(&mut self, visibility: FormVisibility) -> Option<&mut String> {
        match (self.focus, visibility.login) {
            (FormFocus::Username, true) => Some(&mut self.login_username),
            (FormFocus::Password, true) => Some(&mut self.login_password),
            (FormFocus::Username, false) => Some(&mut self.registration_username),
            (FormFocus::Password, false) => Some(&mut self.registration_password),
            _ => None,
        }
    }

    fn focus_index(&self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_SHOWING: FormVisibility = FormVisibility {
        login: true,
        registration: false,
    };
    const REGISTRATION_SHOWING: FormVisibility = FormVisibility {
        login: false,
        registration: true,
    };

    #[test]
    fn focus_cycles_forward_and_back() {
        let mut forms = FormState::default();
        assert_eq!(forms.focus, FormFocus::Username);

        forms.focus_next();
        assert_eq!(forms.focus, FormFocus::Password);
        forms.focus_next();
        forms.focus_next();
        assert_eq!(forms.focus, FormFocus::Switch);
        forms.focus_next();
        assert_eq!(forms.focus, FormFocus::Username);

        forms.focus_prev();
        assert_eq!(forms.focus, FormFocus::Switch);
    }

    #[test]
    fn focused_field_follows_the_visible_form() {
        let mut forms = FormState::default();
        forms
            .focused_field_mut(LOGIN_SHOWING)
            .expect("username field")
            .push('a');
        forms
            .focused_field_mut(REGISTRATION_SHOWING)
            .expect("username field")
            .push('b');

        assert_eq!(forms.login_username, "a");
        assert_eq!(forms.registration_username, "b");
    }

    #[test]
    fn buttons_have_no_backing_field() {
        let mut forms = FormState {
            focus: FormFocus::Submit,
            ..FormState::default()
        };
        assert!(forms.focused_field_mut(LOGIN_SHOWING).is_none());
        forms.focus = FormFocus::Switch;
        assert!(forms.focused_field_mut(REGISTRATION_SHOWING).is_none());
    }
}
