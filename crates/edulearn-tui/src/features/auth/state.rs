use edulearn_core::auth::{AuthMode, CredentialField, Credentials};

/// A focusable control on the auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(CredentialField),
    Submit,
    ToggleMode,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(CredentialField::Email)
    }
}

#[derive(Debug, Default, Clone)]
pub struct AuthFormState {
    pub focus: FormFocus,
}

impl AuthFormState {
    /// Controls in tab order for `mode`.
    pub fn focus_order(mode: AuthMode) -> Vec<FormFocus> {
        Credentials::required_fields(mode)
            .iter()
            .copied()
            .map(FormFocus::Field)
            .chain([FormFocus::Submit, FormFocus::ToggleMode])
            .collect()
    }

    /// Focused input field, if the focus is on one.
    pub fn focused_field(&self) -> Option<CredentialField> {
        match self.focus {
            FormFocus::Field(field) => Some(field),
            FormFocus::Submit | FormFocus::ToggleMode => None,
        }
    }

    pub fn focus_first(&mut self, mode: AuthMode) {
        self.focus = FormFocus::Field(Credentials::required_fields(mode)[0]);
    }

    pub fn focus_next(&mut self, mode: AuthMode) {
        self.step(mode, 1);
    }

    pub fn focus_previous(&mut self, mode: AuthMode) {
        let len = Self::focus_order(mode).len();
        self.step(mode, len - 1);
    }

    fn step(&mut self, mode: AuthMode, offset: usize) {
        let order = Self::focus_order(mode);
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + offset) % order.len()];
    }
}
