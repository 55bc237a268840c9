use crate::action::Field;

// UiState holds ephemeral UI-only state that does not affect the tip.
#[derive(Debug, Default)]
pub struct UiState {
    focus_request: Option<Field>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_focus(&mut self, field: Field) {
        self.focus_request = Some(field);
    }

    /// Returns the pending focus request, if any. A request is handed out once.
    pub fn take_focus_request(&mut self) -> Option<Field> {
        self.focus_request.take()
    }
}
