//! Field validation: the empty-field rule and the per-field state machine.

use std::fmt;

use crate::editor::Editor;

/// Message shown under a field whose text is empty or whitespace-only.
pub const EMPTY_FIELD_MESSAGE: &str = "field cannot be empty";

/// Reason a field is currently invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Trimmed text is empty.
    Empty,
}

impl FieldError {
    /// Human-readable message for inline display.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => EMPTY_FIELD_MESSAGE,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Check a field's text against the only rule there is.
pub fn validate_text(text: &str) -> Result<(), FieldError> {
    if text.trim().is_empty() {
        Err(FieldError::Empty)
    } else {
        Ok(())
    }
}

/// Validation state of a single field.
///
/// Fields start `Valid` whatever their initial text; only input moves them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Valid,
    Invalid(FieldError),
}

impl FieldState {
    /// State after the field's text becomes `text`. Depends only on the latest input.
    pub fn after_input(text: &str) -> Self {
        match validate_text(text) {
            Ok(()) => Self::Valid,
            Err(e) => Self::Invalid(e),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

/// One warning line per invalid field, in parameter order.
pub fn validate_with_warnings(editor: &Editor) -> Vec<String> {
    editor
        .errors()
        .map(|(param, error)| format!("{} ({}): {}", param.name, param.id, error))
        .collect()
}
