//! TUI components using tui-realm.

pub mod colors;
pub mod help;
pub mod text_field;

pub use colors::Colors;
pub use help::{FORM_FOOTER_ACTIONS, PREVIEW_FOOTER_ACTIONS, format_footer, render_help};
pub use text_field::{FIELD_ERROR, FIELD_HEIGHT, TextField, field_error_attr};
