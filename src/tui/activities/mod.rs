//! Activity modules for the TUI.

pub mod form;
pub mod preview;

pub use form::FormActivity;
pub use form::Msg;
pub use preview::PreviewActivity;
