//! Parameter form editor.
//!
//! A fixed list of named parameters is edited as text fields, each checked
//! by a non-empty rule. Saving hands the current model, passthrough colors
//! included, to a sink. Invalid fields never block a save.

pub mod cli;
pub mod config;
pub mod container;
pub mod editor;
pub mod export;
pub mod form;
pub mod logging;
pub mod tui;
pub mod validation;
