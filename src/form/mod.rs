// src/form/mod.rs
//
// The GUI-form-generation side: wraps a program entry point, renders one
// widget per registered argument, and feeds the collected values back
// through the same parser the CLI path uses.
use std::error::Error;

pub mod app;
pub mod components;
pub mod model;

pub use app::show;

use crate::router::{EntryPoint, Router};

#[derive(thiserror::Error, Debug)]
pub enum FormError {
    #[error("form closed without running")]
    Cancelled,
}

/// Wrap the program entry point under GUI mode. The window itself appears
/// when the entry point asks for matches (Router::parse_args); control
/// returns here only after the event loop has terminated and the body ran.
pub fn launch(entry: EntryPoint, router: &mut Router) -> Result<(), Box<dyn Error>> {
    entry(router)
}
