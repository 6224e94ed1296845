//! TUI Widget components
//!
//! Modular widgets for the form display.

pub mod footer;
pub mod form;
pub mod header;
pub mod help;
pub mod result;

pub use footer::{render_disclaimer, render_footer};
pub use form::render_form;
pub use header::render_header;
pub use help::render_help;
pub use result::render_result;
