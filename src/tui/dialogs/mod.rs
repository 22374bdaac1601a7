//! Dialog overlays

pub mod help;
pub mod open_file;
