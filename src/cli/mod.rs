//! Command-line and interactive front ends.

pub mod commands;
pub mod input;

pub use input::read_interactive;
