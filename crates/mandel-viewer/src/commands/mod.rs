//! Subcommand implementations.

pub mod render;
pub mod view;
