//! Command-line parsing for the HUD.

mod args;

pub use args::{CliArgs, VERSION};
