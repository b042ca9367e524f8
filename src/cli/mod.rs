// CLI module
//
// This module contains command-line interface functionality:
// - arguments: Command-line argument parsing into a single Invocation

pub mod arguments;

pub use arguments::{Action, Invocation, resolve};
