//! Command-line front end (`binpack`).

pub mod args;
pub mod constants;
pub mod dispatch;

pub use args::{Cli, Command};
pub use dispatch::run;
