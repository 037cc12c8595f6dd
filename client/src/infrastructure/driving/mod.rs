pub mod cli;

pub use cli::{run, Cli, Command};
