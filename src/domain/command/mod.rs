//! Operator commands read from the input stream

mod parser;

pub use parser::{Command, COMMAND_HINT, COMMAND_SUMMARY};
