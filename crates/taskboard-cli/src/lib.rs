//! Library half of the `taskboard` binary, split out so commands and
//! rendering can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;
