//! Line-oriented command shell over a catalog store.
//!
//! One command per input line, one JSON document per output line.

pub mod command;
pub mod shell;

pub use command::Command;
pub use shell::{execute, run};
