//! Session protocol handling.
//!
//! A line-oriented text protocol in the spirit of chess engine protocols:
//! the shell sends one command per line on stdin and reads responses from
//! stdout. This module holds the command parser and the response formatter.

pub mod format;
pub mod parser;

pub use format::{format_coord, format_layout, format_path, format_player, format_route};
pub use parser::{parse_command, Command};
