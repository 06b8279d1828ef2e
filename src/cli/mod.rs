//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod args;
pub mod generate;
pub mod init;
pub mod issue;
