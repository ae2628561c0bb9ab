//! Command modules for the dant CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod highlight;
pub mod language;
pub mod tokens;

use std::time::Instant;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use traits::Command;

/// Build and run a command, logging how long it took.
pub fn execute<C: Command>(args: C::Args, config: Config) -> Result<()> {
    let start_time = Instant::now();
    let result = C::new(args, config).run();
    debug!(
        command = C::name(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        success = result.is_ok(),
        "command finished"
    );
    result
}
