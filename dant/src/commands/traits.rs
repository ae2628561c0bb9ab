//! Command trait for the dant CLI.
//!
//! Every subcommand implements [`Command`] so `main` can dispatch them the
//! same way.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all dant commands implement.
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments and
    /// effective configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn run(&self) -> Result<()>;

    /// The subcommand name as typed on the command line.
    fn name() -> &'static str;
}
