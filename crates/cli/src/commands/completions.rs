//! # CLI Completions Command
//!
//! Shell completions generation for the Taskflow CLI.

use std::io::Write;

use clap::Command;
use clap_complete::Shell;
use error::Result;

/// Binary name completions are registered for
pub const BIN_NAME: &str = "taskflow";

/// Writes shell completions for `cmd` to `out`
pub fn completions<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) -> Result<()> {
    clap_complete::generate(shell, cmd, BIN_NAME, out);
    out.flush()?;
    Ok(())
}
