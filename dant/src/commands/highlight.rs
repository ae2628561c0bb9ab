//! Highlight command implementation.
//!
//! Prints a document with ANSI colors chosen by highlight style.

use std::io::Write;
use std::path::PathBuf;

use dan_lex::{highlight, Highlights};
use tracing::debug;

use crate::commands::common::{read_source, render_lex_error};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{DantError, Result};

const RESET: &str = "\x1b[0m";
const ERROR_UNDERLINE: &str = "\x1b[4;31m";

/// Arguments for the highlight command.
#[derive(Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Document to print.
    pub file: PathBuf,
    /// Emit ANSI escapes.
    pub color: bool,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;

    fn new(args: HighlightArgs, _config: Config) -> Self {
        Self { args }
    }

    fn run(&self) -> Result<()> {
        let source = read_source(&self.args.file)?;
        let highlights = highlight(&source);
        debug!(
            file = %self.args.file.display(),
            ranges = highlights.ranges.len(),
            complete = highlights.is_complete(),
            "highlighted document"
        );

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(render_highlighted(&source, &highlights, self.args.color).as_bytes())?;
        stdout.flush()?;

        match highlights.error {
            None => Ok(()),
            Some(error) => {
                eprint!(
                    "{}",
                    render_lex_error(&self.args.file, &source, &error, self.args.color)
                );
                Err(DantError::Lex {
                    path: self.args.file.display().to_string(),
                    source: error,
                })
            },
        }
    }

    fn name() -> &'static str {
        "highlight"
    }
}

/// Wrap each highlighted range of `source` in its ANSI style.
///
/// Text between ranges is copied as is. The error region, if any, is
/// underlined in red. With `color` off the source comes back unchanged.
pub fn render_highlighted(source: &str, highlights: &Highlights, color: bool) -> String {
    if !color {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len() * 2);
    let mut pos = 0;

    for range in &highlights.ranges {
        out.push_str(&source[pos..range.start]);
        let text = &source[range.start..range.end];
        match range.style.ansi_code() {
            Some(code) => out.push_str(&format!("\x1b[{}m{}{}", code, text, RESET)),
            None => out.push_str(text),
        }
        pos = range.end;
    }

    if let Some((start, end)) = highlights.error_range() {
        let start = start.max(pos);
        let end = end.max(start);
        out.push_str(&source[pos..start]);
        if end > start {
            out.push_str(&format!("{}{}{}", ERROR_UNDERLINE, &source[start..end], RESET));
        }
        pos = end;
    }

    out.push_str(&source[pos..]);
    out
}

/// Execute the highlight command.
pub fn run_highlight(args: HighlightArgs, config: Config) -> Result<()> {
    crate::commands::execute::<HighlightCommand>(args, config)
}
