//! Language command implementation.
//!
//! Prints the DAN language registration for editor adapters.

use std::io::Write;

use dan_lex::LanguageConfiguration;

use crate::commands::common::OutputFormat;
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the language command.
#[derive(Debug, Clone, Default)]
pub struct LanguageArgs {
    /// Output format override.
    pub format: Option<String>,
}

/// Language command handler.
pub struct LanguageCommand {
    args: LanguageArgs,
    config: Config,
}

impl Command for LanguageCommand {
    type Args = LanguageArgs;

    fn new(args: LanguageArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn run(&self) -> Result<()> {
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config)?;
        let language = LanguageConfiguration::dan();
        let rendered = match format {
            OutputFormat::Text => render_text(&language),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&language)?;
                json.push('\n');
                json
            },
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn name() -> &'static str {
        "language"
    }
}

fn pairs(pairs: &[[&str; 2]]) -> String {
    pairs
        .iter()
        .map(|[open, close]| format!("{}{}", open, close))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Aligned `field: value` listing.
pub fn render_text(language: &LanguageConfiguration) -> String {
    let rows = [
        ("id", language.id.to_string()),
        ("name", language.display_name.to_string()),
        ("aliases", language.aliases.join(", ")),
        ("extensions", language.extensions.join(", ")),
        ("line comments", language.line_comments.join(" ")),
        ("toggle comment", language.line_comment.to_string()),
        ("brackets", pairs(&language.brackets)),
        ("auto-closing", pairs(&language.auto_closing_pairs)),
        ("scope", language.scope_name.to_string()),
    ];

    rows.iter()
        .map(|(field, value)| format!("{:<15} {}\n", format!("{}:", field), value))
        .collect()
}

/// Execute the language command.
pub fn run_language(args: LanguageArgs, config: Config) -> Result<()> {
    crate::commands::execute::<LanguageCommand>(args, config)
}
