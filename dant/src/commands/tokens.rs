//! Tokens command implementation.
//!
//! Prints the token stream of one document, either as aligned text or as a
//! JSON array.

use std::io::Write;
use std::path::PathBuf;

use dan_lex::{tokenize, Token};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{escape_lexeme, read_source, render_lex_error, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{DantError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Document to lex.
    pub file: PathBuf,
    /// Output format override.
    pub format: Option<String>,
    /// Also print the trailing `Eof` token.
    pub include_eof: bool,
    /// Colorize diagnostics.
    pub color: bool,
}

/// One token as written in JSON output.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    /// Kind name.
    pub kind: &'static str,
    /// Exact lexeme.
    pub text: &'a str,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset.
    pub end: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.as_str(),
            text: &token.text,
            line: token.span.line,
            column: token.span.column,
            start: token.span.start,
            end: token.span.end,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn run(&self) -> Result<()> {
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config)?;
        let source = read_source(&self.args.file)?;

        let (tokens, error) = match tokenize(&source) {
            Ok(tokens) => (tokens, None),
            Err(e) => (e.tokens, Some(e.error)),
        };
        debug!(
            file = %self.args.file.display(),
            tokens = tokens.len(),
            "lexed document"
        );

        let visible: Vec<&Token> = tokens
            .iter()
            .filter(|t| self.args.include_eof || !t.is_eof())
            .collect();
        let rendered = match format {
            OutputFormat::Text => render_text(&visible),
            OutputFormat::Json => render_json(&visible)?,
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;

        match error {
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
        "tokens"
    }
}

/// One `line:column Kind text` row per token.
pub fn render_text(tokens: &[&Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let position = format!("{}:{}", token.span.line, token.span.column);
        out.push_str(&format!(
            "{:<8} {:<13} {}\n",
            position,
            token.kind.as_str(),
            escape_lexeme(&token.text)
        ));
    }
    out
}

/// A pretty JSON array of token records, newline terminated.
pub fn render_json(tokens: &[&Token]) -> Result<String> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(|t| TokenRecord::from(*t)).collect();
    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    Ok(json)
}

/// Execute the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    crate::commands::execute::<TokensCommand>(args, config)
}
