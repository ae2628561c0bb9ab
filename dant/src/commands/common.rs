//! Common types and utilities for dant commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use dan_lex::language::has_extension;
use dan_lex::LexError;
use dan_util::SourceFile;
use tracing::{debug, trace};

use crate::config::{Config, FilesConfig};
use crate::error::{DantError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// Machine readable JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Pick the format from the command-line flag, falling back to the
    /// configuration.
    pub fn resolve(flag: Option<&str>, config: &Config) -> Result<Self> {
        let name = flag.unwrap_or(&config.output.format);
        Self::parse(name).ok_or_else(|| {
            DantError::Validation(format!("{}: {}", error_messages::UNKNOWN_FORMAT, name))
        })
    }
}

// ============================================================================
// File Utilities
// ============================================================================

/// Read a document as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DantError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(DantError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        DantError::FileOperation(format!(
            "{}: {}: {}",
            error_messages::READ_FAILED,
            path.display(),
            e
        ))
    })
}

/// Expand the given paths into the list of documents to process.
///
/// Files named explicitly are always included. Directories contribute the
/// files whose extension is listed in `files.extensions`, descending into
/// subdirectories when `files.recursive` is set. Symlinked directories are
/// not followed. The result is sorted and free of duplicates.
pub fn collect_dan_files(paths: &[PathBuf], files: &FilesConfig) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Err(DantError::Validation(error_messages::NO_INPUT_FILES.to_string()));
    }

    let mut found = BTreeSet::new();
    for path in paths {
        if path.is_file() {
            found.insert(path.clone());
        } else if path.is_dir() {
            walk_dir(path, files, &mut found)?;
        } else {
            return Err(DantError::Validation(format!(
                "{}: {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
    }

    debug!(count = found.len(), "collected documents");
    Ok(found.into_iter().collect())
}

fn walk_dir(dir: &Path, files: &FilesConfig, found: &mut BTreeSet<PathBuf>) -> Result<()> {
    trace!(dir = %dir.display(), "scanning directory");
    let entries = std::fs::read_dir(dir).map_err(|e| {
        DantError::FileOperation(format!("{}: {}: {}", error_messages::READ_FAILED, dir.display(), e))
    })?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        // `file_type` does not follow symlinks, so a link back up the tree
        // cannot loop.
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            if files.recursive {
                walk_dir(&path, files, found)?;
            }
        } else if file_type.is_symlink() && path.is_dir() {
            trace!(link = %path.display(), "not following directory symlink");
        } else if has_extension(&path, &files.extensions) {
            found.insert(path);
        }
    }
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a lexical error against its document, rustc style.
pub fn render_lex_error(path: &Path, source: &str, error: &LexError, color: bool) -> String {
    let file = SourceFile::new(path.display().to_string(), source);
    error.to_diagnostic().render(&file, color)
}

/// Make a lexeme printable on one line.
pub fn escape_lexeme(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// No input paths were given.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Reading a file or directory failed.
    pub const READ_FAILED: &str = "Failed to read";

    /// Directories held no matching documents.
    pub const NO_DAN_FILES: &str = "No DAN files found";

    /// An unknown output format was requested.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Some documents failed the check.
    pub const FILES_FAILED: &str = "file(s) failed lexical checks";
}
