//! Check command implementation.
//!
//! Lexes every collected document on a rayon pool, renders diagnostics for
//! the ones that fail and prints a summary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use dan_lex::tokenize;
use dan_util::{Diagnostic, DiagnosticCode, Handler, SourceFile, Span};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{collect_dan_files, error_messages, read_source, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{DantError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files and directories to check.
    pub paths: Vec<PathBuf>,
    /// Worker count override.
    pub jobs: Option<usize>,
    /// Stop starting new files after the first failure.
    pub fail_fast: bool,
    /// Output format override.
    pub format: Option<String>,
    /// Colorize diagnostics.
    pub color: bool,
}

/// Outcome for a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Lexed without errors.
    Ok,
    /// Unreadable or lexically invalid.
    Failed,
    /// Not checked because an earlier file failed under `--fail-fast`.
    Skipped,
}

/// Result of checking one document.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The document.
    pub path: PathBuf,
    /// What happened.
    pub status: FileStatus,
    /// Tokens produced, including `Eof` on success.
    pub tokens: usize,
    /// Diagnostics raised for this document.
    pub diagnostics: Vec<Diagnostic>,
    /// The diagnostics rendered against the document text.
    pub rendered: String,
}

impl FileReport {
    fn skipped(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Skipped,
            tokens: 0,
            diagnostics: Vec::new(),
            rendered: String::new(),
        }
    }
}

/// Totals over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Documents considered.
    pub checked: usize,
    /// Documents without errors.
    pub ok: usize,
    /// Documents with errors.
    pub failed: usize,
    /// Documents skipped by fail-fast.
    pub skipped: usize,
}

impl CheckSummary {
    /// Tally a list of reports.
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self {
            checked: reports.len(),
            ..Self::default()
        };
        for report in reports {
            match report.status {
                FileStatus::Ok => summary.ok += 1,
                FileStatus::Failed => summary.failed += 1,
                FileStatus::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    /// One-line human summary.
    pub fn line(&self) -> String {
        let mut line = format!(
            "checked {} file(s): {} ok, {} failed",
            self.checked, self.ok, self.failed
        );
        if self.skipped > 0 {
            line.push_str(&format!(", {} skipped", self.skipped));
        }
        line
    }
}

#[derive(Serialize)]
struct DiagnosticRecord {
    code: Option<String>,
    message: String,
    line: u32,
    column: u32,
}

#[derive(Serialize)]
struct ReportRecord {
    path: String,
    status: FileStatus,
    tokens: usize,
    diagnostics: Vec<DiagnosticRecord>,
}

#[derive(Serialize)]
struct CheckOutput {
    files: Vec<ReportRecord>,
    summary: CheckSummary,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Number of worker threads to use.
    pub fn jobs(&self) -> usize {
        self.args.jobs.unwrap_or(self.config.check.jobs).max(1)
    }

    /// Whether the first failure stops the run.
    pub fn fail_fast(&self) -> bool {
        self.args.fail_fast || self.config.check.fail_fast
    }

    /// Check every file, preserving input order in the reports.
    pub fn check_files(&self, files: &[PathBuf]) -> Result<Vec<FileReport>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs())
            .build()
            .map_err(|e| DantError::Config(format!("Failed to build thread pool: {}", e)))?;

        let fail_fast = self.fail_fast();
        let stop = AtomicBool::new(false);
        let color = self.args.color;

        Ok(pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    if fail_fast && stop.load(Ordering::Relaxed) {
                        return FileReport::skipped(path);
                    }
                    let report = check_file(path, color);
                    if report.status == FileStatus::Failed {
                        stop.store(true, Ordering::Relaxed);
                    }
                    report
                })
                .collect()
        }))
    }

    fn print_text(&self, reports: &[FileReport], summary: &CheckSummary) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        for report in reports.iter().filter(|r| r.status == FileStatus::Failed) {
            writeln!(stdout, "{}: failed", report.path.display())?;
        }
        writeln!(stdout, "{}", summary.line())?;
        Ok(())
    }

    fn print_json(&self, reports: &[FileReport], summary: &CheckSummary) -> Result<()> {
        let output = CheckOutput {
            files: reports
                .iter()
                .map(|r| ReportRecord {
                    path: r.path.display().to_string(),
                    status: r.status,
                    tokens: r.tokens,
                    diagnostics: r
                        .diagnostics
                        .iter()
                        .map(|d| DiagnosticRecord {
                            code: d.code.map(|c| c.as_str()),
                            message: d.message.clone(),
                            line: d.span.line,
                            column: d.span.column,
                        })
                        .collect(),
                })
                .collect(),
            summary: *summary,
        };
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &output)?;
        writeln!(stdout)?;
        Ok(())
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config)?;
        let files = collect_dan_files(&self.args.paths, &self.config.files)?;
        if files.is_empty() {
            return Err(DantError::Validation(error_messages::NO_DAN_FILES.to_string()));
        }

        info!(files = files.len(), jobs = self.jobs(), "checking documents");
        let reports = self.check_files(&files)?;

        {
            let mut stderr = std::io::stderr().lock();
            for report in &reports {
                stderr.write_all(report.rendered.as_bytes())?;
            }
        }

        let summary = CheckSummary::from_reports(&reports);
        match format {
            OutputFormat::Text => self.print_text(&reports, &summary)?,
            OutputFormat::Json => self.print_json(&reports, &summary)?,
        }
        debug!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            ok = summary.ok,
            failed = summary.failed,
            "check complete"
        );

        if summary.failed > 0 {
            return Err(DantError::Validation(format!(
                "{} {}",
                summary.failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(())
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Lex one document and collect its diagnostics.
pub fn check_file(path: &Path, color: bool) -> FileReport {
    let handler = Handler::new();
    let name = path.display().to_string();

    let (tokens, file) = match read_source(path) {
        Ok(source) => {
            let tokens = match tokenize(&source) {
                Ok(tokens) => tokens.len(),
                Err(e) => {
                    handler.emit_diagnostic(e.error.to_diagnostic());
                    e.tokens.len()
                },
            };
            (tokens, SourceFile::new(name, source))
        },
        Err(e) => {
            handler.emit_diagnostic(
                Diagnostic::error(e.to_string(), Span::DUMMY)
                    .with_code(DiagnosticCode::E_IO_READ),
            );
            (0, SourceFile::new(name, ""))
        },
    };

    let status = if handler.has_errors() {
        FileStatus::Failed
    } else {
        FileStatus::Ok
    };
    debug!(file = %path.display(), tokens, ?status, "checked document");

    let diagnostics = handler.take();
    let rendered = diagnostics.iter().map(|d| d.render(&file, color)).collect();
    FileReport {
        path: path.to_path_buf(),
        status,
        tokens,
        diagnostics,
        rendered,
    }
}

/// Execute the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    crate::commands::execute::<CheckCommand>(args, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_check_file_ok() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ok.dan", "server {\n  port: 8080\n}\n");
        let report = check_file(&path, false);
        assert_eq!(report.status, FileStatus::Ok);
        assert!(report.diagnostics.is_empty());
        assert!(report.rendered.is_empty());
        assert!(report.tokens > 0);
    }

    #[test]
    fn test_check_file_lex_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.dan", "list: [1, 2}\n");
        let report = check_file(&path, false);
        assert_eq!(report.status, FileStatus::Failed);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(
            report.diagnostics[0].code,
            Some(DiagnosticCode::E_LEXER_UNBALANCED_DELIMITER)
        );
        assert!(report.rendered.contains("error[E1005]"));
        assert!(report.rendered.contains("bad.dan:1:12"));
    }

    #[test]
    fn test_check_file_unreadable() {
        let report = check_file(Path::new("/nonexistent/gone.dan"), false);
        assert_eq!(report.status, FileStatus::Failed);
        assert_eq!(report.diagnostics[0].code, Some(DiagnosticCode::E_IO_READ));
        assert!(report.rendered.starts_with("error[E9001]"));
    }

    #[test]
    fn test_check_files_preserves_order() {
        let dir = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..8)
            .map(|i| write(&dir, &format!("f{}.dan", i), &format!("n: {}", i)))
            .collect();
        let args = CheckArgs {
            jobs: Some(3),
            ..CheckArgs::default()
        };
        let command = CheckCommand::new(args, Config::default());
        let reports = command.check_files(&files).unwrap();
        let paths: Vec<PathBuf> = reports.iter().map(|r| r.path.clone()).collect();
        assert_eq!(paths, files);
        assert!(reports.iter().all(|r| r.status == FileStatus::Ok));
    }

    #[test]
    fn test_fail_fast_single_worker_skips_rest() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            write(&dir, "a.dan", "a: \"open"),
            write(&dir, "b.dan", "b: 1"),
            write(&dir, "c.dan", "c: 2"),
        ];
        let args = CheckArgs {
            jobs: Some(1),
            fail_fast: true,
            ..CheckArgs::default()
        };
        let command = CheckCommand::new(args, Config::default());
        let reports = command.check_files(&files).unwrap();
        let summary = CheckSummary::from_reports(&reports);
        assert_eq!(reports[0].status, FileStatus::Failed);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.ok + summary.skipped, 2);
    }

    #[test]
    fn test_summary_line() {
        let summary = CheckSummary {
            checked: 3,
            ok: 2,
            failed: 1,
            skipped: 0,
        };
        assert_eq!(summary.line(), "checked 3 file(s): 2 ok, 1 failed");

        let summary = CheckSummary {
            checked: 3,
            ok: 0,
            failed: 1,
            skipped: 2,
        };
        assert_eq!(summary.line(), "checked 3 file(s): 0 ok, 1 failed, 2 skipped");
    }

    #[test]
    fn test_run_fails_when_any_file_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "good.dan", "x: 1");
        write(&dir, "bad.dan", "y: @");
        let args = CheckArgs {
            paths: vec![dir.path().to_path_buf()],
            jobs: Some(2),
            ..CheckArgs::default()
        };
        let err = CheckCommand::new(args, Config::default()).run().unwrap_err();
        assert!(err.to_string().contains("1 file(s) failed"));
    }

    #[test]
    fn test_run_empty_directory() {
        let dir = TempDir::new().unwrap();
        let args = CheckArgs {
            paths: vec![dir.path().to_path_buf()],
            ..CheckArgs::default()
        };
        let err = CheckCommand::new(args, Config::default()).run().unwrap_err();
        assert!(err.to_string().contains("No DAN files found"));
    }

    #[test]
    fn test_jobs_override() {
        let mut config = Config::default();
        config.check.jobs = 6;
        let command = CheckCommand::new(CheckArgs::default(), config.clone());
        assert_eq!(command.jobs(), 6);

        let args = CheckArgs {
            jobs: Some(2),
            ..CheckArgs::default()
        };
        assert_eq!(CheckCommand::new(args, config).jobs(), 2);
    }
}
