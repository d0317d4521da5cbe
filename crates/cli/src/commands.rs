//! Command implementations
//!
//! Each command writes to a caller-supplied writer so it can be driven from
//! tests as well as from the binary.

use crate::config::{CliConfig, OutputFormat};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use dialogspec_core::{DialogData, DialogError, Enumerated, Named};
use dialogspec_schema::serialization::dialog_to_string;
use dialogspec_schema::{
    Body, Dialog, ErrorMode, Linter, ValidationOptions, is_spec_file, load_dialog, schema_fields,
};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

// ============================================================================
// Reports
// ============================================================================

/// One problem found in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    /// Dotted path of the offending field, absent for file-level failures
    pub field: Option<String>,
    pub reason: String,
    pub message: String,
}

/// Outcome of validating one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub valid: bool,
    pub errors: Vec<ReportedError>,
    pub warnings: Vec<String>,
}

impl FileReport {
    /// Whether the file counts as passing; strict mode also rejects warnings
    pub fn passed(&self, strict: bool) -> bool {
        self.valid && !(strict && !self.warnings.is_empty())
    }
}

#[derive(Debug, Serialize)]
struct ValidationSummary<'a> {
    files: &'a [FileReport],
    passed: usize,
    failed: usize,
}

fn validation_options(config: &CliConfig) -> ValidationOptions {
    ValidationOptions {
        error_mode: if config.fail_fast {
            ErrorMode::FailFast
        } else {
            ErrorMode::Accumulate
        },
    }
}

// ============================================================================
// File Collection
// ============================================================================

/// Expand the given paths into the list of files to validate
///
/// Directories are walked recursively for `.json` files; files are taken as
/// given, whatever their extension.
pub fn collect_spec_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_spec_file(entry.path()) => {
                    files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => warn!(root = %path.display(), "Skipping unreadable entry: {}", e),
            }
        }
    }

    debug!(count = files.len(), "Collected spec files");
    files
}

// ============================================================================
// validate
// ============================================================================

/// Validate and lint a single file
pub fn validate_file(path: &Path, options: &ValidationOptions, linter: &Linter) -> FileReport {
    match load_dialog::<DialogData>(path, options) {
        Ok(dialog) => {
            let lint = linter.lint(&dialog);
            FileReport {
                path: path.to_path_buf(),
                valid: true,
                errors: Vec::new(),
                warnings: lint.warnings.iter().map(ToString::to_string).collect(),
            }
        }
        Err(DialogError::Schema(schema)) => FileReport {
            path: path.to_path_buf(),
            valid: false,
            errors: schema
                .errors
                .iter()
                .map(|error| {
                    let field = error.full_path();
                    ReportedError {
                        field: (!field.is_root()).then(|| field.to_string()),
                        reason: error.reason(),
                        message: error.root_cause().kind.to_string(),
                    }
                })
                .collect(),
            warnings: Vec::new(),
        },
        Err(other) => FileReport {
            path: path.to_path_buf(),
            valid: false,
            errors: vec![ReportedError {
                field: None,
                reason: "unreadable".to_string(),
                message: other.to_string(),
            }],
            warnings: Vec::new(),
        },
    }
}

/// `dialogspec validate`: returns whether every file passed
pub fn validate_command(
    paths: &[PathBuf],
    config: &CliConfig,
    out: &mut dyn Write,
) -> Result<bool> {
    let files = collect_spec_files(paths);
    if files.is_empty() {
        bail!("No spec files found");
    }

    let options = validation_options(config);
    let linter = Linter::with_default_rules();
    let reports: Vec<FileReport> = files
        .iter()
        .map(|path| validate_file(path, &options, &linter))
        .collect();

    let passed = reports.iter().filter(|r| r.passed(config.strict)).count();
    let failed = reports.len() - passed;
    info!(files = reports.len(), passed, failed, "Validation finished");

    match config.format {
        OutputFormat::Text => write_text_reports(&reports, config.strict, passed, failed, out)?,
        OutputFormat::Json => {
            let summary = ValidationSummary {
                files: &reports,
                passed,
                failed,
            };
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }

    Ok(failed == 0)
}

fn write_text_reports(
    reports: &[FileReport],
    strict: bool,
    passed: usize,
    failed: usize,
    out: &mut dyn Write,
) -> Result<()> {
    for report in reports {
        let status = if !report.passed(strict) {
            "FAIL".red().bold()
        } else if report.warnings.is_empty() {
            "PASS".green().bold()
        } else {
            "WARN".yellow().bold()
        };
        writeln!(out, "{} {}", status, report.path.display())?;

        for error in &report.errors {
            match &error.field {
                Some(field) => writeln!(out, "    {}: {}", field.cyan(), error.message)?,
                None => writeln!(out, "    {}", error.message)?,
            }
        }
        for warning in &report.warnings {
            writeln!(out, "    {}", warning.yellow())?;
        }
    }

    writeln!(
        out,
        "\n{} file(s): {} passed, {} failed",
        reports.len(),
        passed.to_string().green(),
        if failed > 0 {
            failed.to_string().red()
        } else {
            failed.to_string().normal()
        }
    )?;
    Ok(())
}

// ============================================================================
// info
// ============================================================================

/// `dialogspec info`: print a summary of one valid dialog
pub fn info_command(path: &Path, config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let dialog: Dialog = load_dialog(path, &validation_options(config))
        .with_context(|| format!("Invalid dialog spec '{}'", path.display()))?;

    if config.format == OutputFormat::Json {
        writeln!(out, "{}", dialog_to_string(&dialog)?)?;
        return Ok(());
    }

    writeln!(out, "{}  {}", "Title:".bold(), dialog.title)?;
    writeln!(out, "{}   {}", "Size:".bold(), dialog.size)?;

    match &dialog.body {
        Body::Panel(panel) => {
            writeln!(out, "{}   panel ({} components)", "Body:".bold(), panel.items.len())?;
        }
        Body::TabPanel(panel) => {
            writeln!(out, "{}   tabpanel ({} tabs)", "Body:".bold(), panel.tabs.len())?;
            for tab in &panel.tabs {
                writeln!(
                    out,
                    "    {:<16} {} ({} components)",
                    tab.name(),
                    tab.title,
                    tab.items.len()
                )?;
            }
        }
    }

    writeln!(out, "{}", "Buttons:".bold())?;
    for button in &dialog.buttons {
        let mut flags = Vec::new();
        if button.primary {
            flags.push("primary");
        }
        if button.disabled {
            flags.push("disabled");
        }
        writeln!(
            out,
            "    {:<16} {:<7} {:<6} {}{}",
            button.name(),
            button.button_type().as_str(),
            button.align.as_str(),
            button.text,
            if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            }
        )?;
    }

    if !dialog.initial_data.is_empty() {
        let keys: Vec<&str> = dialog.initial_data.keys().map(String::as_str).collect();
        writeln!(out, "{} {}", "Initial data:".bold(), keys.join(", "))?;
    }

    for warning in Linter::with_default_rules().lint(&dialog).warnings {
        writeln!(out, "{}", warning.to_string().yellow())?;
    }
    Ok(())
}

// ============================================================================
// schema
// ============================================================================

/// `dialogspec schema`: print every accepted field
pub fn schema_command(out: &mut dyn Write) -> Result<()> {
    let mut current = "";
    for field in schema_fields() {
        if field.schema != current {
            if !current.is_empty() {
                writeln!(out)?;
            }
            writeln!(out, "{}", field.schema.bold())?;
            current = field.schema;
        }
        writeln!(
            out,
            "    {:<12} {:<20} {}",
            field.key,
            field.presence.to_string(),
            field.value_type
        )?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn plain() {
        colored::control::set_override(false);
    }

    fn write_json(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn valid_spec() -> serde_json::Value {
        json!({
            "title": "Insert link",
            "body": {"type": "tabpanel", "tabs": [
                {"name": "general", "title": "General", "items": [{"type": "input", "name": "url"}]}
            ]},
            "buttons": [
                {"type": "cancel", "name": "cancel", "text": "Cancel"},
                {"type": "submit", "name": "save", "text": "Save", "primary": true}
            ],
            "initialData": {"url": ""}
        })
    }

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_collect_walks_directories() {
        let dir = TempDir::new().unwrap();
        write_json(dir.path(), "b.dialog.json", valid_spec());
        write_json(dir.path(), "nested/a.json", valid_spec());
        std::fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let files = collect_spec_files(&[dir.path().to_path_buf()]);
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["b.dialog.json", "a.json"]);
    }

    #[test]
    fn test_validate_file_reports_paths() {
        let dir = TempDir::new().unwrap();
        let path = write_json(
            dir.path(),
            "bad.json",
            json!({"title": "T", "body": {"type": "grid"}, "buttons": [{"type": "submit"}]}),
        );

        let report = validate_file(&path, &ValidationOptions::default(), &Linter::new());
        assert!(!report.valid);

        let fields: Vec<Option<&str>> = report.errors.iter().map(|e| e.field.as_deref()).collect();
        assert_eq!(fields, vec![Some("body.type"), Some("buttons[0].text")]);
        assert_eq!(report.errors[1].reason, "nested:missing");
    }

    #[test]
    fn test_validate_missing_file() {
        let report = validate_file(
            Path::new("/nonexistent/dialog.json"),
            &ValidationOptions::default(),
            &Linter::new(),
        );
        assert!(!report.valid);
        assert_eq!(report.errors[0].field, None);
        assert_eq!(report.errors[0].reason, "unreadable");
    }

    #[test]
    fn test_validate_command_text() {
        plain();
        let dir = TempDir::new().unwrap();
        write_json(dir.path(), "good.json", valid_spec());
        write_json(dir.path(), "bad.json", json!({"title": "T"}));

        let mut buffer = Vec::new();
        let ok =
            validate_command(&[dir.path().to_path_buf()], &CliConfig::default(), &mut buffer)
                .unwrap();
        let text = output(buffer);

        assert!(!ok);
        assert!(text.contains("FAIL"), "{}", text);
        assert!(text.contains("PASS"), "{}", text);
        assert!(text.contains("    body: missing required field"), "{}", text);
        assert!(text.contains("2 file(s): 1 passed, 1 failed"), "{}", text);
    }

    #[test]
    fn test_validate_command_strict() {
        plain();
        let dir = TempDir::new().unwrap();
        let path = write_json(
            dir.path(),
            "empty.json",
            json!({"title": "T", "body": {"type": "panel", "items": []}, "buttons": []}),
        );

        let mut buffer = Vec::new();
        assert!(validate_command(&[path.clone()], &CliConfig::default(), &mut buffer).unwrap());
        assert!(output(buffer).contains("WARN"));

        let strict = CliConfig::default().with_overrides(true, false, None);
        let mut buffer = Vec::new();
        assert!(!validate_command(&[path], &strict, &mut buffer).unwrap());
    }

    #[test]
    fn test_validate_command_json() {
        let dir = TempDir::new().unwrap();
        let path = write_json(dir.path(), "bad.json", json!({}));
        let config = CliConfig::default().with_overrides(false, true, Some(OutputFormat::Json));

        let mut buffer = Vec::new();
        assert!(!validate_command(&[path], &config, &mut buffer).unwrap());

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["failed"], json!(1));
        assert_eq!(value["files"][0]["errors"].as_array().unwrap().len(), 1);
        assert_eq!(value["files"][0]["errors"][0]["reason"], json!("missing"));
    }

    #[test]
    fn test_validate_command_no_files() {
        let dir = TempDir::new().unwrap();
        let mut buffer = Vec::new();
        let err = validate_command(&[dir.path().to_path_buf()], &CliConfig::default(), &mut buffer)
            .unwrap_err();
        assert_eq!(err.to_string(), "No spec files found");
    }

    #[test]
    fn test_info_command() {
        plain();
        let dir = TempDir::new().unwrap();
        let path = write_json(dir.path(), "link.dialog.json", valid_spec());

        let mut buffer = Vec::new();
        info_command(&path, &CliConfig::default(), &mut buffer).unwrap();
        let text = output(buffer);

        assert!(text.contains("Title:  Insert link"), "{}", text);
        assert!(text.contains("Size:   normal"), "{}", text);
        assert!(text.contains("tabpanel (1 tabs)"), "{}", text);
        assert!(text.contains("save"), "{}", text);
        assert!(text.contains("[primary]"), "{}", text);
        assert!(text.contains("Initial data: url"), "{}", text);
    }

    #[test]
    fn test_info_command_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_json(dir.path(), "bad.json", json!({"title": "T"}));

        let mut buffer = Vec::new();
        let err = info_command(&path, &CliConfig::default(), &mut buffer).unwrap_err();
        assert!(err.to_string().starts_with("Invalid dialog spec"));
    }

    #[test]
    fn test_schema_command() {
        plain();
        let mut buffer = Vec::new();
        schema_command(&mut buffer).unwrap();
        let text = output(buffer);

        assert!(text.starts_with("dialog\n"));
        assert!(text.contains("menu button"));
        assert!(text.contains("submit | cancel | custom | menu"));
    }
}
