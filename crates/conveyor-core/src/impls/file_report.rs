//! Report writer that persists outcomes to a plain-text file.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use crate::domain::TaskOutcome;
use crate::ports::{ReportError, ReportWriter};

/// Render the report text: a banner, the total count, then one numbered line
/// per outcome in collection order.
///
/// Kept separate from the file write so the format can be tested without
/// touching disk.
pub fn render_report(outcomes: &[TaskOutcome]) -> String {
    let mut out = String::new();
    out.push_str("=== Task Processing Results ===\n\n");
    let _ = writeln!(out, "Total tasks processed: {}\n", outcomes.len());
    for (index, outcome) in outcomes.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, outcome.description());
    }
    out
}

/// Writes the rendered report to a fixed path, replacing any previous run.
pub struct FileReportWriter {
    path: PathBuf,
}

impl FileReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ReportWriter for FileReportWriter {
    fn write_report(&self, outcomes: &[TaskOutcome]) -> Result<(), ReportError> {
        fs::write(&self.path, render_report(outcomes))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, WorkerId};

    fn outcome(worker: u64, task_seq: u64, nth: u64) -> TaskOutcome {
        TaskOutcome::new(WorkerId::new(worker), Task::numbered(task_seq), nth)
    }

    #[test]
    fn report_has_count_header_and_one_line_per_outcome() {
        let outcomes = vec![outcome(1, 1, 1), outcome(2, 2, 1), outcome(1, 3, 2)];
        let text = render_report(&outcomes);

        assert!(text.contains("Total tasks processed: 3"));
        let result_lines: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with(char::is_numeric))
            .collect();
        assert_eq!(result_lines.len(), 3);
        assert_eq!(result_lines[0], "1. Worker 1 completed Task1 (Task #1)");
        assert_eq!(result_lines[2], "3. Worker 1 completed Task3 (Task #2)");
    }

    #[test]
    fn empty_run_renders_header_with_zero_and_no_result_lines() {
        let text = render_report(&[]);
        assert!(text.contains("Total tasks processed: 0"));
        assert!(!text.lines().any(|line| line.starts_with(char::is_numeric)));
    }

    #[test]
    fn write_to_an_unwritable_path_is_an_error_not_a_panic() {
        let writer = FileReportWriter::new("/nonexistent-dir/results.txt");
        let err = writer.write_report(&[outcome(1, 1, 1)]).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }

    #[test]
    fn write_persists_the_rendered_text() {
        let path = std::env::temp_dir().join(format!(
            "conveyor-report-{}-{}.txt",
            std::process::id(),
            line!()
        ));
        let writer = FileReportWriter::new(&path);

        writer.write_report(&[outcome(1, 1, 1)]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, render_report(&[outcome(1, 1, 1)]));

        let _ = fs::remove_file(&path);
    }
}
