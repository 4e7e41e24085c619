//! Job reporting
//!
//! Completed build/test/lint/clean steps are recorded as `JobEntry` values
//! and rendered as one tab-separated line each. The reporter is an explicit
//! value owned by the caller for the lifetime of one invocation; task
//! actions receive it by mutable reference.

use std::fmt;
use std::io::{self, Write};

/// Marker glyph shared by every job kind.
const MARKER: &str = "*";

/// Column width the kind and owner labels are padded to.
const LABEL_WIDTH: usize = 10;

/// What kind of work a recorded job performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Install,
    Skipped,
    Building,
    Clearing,
    Checks,
    Test,
    Clippy,
}

impl JobKind {
    pub fn label(self) -> &'static str {
        match self {
            JobKind::Install => "install",
            JobKind::Skipped => "skipped",
            JobKind::Building => "building",
            JobKind::Clearing => "clearing",
            JobKind::Checks => "checks",
            JobKind::Test => "Test",
            JobKind::Clippy => "clippy",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which component a recorded job ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOwner {
    Extractor,
    Lib,
}

impl JobOwner {
    pub fn label(self) -> &'static str {
        match self {
            JobOwner::Extractor => "Extractor",
            JobOwner::Lib => "Lib",
        }
    }
}

impl fmt::Display for JobOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded completed step.
#[derive(Debug, Clone)]
pub struct JobEntry {
    pub kind: JobKind,
    pub owner: JobOwner,
    pub description: String,
}

/// Append-only log of completed steps, rendered in insertion order.
#[derive(Debug, Default)]
pub struct JobReporter {
    jobs: Vec<JobEntry>,
}

impl JobReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one completed step.
    pub fn record(&mut self, kind: JobKind, owner: JobOwner, description: impl Into<String>) {
        self.jobs.push(JobEntry {
            kind,
            owner,
            description: description.into(),
        });
    }

    /// Render every recorded entry to stdout, one line per entry, in
    /// insertion order. The log is NOT cleared: a later flush re-prints
    /// the full history.
    pub fn flush(&self) {
        let stdout = io::stdout();
        let _ = self.write_report(&mut stdout.lock());
    }

    /// Same rendering as [`flush`](Self::flush), into a caller-supplied
    /// writer.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for job in &self.jobs {
            writeln!(
                out,
                "{}\t[{}]\t[{}]: {}",
                MARKER,
                align(job.kind.label(), LABEL_WIDTH),
                align(job.owner.label(), LABEL_WIDTH),
                job.description
            )?;
        }
        Ok(())
    }

    pub fn entries(&self) -> &[JobEntry] {
        &self.jobs
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Right-pad `content` with spaces to `width`. Content already `width` or
/// wider passes through unpadded (no truncation).
fn align(content: &str, width: usize) -> String {
    format!("{content:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(reporter: &JobReporter) -> String {
        let mut out = Vec::new();
        reporter.write_report(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_align_pads_to_width() {
        assert_eq!(align("Test", 10), "Test      ");
        assert_eq!(align("Lib", 10), "Lib       ");
    }

    #[test]
    fn test_align_leaves_wide_content_untouched() {
        assert_eq!(align("0123456789", 10), "0123456789");
        assert_eq!(align("longer-than-ten", 10), "longer-than-ten");
    }

    #[test]
    fn test_record_then_flush_renders_one_padded_line() {
        let mut reporter = JobReporter::new();
        reporter.record(JobKind::Test, JobOwner::Lib, "tested");

        assert_eq!(rendered(&reporter), "*\t[Test      ]\t[Lib       ]: tested\n");
    }

    #[test]
    fn test_entries_render_in_insertion_order() {
        let mut reporter = JobReporter::new();
        reporter.record(JobKind::Building, JobOwner::Lib, "built");
        reporter.record(JobKind::Test, JobOwner::Lib, "tested");
        reporter.record(JobKind::Clearing, JobOwner::Extractor, "removed: ./target");

        let lines: Vec<_> = rendered(&reporter).lines().map(String::from).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("[building  ]"), "line: {}", lines[0]);
        assert!(lines[1].contains("[Test      ]"), "line: {}", lines[1]);
        assert!(lines[2].contains("[Extractor ]"), "line: {}", lines[2]);
        assert!(lines[2].ends_with(": removed: ./target"), "line: {}", lines[2]);
    }

    #[test]
    fn test_flush_keeps_history() {
        let mut reporter = JobReporter::new();
        reporter.record(JobKind::Clippy, JobOwner::Lib, "checked");

        let first = rendered(&reporter);
        let second = rendered(&reporter);
        assert_eq!(first, second, "a flush must not clear recorded entries");
        assert_eq!(reporter.entries().len(), 1);
    }

    #[test]
    fn test_kind_labels_match_report_vocabulary() {
        assert_eq!(JobKind::Install.to_string(), "install");
        assert_eq!(JobKind::Skipped.to_string(), "skipped");
        assert_eq!(JobKind::Building.to_string(), "building");
        assert_eq!(JobKind::Clearing.to_string(), "clearing");
        assert_eq!(JobKind::Checks.to_string(), "checks");
        assert_eq!(JobKind::Test.to_string(), "Test");
        assert_eq!(JobKind::Clippy.to_string(), "clippy");
        assert_eq!(JobOwner::Extractor.to_string(), "Extractor");
        assert_eq!(JobOwner::Lib.to_string(), "Lib");
    }
}
