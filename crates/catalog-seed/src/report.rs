//! Per-record outcomes and the end-of-run summary.

use std::fmt;

/// Result of a single conflict-skip insert.
#[derive(Debug)]
pub enum InsertOutcome {
    Inserted,
    /// The unique key already existed; the row was left untouched.
    Skipped,
    Failed(sqlx::Error),
}

impl InsertOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 { Self::Inserted } else { Self::Skipped }
    }
}

/// Tally of outcomes for one dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub inserted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn record(&mut self, outcome: &InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted => self.inserted += 1,
            InsertOutcome::Skipped => self.skipped += 1,
            InsertOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Totals after commit plus what this run contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Courses in the database, excluding soft-deleted rows.
    pub total_courses: i64,
    /// Packages in the database, excluding soft-deleted rows.
    pub total_packages: i64,
    pub courses: BatchReport,
    pub packages: BatchReport,
    pub links: BatchReport,
}

impl SeedSummary {
    pub fn has_failures(&self) -> bool {
        self.courses.failed + self.packages.failed + self.links.failed > 0
    }
}

const RULE: &str = "==================================================";

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Data insertion completed!")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Courses in database: {}", self.total_courses)?;
        writeln!(f, "Packages in database: {}", self.total_packages)?;
        writeln!(f, "New courses added: {}", self.courses.inserted)?;
        writeln!(f, "New packages added: {}", self.packages.inserted)?;
        writeln!(f, "New package-course links: {}", self.links.inserted)?;
        if self.has_failures() {
            writeln!(
                f,
                "Failed inserts: {} courses, {} packages, {} links",
                self.courses.failed, self.packages.failed, self.links.failed
            )?;
        }
        write!(f, "{RULE}")
    }
}
