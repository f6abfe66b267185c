//! # sqreport-checkstyle
//!
//! **Tier 3 (Formatting Adapter)**
//!
//! Checkstyle XML renderer for grouped [`FileIssues`].
//!
//! ## What belongs here
//! * `<checkstyle>`/`<file>`/`<error>` layout and attribute order
//!
//! ## What does NOT belong here
//! * Issue defaults and grouping (see `sqreport-issues`)

use std::io::{self, Write};

use sqreport_types::{CHECKSTYLE_VERSION, FileIssues, IssueRecord};
use sqreport_xml::{close, empty, open, write_declaration};
use tracing::debug;

/// Render the Checkstyle document into a string.
pub fn render(files: &[FileIssues]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_checkstyle(files, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Stream the Checkstyle document into `out`, one `<file>` per group in
/// the given order.
pub fn write_checkstyle<W: Write>(files: &[FileIssues], out: &mut W) -> io::Result<()> {
    debug!(
        files = files.len(),
        issues = files.iter().map(|f| f.issues.len()).sum::<usize>(),
        "writing checkstyle report"
    );

    write_declaration(out)?;
    open(out, 0, "checkstyle", &[("version", CHECKSTYLE_VERSION)])?;
    for file in files {
        open(out, 1, "file", &[("name", file.file_path.as_str())])?;
        for issue in &file.issues {
            write_error(issue, out)?;
        }
        close(out, 1, "file")?;
    }
    close(out, 0, "checkstyle")
}

fn write_error<W: Write>(issue: &IssueRecord, out: &mut W) -> io::Result<()> {
    let line = issue.line.max(1).to_string();
    let severity = issue.severity.to_lowercase();
    empty(
        out,
        2,
        "error",
        &[
            ("line", line.as_str()),
            ("severity", severity.as_str()),
            ("message", issue.message.as_str()),
            ("source", issue.rule.as_str()),
        ],
    )
}
