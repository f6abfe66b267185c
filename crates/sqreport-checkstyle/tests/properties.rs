//! Property tests for the Checkstyle renderer.

use proptest::prelude::*;
use sqreport_checkstyle::render;
use sqreport_types::{FileIssues, IssueRecord};

fn arb_issue() -> impl Strategy<Value = IssueRecord> {
    (".*", 0u32..10_000, ".*", "[A-Za-z]{0,8}", ".*").prop_map(
        |(file_path, line, message, severity, rule)| IssueRecord {
            file_path,
            line,
            message,
            severity,
            rule,
        },
    )
}

fn arb_files() -> impl Strategy<Value = Vec<FileIssues>> {
    prop::collection::vec(
        (".*", prop::collection::vec(arb_issue(), 0..5))
            .prop_map(|(file_path, issues)| FileIssues { file_path, issues }),
        0..5,
    )
}

proptest! {
    #[test]
    fn one_element_per_file_and_issue(files in arb_files()) {
        let xml = render(&files);
        let issues: usize = files.iter().map(|f| f.issues.len()).sum();
        prop_assert_eq!(xml.matches("<file ").count(), files.len());
        prop_assert_eq!(xml.matches("<error ").count(), issues);
    }

    #[test]
    fn markup_stays_balanced(files in arb_files()) {
        let xml = render(&files);
        prop_assert_eq!(xml.matches('<').count(), xml.matches('>').count());
    }

    #[test]
    fn no_line_below_one(files in arb_files()) {
        let xml = render(&files);
        prop_assert!(!xml.contains(r#"line="0""#));
    }
}
