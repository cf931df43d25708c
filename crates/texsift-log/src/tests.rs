use crate::record::{ErrorSource, MissingRefKind, WarningSource};
use crate::scan::Scanner;

#[test]
fn test_empty_log() {
    let report = Scanner::new().scan("");
    assert_eq!(report.errors_count, 0);
    assert_eq!(report.warnings_count, 0);
    assert_eq!(report.badboxes_count, 0);
    assert!(report.missing_refs.is_empty());
    assert!(!report.has_errors);
    assert!(!report.has_warnings);
}

#[test]
fn test_bare_error_has_no_source() {
    let report = Scanner::new().scan("! Undefined control sequence.\n");
    assert_eq!(report.errors_count, 1);
    let fields = &report.errors[0].fields;
    assert_eq!(fields.source, None);
    assert_eq!(fields.message, "Undefined control sequence.");
}

#[test]
fn test_package_warning() {
    let line = "Package hyperref Warning: Token not allowed in a PDF string (Unicode): removing `\\unhbox'.";
    let report = Scanner::new().scan(line);
    assert_eq!(report.warnings_count, 1);
    let fields = &report.warnings[0].fields;
    assert_eq!(fields.source, WarningSource::Package);
    assert_eq!(fields.package.as_deref(), Some("hyperref"));
    assert_eq!(
        fields.message,
        "Token not allowed in a PDF string (Unicode): removing `\\unhbox'."
    );
}

#[test]
fn test_missing_citation() {
    let line = "LaTeX Warning: Citation `smith99' on page 4 undefined on input line 88.";
    let report = Scanner::new().scan(line);
    assert_eq!(report.missing_refs.len(), 1);
    let fields = &report.missing_refs[0].fields;
    assert_eq!(fields.kind, MissingRefKind::Citation);
    assert_eq!(fields.key, "smith99");
    assert_eq!(fields.page, "4");
    assert_eq!(fields.line, "88");
    // a missing reference is not double-counted as a warning
    assert_eq!(report.warnings_count, 0);
}

#[test]
fn test_structured_error() {
    let report = Scanner::new().scan("! Package babel Error: Unknown option `latin'.\n");
    assert_eq!(report.errors_count, 1);
    let fields = &report.errors[0].fields;
    assert_eq!(fields.source, Some(ErrorSource::Package));
    assert_eq!(fields.package.as_deref(), Some("babel"));
    assert_eq!(fields.message, "Unknown option `latin'.");
}

#[test]
fn test_context_window_attached() {
    let log = "! Missing $ inserted.\nl.7 x^2\n       ?\nmore text\n";
    let report = Scanner::new().scan(log);
    assert_eq!(report.errors_count, 1);
    let context = &report.errors[0].context;
    assert_eq!(context.len(), 3);
    assert_eq!(context[0], "! Missing $ inserted.");
    assert_eq!(context[1], "l.7 x^2");
}

#[test]
fn test_context_truncated_at_end_of_input() {
    let report = Scanner::new().scan("! Missing $ inserted.");
    assert_eq!(report.errors[0].context, vec!["! Missing $ inserted."]);
}

#[test]
fn test_lookahead_lines_still_classified() {
    // The second error sits inside the first one's context window; it must
    // still be classified in its own right.
    let log = "! First error.\n! Second error.\n";
    let report = Scanner::new().scan(log);
    assert_eq!(report.errors_count, 2);
    assert_eq!(report.errors[0].context.len(), 2);
    assert_eq!(report.errors[1].context, vec!["! Second error."]);
}

#[test]
fn test_blank_lines_skipped() {
    let report = Scanner::new().scan("\n\n! Oops.\n\n");
    assert_eq!(report.errors_count, 1);
}

#[test]
fn test_info_lines_not_collected() {
    let log = "LaTeX Font Info: Checking defaults for OML/cmm/m/it on input line 4.\n\
               Package microtype Info: Loading configuration file microtype.cfg.\n";
    let report = Scanner::new().scan(log);
    assert!(!report.has_errors);
    assert!(!report.has_warnings);
}

#[test]
fn test_scanner_is_reusable() {
    let scanner = Scanner::new();
    let first = scanner.scan("! One.\n");
    let second = scanner.scan("no diagnostics here\n");
    assert_eq!(first.errors_count, 1);
    assert_eq!(second.errors_count, 0);
}

#[test]
fn test_custom_context_size() {
    let log = "! Oops.\na\nb\nc\nd\n";
    let report = Scanner::new().context_lines(4).scan(log);
    assert_eq!(report.errors[0].context.len(), 5);
    assert_eq!(report.errors[0].context[4], "d");
}
