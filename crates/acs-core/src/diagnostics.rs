//! Pretty terminal rendering of load failures, pointing at the offending
//! spot in the adventure file.

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::validate::ValidationIssue;

/// Byte offset of a 1-based line/column position, clamped to the source.
fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (n, text) in source.split_inclusive('\n').enumerate() {
        if n + 1 == line {
            return (offset + column.saturating_sub(1)).min(source.len());
        }
        offset += text.len();
    }
    source.len()
}

/// Span covering the first quoted occurrence of `reference`, or the start
/// of the file if it cannot be found.
fn span_of(source: &str, reference: Option<&str>) -> Range<usize> {
    reference
        .and_then(|r| {
            let quoted = format!("\"{r}\"");
            source.find(&quoted).map(|at| at..at + quoted.len())
        })
        .unwrap_or(0..0)
}

fn render(
    source: &str,
    filename: &str,
    is_error: bool,
    span: Range<usize>,
    message: &str,
    label: &str,
    output: &mut Vec<u8>,
) {
    let (kind, color) = if is_error {
        (ReportKind::Error, Color::Red)
    } else {
        (ReportKind::Warning, Color::Yellow)
    };
    Report::build(kind, (filename, span.clone()))
        .with_message(message)
        .with_label(
            Label::new((filename, span))
                .with_message(label)
                .with_color(color),
        )
        .finish()
        .write((filename, Source::from(source)), output)
        .ok();
}

/// Render a JSON syntax or schema error.
pub fn render_json_error(source: &str, filename: &str, error: &serde_json::Error) -> String {
    let mut output = Vec::new();
    let at = offset_of(source, error.line(), error.column());
    let end = (at + 1).min(source.len());
    render(
        source,
        filename,
        true,
        at..end,
        "invalid adventure document",
        &error.to_string(),
        &mut output,
    );
    String::from_utf8(output).unwrap_or_default()
}

/// Render validation issues, labelling each unresolved reference where it
/// first appears in the file.
pub fn render_issues(source: &str, filename: &str, issues: &[ValidationIssue]) -> String {
    let mut output = Vec::new();
    for issue in issues {
        let label = match &issue.suggestion {
            Some(s) => format!("did you mean '{s}'?"),
            None => issue.message.clone(),
        };
        render(
            source,
            filename,
            issue.is_error,
            span_of(source, issue.reference.as_deref()),
            &format!("{}: {}", issue.subject, issue.message),
            &label,
            &mut output,
        );
    }
    String::from_utf8(output).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::AdventureDef;
    use crate::validate::validate;

    #[test]
    fn offsets_from_line_and_column() {
        let source = "ab\ncde\nf";
        assert_eq!(offset_of(source, 1, 1), 0);
        assert_eq!(offset_of(source, 2, 2), 4);
        assert_eq!(offset_of(source, 3, 1), 7);
        assert_eq!(offset_of(source, 9, 9), source.len());
    }

    #[test]
    fn span_finds_quoted_reference() {
        let source = r#"{"a": "hall", "b": "hallway"}"#;
        assert_eq!(span_of(source, Some("hallway")), 19..28);
        assert_eq!(span_of(source, Some("nowhere")), 0..0);
        assert_eq!(span_of(source, None), 0..0);
    }

    #[test]
    fn renders_json_error() {
        let source = "{\n  \"title\": \n}";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let output = render_json_error(source, "bad.json", &err);
        assert!(output.contains("invalid adventure document"));
    }

    #[test]
    fn renders_validation_issue_with_suggestion() {
        let source = r#"{
            "title": "T",
            "start_room": "yard",
            "rooms": [{"id": "yard", "name": "Yard", "exits": {"in": "shedd"}},
                      {"id": "shed", "name": "Shed", "exits": {"out": "yard"}}]
        }"#;
        let def = AdventureDef::from_json(source).unwrap();
        let issues = validate(&def);
        let output = render_issues(source, "yard.json", &issues);
        assert!(output.contains("unknown room 'shedd'"));
        assert!(output.contains("did you mean 'shed'?"));
    }
}
