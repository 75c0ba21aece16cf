use formsim_attrs::ErrorKind;
use formsim_error::Error;

#[derive(Debug, ErrorKind)]
#[error(
    message = "missing operand",
    labels = ["add an operand here"],
    help = "every operator needs something on both sides",
)]
struct MissingOperand;

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("`{}` appears twice", name),
    labels = ["first here", "again here"],
)]
struct Duplicate {
    name: String,
}

#[test]
fn display_includes_first_span() {
    let err = Error::new(vec![2..3], MissingOperand);
    assert_eq!(err.to_string(), "missing operand (at 2..3)");
}

#[test]
fn message_uses_fields() {
    let err = Error::new(vec![0..1, 4..5], Duplicate { name: "x".to_string() });
    assert_eq!(err.kind.message(), "`x` appears twice");
}

#[test]
fn report_mentions_labels_and_help() {
    let err = Error::new(vec![2..3], MissingOperand);
    let report = err.report_to_string("input", "x +").unwrap();
    let plain = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
    assert!(plain.contains("missing operand"));
    assert!(plain.contains("add an operand here"));
    assert!(plain.contains("every operator needs something on both sides"));
}

#[test]
fn report_labels_every_span() {
    let err = Error::new(vec![0..1, 4..5], Duplicate { name: "x".to_string() });
    let report = err.report_to_string("input", "x + x").unwrap();
    let plain = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
    assert!(plain.contains("first here"));
    assert!(plain.contains("again here"));
}
