// Integration tests for trackerscript
//
// Exercise the public API end to end against the bundled demo script and
// hand-written failure cases.

use std::path::Path;

use trackerscript::{Command, ParseError, Range, ScriptError, Value, load_from_file, parse};

const DEMO_SCRIPT: &str = "demos/ObjectTracker.cfg";

#[test]
fn test_demo_script_exists() {
    assert!(Path::new(DEMO_SCRIPT).exists(), "Demo script should exist");
}

#[test]
fn test_demo_script_loads() {
    let script = load_from_file(DEMO_SCRIPT).expect("demo script should parse");
    assert_eq!(script.len(), 14);
    assert_eq!(script.with_command(Command::Setcam).count(), 7);
    assert_eq!(script.with_command(Command::Setpar).count(), 5);
    assert_eq!(script.with_command(Command::Serout).count(), 2);
}

#[test]
fn test_demo_script_color_ranges() {
    let script = load_from_file(DEMO_SCRIPT).unwrap();

    let expect = [("hrange", 95, 110), ("srange", 100, 255), ("vrange", 60, 253)];
    for (name, low, high) in expect {
        let directive = script.effective(Command::Setpar, name).unwrap();
        assert_eq!(directive.value, Value::Range(Range::new(low, high)), "{}", name);
    }
}

#[test]
fn test_demo_script_routing_tokens() {
    let script = load_from_file(DEMO_SCRIPT).unwrap();

    let serlog = script.effective(Command::Setpar, "serlog").unwrap();
    assert_eq!(serlog.value.as_token(), Some("None"));

    let serout = script.effective(Command::Setpar, "serout").unwrap();
    assert_eq!(serout.value.as_token(), Some("Hard"));
}

#[test]
fn test_demo_script_pass_through_commands() {
    let script = load_from_file(DEMO_SCRIPT).unwrap();
    let forwarded: Vec<String> = script
        .with_command(Command::Serout)
        .map(|d| d.to_string())
        .collect();
    assert_eq!(forwarded, vec!["serout PANGAIN 400", "serout TILTGAIN 300"]);
    assert_eq!(script.directives().last().unwrap().line, 24);
}

#[test]
fn test_demo_script_rendering_reparses() {
    let script = load_from_file(DEMO_SCRIPT).unwrap();
    let reparsed = parse(&script.to_string()).unwrap();
    assert_eq!(reparsed.len(), script.len());
    assert!(reparsed.iter().zip(script.iter()).all(|(a, b)| a.same_setting(b)));
}

#[test]
fn test_error_line_numbers_ignore_comment_drift() {
    let text = "# one\n\n# three\nsetcam autowb 1\n\n   # six\nsetpar hrange 1...x\n";
    let err = parse(text).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidRangeBound {
            line: 7,
            text: "setpar hrange 1...x".to_string(),
            bound: "x".to_string(),
        }
    );
}

#[test]
fn test_malformed_script_returns_no_partial_result() {
    let text = "setcam autowb 1\nsetcam autoexp 1\nserout PANGAIN\n";
    let result = parse(text);
    assert!(matches!(result, Err(ParseError::MalformedLine { line: 3, fields: 2, .. })));
}

#[test]
fn test_error_message_is_actionable() {
    let err = parse("setfoo x 1").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 1"));
    assert!(msg.contains("setfoo x 1"));
}

#[test]
fn test_file_error_wraps_parse_error() {
    use std::io::Write;

    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    temp_file.write_all(b"setpar hrange 1...2\nsetfoo x 1\n").unwrap();
    temp_file.flush().unwrap();

    match load_from_file(temp_file.path()) {
        Err(ScriptError::Parse { path, error }) => {
            assert_eq!(path, temp_file.path());
            assert!(matches!(error, ParseError::UnknownCommand { line: 2, .. }));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}
