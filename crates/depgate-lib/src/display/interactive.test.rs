use super::*;
use std::io::Cursor;

fn run(input: &str) -> (Result<bool, ConfirmError>, String) {
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = confirm_lines("Proceed? [Y/N]", &mut reader, &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_parse_answer_accepts_case_insensitive_forms() {
    for yes in ["y", "Y", "yes", "Yes", "YES", "  yes\n"] {
        assert_eq!(parse_answer(yes), Some(true), "{yes:?}");
    }
    for no in ["n", "N", "no", "No", "NO", "no\r\n"] {
        assert_eq!(parse_answer(no), Some(false), "{no:?}");
    }
    for other in ["", "maybe", "yess", "nope", "y e s"] {
        assert_eq!(parse_answer(other), None, "{other:?}");
    }
}

#[test]
fn test_confirm_lines_affirmative() {
    let (result, output) = run("yes\n");
    assert!(result.unwrap());
    assert_eq!(output, "Proceed? [Y/N]\n");
}

#[test]
fn test_confirm_lines_negative() {
    let (result, _) = run("N\n");
    assert!(!result.unwrap());
}

#[test]
fn test_confirm_lines_reprompts_until_valid() {
    let (result, output) = run("what\n\nsure\nno\n");
    assert!(!result.unwrap());
    assert_eq!(output.matches(REPROMPT).count(), 3);
}

#[test]
fn test_confirm_lines_last_line_without_newline() {
    let (result, _) = run("y");
    assert!(result.unwrap());
}

#[test]
fn test_confirm_lines_eof_is_an_error() {
    let (result, output) = run("later\n");
    assert!(matches!(result, Err(ConfirmError::InputClosed)));
    assert_eq!(output.matches(REPROMPT).count(), 1);
}
