use super::*;

#[test]
fn test_hidden_spinner_finishes() {
    let spinner = Spinner::hidden("Resolving dependency tree");
    assert!(spinner.bar.is_hidden());
    assert!(!spinner.bar.is_finished());

    spinner.finish();
    assert!(spinner.bar.is_finished());
}
