use paramform::editor::Editor;
use paramform::form::{ParamId, example_model, example_parameters};
use paramform::validation::{
    EMPTY_FIELD_MESSAGE, FieldError, FieldState, validate_text, validate_with_warnings,
};

#[test]
fn test_validate_text() {
    assert_eq!(validate_text("casual"), Ok(()));
    assert_eq!(validate_text("  a  "), Ok(()));
    assert_eq!(validate_text(""), Err(FieldError::Empty));
    assert_eq!(validate_text("   "), Err(FieldError::Empty));
    assert_eq!(validate_text("\n\t"), Err(FieldError::Empty));
}

#[test]
fn test_field_state_follows_latest_input() {
    let mut state = FieldState::default();
    assert!(state.is_valid());

    for (input, valid) in [("", false), ("x", true), (" ", false), ("formal", true)] {
        state = FieldState::after_input(input);
        assert_eq!(state.is_valid(), valid, "input {input:?}");
    }
}

#[test]
fn test_field_error_message() {
    let state = FieldState::after_input("");
    assert_eq!(state.error(), Some(&FieldError::Empty));
    assert_eq!(FieldError::Empty.message(), EMPTY_FIELD_MESSAGE);
    assert_eq!(FieldError::Empty.to_string(), "field cannot be empty");
}

#[test]
fn test_warnings_empty_for_valid_form() {
    let editor = Editor::new(example_parameters(), example_model());
    assert!(validate_with_warnings(&editor).is_empty());
}

#[test]
fn test_warnings_name_invalid_fields() {
    let mut editor = Editor::new(example_parameters(), example_model());
    editor.on_field_change(ParamId(2), "");

    let warnings = validate_with_warnings(&editor);
    assert_eq!(warnings, vec!["Length (2): field cannot be empty".to_string()]);
}
