use paramform::editor::Editor;
use paramform::form::{Model, ParamId, ParamValue, Parameter, example_model, example_parameters};
use paramform::validation::{EMPTY_FIELD_MESSAGE, FieldError, FieldState};

fn example_editor() -> Editor {
    Editor::new(example_parameters(), example_model())
}

#[test]
fn test_initial_values_are_displayed() {
    let editor = example_editor();
    assert_eq!(editor.value(ParamId(1)), "casual");
    assert_eq!(editor.value(ParamId(2)), "maxi");
}

#[test]
fn test_missing_value_displays_empty() {
    let params = vec![Parameter::new(1, "Purpose"), Parameter::new(3, "Fabric")];
    let model = Model {
        param_values: vec![ParamValue::new(1, "casual")],
        colors: vec![],
    };

    let editor = Editor::new(params, model);
    assert_eq!(editor.value(ParamId(3)), "");
}

#[test]
fn test_no_validation_at_mount() {
    let params = vec![Parameter::new(1, "Purpose")];
    let model = Model {
        param_values: vec![ParamValue::new(1, "   ")],
        colors: vec![],
    };

    let editor = Editor::new(params, model);
    assert_eq!(editor.field_state(ParamId(1)), Some(&FieldState::Valid));
    assert!(editor.is_valid());
}

#[test]
fn test_empty_text_sets_error() {
    let mut editor = example_editor();
    editor.on_field_change(ParamId(1), "");

    assert_eq!(editor.error(ParamId(1)), Some(&FieldError::Empty));
    assert_eq!(
        editor.error(ParamId(1)).map(|e| e.to_string()),
        Some(EMPTY_FIELD_MESSAGE.to_string())
    );
    assert_eq!(editor.error(ParamId(2)), None);
}

#[test]
fn test_whitespace_text_sets_error() {
    let mut editor = example_editor();
    editor.on_field_change(ParamId(2), " \t ");

    assert_eq!(editor.error(ParamId(2)), Some(&FieldError::Empty));
    // The raw text is stored as typed
    assert_eq!(editor.value(ParamId(2)), " \t ");
}

#[test]
fn test_error_leaves_other_fields_alone() {
    let mut editor = example_editor();
    editor.on_field_change(ParamId(1), "");
    editor.on_field_change(ParamId(2), "");
    editor.on_field_change(ParamId(2), "midi");

    assert_eq!(editor.error(ParamId(1)), Some(&FieldError::Empty));
    assert_eq!(editor.error(ParamId(2)), None);
    assert_eq!(editor.invalid_count(), 1);
}

#[test]
fn test_non_empty_text_clears_error() {
    let mut editor = example_editor();
    editor.on_field_change(ParamId(1), "");
    assert!(!editor.is_valid());

    editor.on_field_change(ParamId(1), "formal");
    assert_eq!(editor.field_state(ParamId(1)), Some(&FieldState::Valid));
    assert!(editor.is_valid());
}

#[test]
fn test_scenario_clear_then_retype() {
    let mut editor = example_editor();

    editor.on_field_change(ParamId(1), "");
    assert!(editor.error(ParamId(1)).is_some());
    assert_eq!(editor.value(ParamId(2)), "maxi");

    editor.on_field_change(ParamId(1), "formal");
    assert!(editor.error(ParamId(1)).is_none());

    let model = editor.get_model();
    assert_eq!(
        model.param_values,
        vec![ParamValue::new(1, "formal"), ParamValue::new(2, "maxi")]
    );
    assert_eq!(model.colors, vec!["red", "blue"]);
}

#[test]
fn test_get_model_without_edits_is_identity() {
    let editor = example_editor();
    assert_eq!(editor.get_model(), example_model());
}

#[test]
fn test_get_model_ignores_validation_state() {
    let mut editor = example_editor();
    editor.on_field_change(ParamId(2), "");

    let model = editor.get_model();
    assert_eq!(model.value_of(ParamId(2)), Some(""));
    assert_eq!(model.colors, example_model().colors);
}

#[test]
fn test_get_model_does_not_mutate() {
    let mut editor = example_editor();
    editor.on_field_change(ParamId(1), "formal");

    let first = editor.get_model();
    let second = editor.get_model();
    assert_eq!(first, second);
}

#[test]
fn test_change_preserves_value_order() {
    let params = example_parameters();
    let model = Model {
        param_values: vec![ParamValue::new(2, "maxi"), ParamValue::new(1, "casual")],
        colors: vec![],
    };

    let mut editor = Editor::new(params, model);
    editor.on_field_change(ParamId(1), "formal");

    let ids: Vec<ParamId> = editor.values().iter().map(|pv| pv.param_id).collect();
    assert_eq!(ids, vec![ParamId(2), ParamId(1)]);
    assert_eq!(editor.value(ParamId(1)), "formal");
}

#[test]
fn test_typing_into_field_without_value_adds_no_entry() {
    let params = vec![Parameter::new(1, "Purpose"), Parameter::new(3, "Fabric")];
    let model = Model {
        param_values: vec![ParamValue::new(1, "casual")],
        colors: vec![],
    };

    let mut editor = Editor::new(params, model.clone());
    editor.on_field_change(ParamId(3), "silk");
    assert_eq!(editor.get_model(), model);
    assert_eq!(editor.value(ParamId(3)), "");

    // Validation still follows the typed text
    editor.on_field_change(ParamId(3), " ");
    assert!(editor.error(ParamId(3)).is_some());
    assert_eq!(editor.get_model().param_values, model.param_values);
}

#[test]
fn test_unknown_parameter_is_ignored() {
    let mut editor = example_editor();
    editor.on_field_change(ParamId(99), "");

    assert!(!editor.has_param(ParamId(99)));
    assert_eq!(editor.field_state(ParamId(99)), None);
    assert!(editor.is_valid());
    assert_eq!(editor.get_model(), example_model());
}

#[test]
fn test_original_model_is_untouched() {
    let original = example_model();
    let mut editor = Editor::new(example_parameters(), original.clone());
    editor.on_field_change(ParamId(1), "formal");

    assert_eq!(original.value_of(ParamId(1)), Some("casual"));
}

#[test]
fn test_errors_iterate_in_parameter_order() {
    let mut editor = example_editor();
    editor.on_field_change(ParamId(2), "");
    editor.on_field_change(ParamId(1), " ");

    let names: Vec<&str> = editor.errors().map(|(p, _)| p.name.as_str()).collect();
    assert_eq!(names, vec!["Purpose", "Length"]);
}
