use std::cell::RefCell;
use std::rc::Rc;

use paramform::container::{CallbackSink, Container, FileSink, LogSink, ModelSink, WriterSink};
use paramform::editor::Editor;
use paramform::export::OutputFormat;
use paramform::form::{Model, ParamId, ParamValue, example_model, example_parameters};

/// Container whose saves are collected into the returned vector.
fn recording_container() -> (Container, Rc<RefCell<Vec<Model>>>) {
    let saved = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let saved = Rc::clone(&saved);
        CallbackSink(move |model: &Model| saved.borrow_mut().push(model.clone()))
    };
    let editor = Editor::new(example_parameters(), example_model());
    (Container::new(editor, Box::new(sink)), saved)
}

#[test]
fn test_save_forwards_current_model() {
    let (mut container, saved) = recording_container();
    container.editor_mut().on_field_change(ParamId(1), "formal");

    let model = container.on_save().unwrap();

    assert_eq!(model.value_of(ParamId(1)), Some("formal"));
    assert_eq!(saved.borrow().as_slice(), &[model]);
    assert_eq!(container.saves(), 1);
}

#[test]
fn test_save_is_permitted_with_invalid_fields() {
    let (mut container, saved) = recording_container();
    container.editor_mut().on_field_change(ParamId(1), "");
    assert!(!container.editor().is_valid());

    let model = container.on_save().expect("save must not be blocked by validation");

    assert_eq!(model.value_of(ParamId(1)), Some(""));
    assert_eq!(saved.borrow().len(), 1);
    // Saving does not touch validation state
    assert!(!container.editor().is_valid());
}

#[test]
fn test_save_without_edits_round_trips() {
    let (mut container, saved) = recording_container();
    container.on_save().unwrap();
    assert_eq!(saved.borrow()[0], example_model());
}

#[test]
fn test_every_save_reaches_sink() {
    let (mut container, saved) = recording_container();
    container.on_save().unwrap();
    container.editor_mut().on_field_change(ParamId(2), "midi");
    container.on_save().unwrap();

    let saved = saved.borrow();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].value_of(ParamId(2)), Some("maxi"));
    assert_eq!(saved[1].value_of(ParamId(2)), Some("midi"));
}

#[test]
fn test_writer_sink_json() {
    let mut sink = WriterSink::new(Vec::new(), OutputFormat::Json);
    sink.accept(&example_model()).unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let parsed: Model = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, example_model());
    assert!(out.ends_with('\n'));
}

#[test]
fn test_writer_sink_yaml() {
    let mut sink = WriterSink::new(Vec::new(), OutputFormat::Yaml);
    sink.accept(&example_model()).unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert!(out.contains("param_values:"));
    assert!(out.contains("value: casual"));
    let parsed: Model = serde_yaml::from_str(&out).unwrap();
    assert_eq!(parsed, example_model());
}

#[test]
fn test_file_sink_overwrites_with_latest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let mut sink = FileSink::new(&path, OutputFormat::Json);

    sink.accept(&example_model()).unwrap();
    let edited = Model {
        param_values: vec![ParamValue::new(1, "formal")],
        ..example_model()
    };
    sink.accept(&edited).unwrap();

    let content = std::fs::read_to_string(sink.path()).unwrap();
    let parsed: Model = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, edited);
}

#[test]
fn test_file_sink_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("model.json");
    let mut sink = FileSink::new(path, OutputFormat::Json);

    let err = sink.accept(&example_model()).unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn test_log_sink_accepts() {
    let mut sink = LogSink::new(OutputFormat::Yaml);
    assert!(sink.accept(&example_model()).is_ok());
}
