use std::fs;

use tickoff_core::{FilterMode, MemoryKvStore, SequentialIdGenerator, Theme, TodoStore};
use tickoff_renderer::{ListView, RenderError, Renderer, TemplateEngine, ViewContext};
use tempfile::TempDir;

fn populated_view() -> ListView {
    let mut store = TodoStore::with_ids(MemoryKvStore::new(), SequentialIdGenerator::new());
    let mut view = ListView::new();
    for text in ["Complete online course", "Meditate", "Finish quiz"] {
        view.submit(text, &mut store).expect("submit");
    }
    view
}

#[test]
fn user_list_template_overrides_embedded() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("list.txt.tera"),
        "{% for row in rows %}{{ row.id }}={{ row.label }};{% endfor %}",
    )
    .unwrap();

    let renderer = Renderer::with_overrides(dir.path()).expect("renderer");
    let out = renderer.render(&populated_view(), Theme::Light).unwrap();
    assert_eq!(
        out,
        "todo-1=Complete online course;todo-2=Meditate;todo-3=Finish quiz;"
    );
}

#[test]
fn partial_override_keeps_embedded_list_layout() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("shared")).unwrap();
    fs::write(
        dir.path().join("shared").join("_header.tera"),
        "MY LIST ({{ summary.total }})\n",
    )
    .unwrap();

    let renderer = Renderer::with_overrides(dir.path()).expect("renderer");
    let out = renderer.render(&populated_view(), Theme::Light).unwrap();
    assert!(out.starts_with("MY LIST (3)\n"), "got:\n{out}");
    assert!(out.contains("[ ] Meditate"));
}

#[test]
fn non_tera_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("list.txt"), "not a template {{").unwrap();

    let renderer = Renderer::with_overrides(dir.path()).expect("renderer");
    let out = renderer.render(&populated_view(), Theme::Light).unwrap();
    assert!(out.contains("3 items left"));
}

#[test]
fn missing_override_dir_falls_back_to_embedded() {
    let dir = TempDir::new().unwrap();
    let renderer = Renderer::with_overrides(&dir.path().join("absent")).expect("renderer");
    let out = renderer.render(&ListView::new(), Theme::Dark).unwrap();
    assert!(out.contains("All clear"));
}

#[test]
fn broken_override_reports_tera_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("list.txt.tera"), "{% for row in rows %}").unwrap();

    let err = TemplateEngine::new(Some(dir.path())).err().expect("must fail");
    assert!(matches!(err, RenderError::Tera(_)), "got: {err}");
}

#[test]
fn context_serializes_to_stable_json_shape() {
    let mut view = populated_view();
    view.apply_filter(FilterMode::Completed);
    let ctx = ViewContext::from_view(&view, Theme::Light);
    let json = serde_json::to_value(&ctx).unwrap();

    assert_eq!(json["filter"]["selected"], "completed");
    assert_eq!(json["rows"].as_array().unwrap().len(), 0);
    assert_eq!(json["summary"]["remaining"], 3);
    assert_eq!(json["show_list_controls"], true);
}

#[test]
fn override_matching_no_builtin_template_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("shared")).unwrap();
    fs::write(dir.path().join("shared").join("_heder.tera"), "typo\n").unwrap();

    let err = TemplateEngine::new(Some(dir.path())).err().expect("must fail");
    match err {
        RenderError::UnknownTemplate { name, path } => {
            assert_eq!(name, "shared/_heder.tera");
            assert!(path.ends_with("shared/_heder.tera"));
        }
        other => panic!("expected UnknownTemplate, got: {other}"),
    }
}

#[test]
fn override_names_are_case_insensitive() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("LIST.TXT.tera"), "custom").unwrap();

    let renderer = Renderer::with_overrides(dir.path()).expect("renderer");
    assert_eq!(renderer.render(&populated_view(), Theme::Light).unwrap(), "custom");
}
