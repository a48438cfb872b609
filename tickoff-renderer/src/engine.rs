//! Tera rendering engine — [`TemplateEngine`] and [`Renderer`].
//!
//! | Template name          | Role                                         |
//! |------------------------|----------------------------------------------|
//! | `list.txt.tera`        | whole list: header, rows, footer / all clear |
//! | `shared/_header.tera`  | title line with theme glyph                  |
//! | `shared/_footer.tera`  | remaining count, clear action, filter bar    |
//!
//! Any of these may be overridden by a same-named `.tera` file in a user
//! template directory (`~/.tickoff/templates/` for the CLI). Other `.tera`
//! files in that directory are an error; non-`.tera` files are ignored.

use std::collections::HashMap;
use std::path::Path;

use tera::Tera;

use tickoff_core::Theme;

use crate::context::ViewContext;
use crate::error::RenderError;
use crate::view::ListView;

/// Name of the top-level list template.
pub const LIST_TEMPLATE: &str = "list.txt.tera";

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("shared/_header.tera", include_str!("templates/_partials/header.tera")),
    ("shared/_footer.tera", include_str!("templates/_partials/footer.tera")),
    (LIST_TEMPLATE, include_str!("templates/list.txt.tera")),
];

// ---------------------------------------------------------------------------
// User overrides
// ---------------------------------------------------------------------------

/// Template name for a file under the override directory: the relative path
/// with `/` separators, lowercased. `None` for anything that isn't `*.tera`.
fn override_name(dir: &Path, path: &Path) -> Option<String> {
    if path.extension()?.to_str()? != "tera" {
        return None;
    }
    let rel = path.strip_prefix(dir).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
        .collect();
    Some(parts.join("/"))
}

/// Walk `dir` and read every `.tera` file, replacing the embedded template of
/// the same name. A `.tera` file that names no embedded template is rejected
/// so a typo in an override path doesn't silently fall back to the default.
fn apply_overrides(dir: &Path, templates: &mut HashMap<&'static str, String>) -> Result<(), RenderError> {
    let io_err = |path: &Path, source: std::io::Error| RenderError::Io { path: path.to_path_buf(), source };
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current).map_err(|e| io_err(&current, e))? {
            let path = entry.map_err(|e| io_err(&current, e))?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let Some(name) = override_name(dir, &path) else {
                continue;
            };
            let Some((slot, _)) = TPLS.iter().find(|(embedded, _)| *embedded == name) else {
                return Err(RenderError::UnknownTemplate { path, name });
            };
            let body = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            tracing::debug!(template = %slot, path = %path.display(), "using template override");
            templates.insert(*slot, body.replace("\r\n", "\n"));
        }
    }
    Ok(())
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<&'static str, String> =
        TPLS.iter().map(|(name, body)| (*name, (*body).to_string())).collect();
    if let Some(dir) = user_template_dir.filter(|d| d.is_dir()) {
        apply_overrides(dir, &mut templates)?;
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine with optional user overrides.
///
/// Template names are normalised to lowercase relative paths with `/`.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load embedded templates plus any overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the list template with `ctx`.
    pub fn render(&self, ctx: &ViewContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(LIST_TEMPLATE, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Turns a [`ListView`] into text. Create once and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Embedded templates only.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(None)? })
    }

    /// Embedded templates overridden by `.tera` files under `dir`, if it exists.
    pub fn with_overrides(dir: &Path) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(Some(dir))? })
    }

    /// Render the visible rows of `view` under `theme`.
    pub fn render(&self, view: &ListView, theme: Theme) -> Result<String, RenderError> {
        let ctx = ViewContext::from_view(view, theme);
        self.render_with_context(&ctx)
    }

    /// Render using a caller-provided [`ViewContext`].
    pub fn render_with_context(&self, ctx: &ViewContext) -> Result<String, RenderError> {
        self.engine.render(ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tickoff_core::{FilterMode, Todo, TodoId};

    fn todos() -> Vec<Todo> {
        vec![
            Todo { id: TodoId::from("todo-1"), text: "Jog around the park".into(), completed: false },
            Todo { id: TodoId::from("todo-2"), text: "Read for 1 hour".into(), completed: true },
            Todo { id: TodoId::from("todo-3"), text: "Pick up groceries".into(), completed: false },
        ]
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn renders_every_visible_row_with_markers() {
        let renderer = Renderer::new().unwrap();
        let view = ListView::build(&todos(), FilterMode::All);
        let out = renderer.render(&view, Theme::Light).unwrap();
        assert!(out.contains("[ ] Jog around the park"), "got:\n{out}");
        assert!(out.contains("[x] Read for 1 hour"), "got:\n{out}");
        assert!(out.contains("✕ todo-3"), "delete affordance carries the id");
        assert!(out.contains("2 items left"));
        assert!(out.contains("[all]"), "selected mode is marked");
    }

    #[test]
    fn filtered_rows_are_not_rendered() {
        let renderer = Renderer::new().unwrap();
        let view = ListView::build(&todos(), FilterMode::Active);
        let out = renderer.render(&view, Theme::Light).unwrap();
        assert!(!out.contains("Read for 1 hour"));
        assert!(out.contains("Pick up groceries"));
        assert!(out.contains("[active]"));
    }

    #[test]
    fn empty_list_renders_all_clear_without_controls() {
        let renderer = Renderer::new().unwrap();
        let out = renderer.render(&ListView::new(), Theme::Light).unwrap();
        assert!(out.contains("All clear"));
        assert!(!out.contains("items left"));
        assert!(!out.contains("[all]"));
    }

    #[test]
    fn dark_theme_uses_filled_markers() {
        let renderer = Renderer::new().unwrap();
        let view = ListView::build(&todos(), FilterMode::All);
        let out = renderer.render(&view, Theme::Dark).unwrap();
        assert!(out.contains("■ Read for 1 hour"));
        assert!(out.contains("□ Jog around the park"));
        assert!(out.starts_with("TODO ☾"));
    }

    #[test]
    fn labels_are_not_html_escaped() {
        let renderer = Renderer::new().unwrap();
        let todos = vec![Todo::new(TodoId::from("x"), "fish & <chips>")];
        let out = renderer
            .render(&ListView::build(&todos, FilterMode::All), Theme::Light)
            .unwrap();
        assert!(out.contains("fish & <chips>"));
    }

    #[test]
    fn no_crlf_in_rendered_output() {
        let renderer = Renderer::new().unwrap();
        let out = renderer
            .render(&ListView::build(&todos(), FilterMode::All), Theme::Light)
            .unwrap();
        assert!(!out.contains('\r'));
    }
}
