//! Template context — serializable rendering payload built from a [`ListView`].

use serde::{Deserialize, Serialize};

use tickoff_core::{FilterMode, Theme};

use crate::error::RenderError;
use crate::view::ListView;

/// Everything a list template can see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewContext {
    /// `"dark"` or `"light"`.
    pub theme: String,
    pub markers: MarkersCtx,
    pub filter: FilterCtx,
    /// Visible rows only, in collection order.
    pub rows: Vec<RowCtx>,
    pub summary: SummaryCtx,
    pub show_all_clear: bool,
    pub show_list_controls: bool,
    pub meta: MetaCtx,
}

/// Theme-dependent glyphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkersCtx {
    pub checked: String,
    pub unchecked: String,
    pub delete: String,
    pub all_clear: String,
}

impl MarkersCtx {
    pub fn for_theme(theme: Theme) -> Self {
        let (checked, unchecked) = match theme {
            Theme::Light => ("[x]", "[ ]"),
            Theme::Dark => ("■", "□"),
        };
        Self {
            checked: checked.to_string(),
            unchecked: unchecked.to_string(),
            delete: "✕".to_string(),
            all_clear: "✓".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCtx {
    pub selected: String,
    pub modes: Vec<FilterModeCtx>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterModeCtx {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowCtx {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryCtx {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
    pub remaining_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub tickoff_version: String,
}

impl ViewContext {
    /// Build a [`ViewContext`] from the current rows and theme.
    pub fn from_view(view: &ListView, theme: Theme) -> Self {
        let summary = view.summary();
        let selected = view.selected();

        let modes = FilterMode::all()
            .iter()
            .map(|mode| FilterModeCtx {
                name: mode.to_string(),
                selected: *mode == selected,
            })
            .collect();

        let rows = view
            .visible_rows()
            .map(|row| RowCtx {
                id: row.id.to_string(),
                label: row.label.clone(),
                checked: row.checked,
            })
            .collect();

        ViewContext {
            theme: theme.to_string(),
            markers: MarkersCtx::for_theme(theme),
            filter: FilterCtx {
                selected: selected.to_string(),
                modes,
            },
            rows,
            summary: SummaryCtx {
                total: summary.total,
                remaining: summary.remaining,
                completed: summary.completed,
                remaining_label: summary.remaining_label(),
            },
            show_all_clear: summary.show_all_clear(),
            show_list_controls: summary.show_list_controls(),
            meta: MetaCtx {
                tickoff_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
