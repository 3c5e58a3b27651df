//! Widget lifecycle — add, remove, resize.
//!
//! DESIGN
//! ======
//! Widgets enter the board here and nowhere else. New ids are
//! `{kind}-{nanos}-{random}`: the high-resolution timestamp keeps ids
//! readable and roughly ordered, the random suffix breaks same-instant
//! collisions under rapid repeated adds. Default titles come from the
//! injected registry so the model never hardcodes presentation strings.
//!
//! All three operations are idempotent-safe no-ops on unknown ids or
//! columns; nothing here returns an error.

use rand::Rng;
use tracing::info;

use crate::registry::WidgetRegistry;
use crate::state::{BoardState, Widget, WidgetKind};

// =============================================================================
// ID GENERATION
// =============================================================================

fn generate_widget_id(kind: WidgetKind) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let suffix: u16 = rand::rng().random();
    format!("{}-{nanos:x}-{suffix:04x}", kind.slug())
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Create a widget of the given kind and append it to the target column.
/// Returns the created widget, or `None` (no-op) when the column is unknown.
pub fn add_widget(
    board: &mut BoardState,
    registry: &WidgetRegistry,
    column_id: &str,
    kind: WidgetKind,
) -> Option<Widget> {
    if !board.columns.contains_key(column_id) {
        return None;
    }

    let widget = Widget {
        id: generate_widget_id(kind),
        kind,
        title: registry.label_for(kind).to_string(),
        data: None,
        min_height: None,
    };

    let created = widget.clone();
    board.widgets.insert(widget.id.clone(), widget);
    if let Some(column) = board.column_mut(column_id) {
        column.items.push(created.id.clone());
    }

    info!(widget_id = %created.id, column_id, "widget added");
    Some(created)
}

/// Delete a widget and its placement. Idempotent: a second call with the
/// same id does nothing and returns `false`.
pub fn remove_widget(board: &mut BoardState, widget_id: &str) -> bool {
    let existed = board.widgets.remove(widget_id).is_some();
    let mut unplaced = false;
    for column in board.columns.values_mut() {
        let before = column.items.len();
        column.items.retain(|id| id != widget_id);
        unplaced |= column.items.len() != before;
    }
    if existed {
        info!(widget_id, "widget removed");
    }
    existed || unplaced
}

/// Update a widget's layout height hint; silently ignored (returns `false`)
/// for unknown ids.
pub fn resize_widget(board: &mut BoardState, widget_id: &str, min_height: u32) -> bool {
    if let Some(widget) = board.widgets.get_mut(widget_id) {
        widget.min_height = Some(min_height);
        true
    } else {
        false
    }
}

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod tests;
