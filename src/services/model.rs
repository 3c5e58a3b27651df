//! Board model — pure placement mutations.
//!
//! DESIGN
//! ======
//! These operations mutate `BoardState` in memory and nothing else; callers
//! decide when the result is worth persisting. Every operation degrades to a
//! no-op on bad input (unknown column, out-of-range index, unplaced widget)
//! instead of returning an error: drag handlers fire many times per second
//! and must be safe under redundant or stale invocations.
//!
//! The conservation invariant: a widget id occurs in at most one column's
//! `items`, and moves neither duplicate nor lose ids.

use crate::state::{BoardState, Column, Widget};

// =============================================================================
// LOOKUP
// =============================================================================

/// Find the column whose `items` contains the widget. Linear scan over the
/// column order; `None` means the widget is unplaced, which is not an error.
#[must_use]
pub fn locate_column_of_widget<'a>(board: &'a BoardState, widget_id: &str) -> Option<&'a Column> {
    board
        .columns_order
        .iter()
        .filter_map(|column_id| board.columns.get(column_id))
        .find(|column| column.items.iter().any(|id| id == widget_id))
}

/// Owning column id, if any.
#[must_use]
pub fn locate_column_id_of_widget(board: &BoardState, widget_id: &str) -> Option<String> {
    locate_column_of_widget(board, widget_id).map(|column| column.id.clone())
}

/// Resolve a column's items to widgets for rendering, filtering ids with no
/// `widgets` entry. Dangling references can occur transiently mid-migration
/// and are tolerated, not fatal.
#[must_use]
pub fn resolve_items<'a>(board: &'a BoardState, column_id: &str) -> Vec<&'a Widget> {
    let Some(column) = board.column(column_id) else {
        return Vec::new();
    };
    column.items.iter().filter_map(|id| board.widgets.get(id)).collect()
}

// =============================================================================
// MOVES
// =============================================================================

/// Reorder within a column. No-op (returns `false`) when the indices are
/// equal or either is out of range.
pub fn move_within_column(board: &mut BoardState, column_id: &str, from_index: usize, to_index: usize) -> bool {
    let Some(column) = board.column_mut(column_id) else {
        return false;
    };
    if from_index == to_index || from_index >= column.items.len() || to_index >= column.items.len() {
        return false;
    }

    let widget_id = column.items.remove(from_index);
    column.items.insert(to_index, widget_id);
    true
}

/// Move a widget from one column to another, inserting at `dest_index`
/// clamped to `[0, len]`. Clamping covers the case where the index was
/// computed against a sibling widget that has since moved away: the item is
/// appended instead of the call failing.
///
/// No-op (returns `false`) when either column is unknown, the columns are
/// the same, or the source does not actually hold the widget.
pub fn move_between_columns(
    board: &mut BoardState,
    widget_id: &str,
    source_column_id: &str,
    dest_column_id: &str,
    dest_index: usize,
) -> bool {
    if source_column_id == dest_column_id {
        return false;
    }
    if !board.columns.contains_key(dest_column_id) {
        return false;
    }

    // Remove from source first; bail without touching dest if absent so the
    // widget can never end up duplicated.
    let Some(source) = board.column_mut(source_column_id) else {
        return false;
    };
    let Some(position) = source.items.iter().position(|id| id == widget_id) else {
        return false;
    };
    let moved = source.items.remove(position);

    match board.column_mut(dest_column_id) {
        Some(dest) => {
            let index = dest_index.min(dest.items.len());
            dest.items.insert(index, moved);
            true
        }
        // Unreachable (dest presence checked above); restore rather than drop.
        None => {
            if let Some(source) = board.column_mut(source_column_id) {
                let index = position.min(source.items.len());
                source.items.insert(index, moved);
            }
            false
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
