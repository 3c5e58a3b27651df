//! Drag coordinator — Idle → Dragging → Idle over the three-event lifecycle.
//!
//! DESIGN
//! ======
//! An external input-capture component resolves pointer/touch gestures into
//! `(active_id, over_id)` pairs; this module is agnostic to activation
//! thresholds and collision heuristics. Cross-column moves are committed
//! live during drag-over so the user sees where the item will land;
//! same-column reorders are deferred to drag-end. Drag-over fires many
//! times per second with the same logical target, so every handler is a
//! no-op when the model already matches the event.
//!
//! Drag-end also commits the final hovered container when it differs from
//! the item's current container, so the model can never end out of sync
//! with the visually implied drop location even if the last hover event
//! was missed. A drop with no target (`over == None`) mutates nothing, but
//! moves already committed by earlier hovers stand; they are not rolled
//! back.
//!
//! ERROR HANDLING
//! ==============
//! Unresolvable drop targets and events that do not match the current drag
//! state are no-ops, never errors.

use tracing::debug;

use crate::services::model::{locate_column_id_of_widget, move_between_columns, move_within_column};
use crate::state::{BoardState, Widget};

// =============================================================================
// TYPES
// =============================================================================

/// Where a hover or drop resolves to: a column and a position within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub column_id: String,
    pub index: usize,
}

#[derive(Debug, Clone)]
struct ActiveDrag {
    widget_id: String,
    /// Snapshot of the dragged widget for preview rendering.
    preview: Option<Widget>,
}

/// Interprets drag lifecycle events and drives board mutations.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    active: Option<ActiveDrag>,
}

// =============================================================================
// TARGET RESOLUTION
// =============================================================================

/// Resolve an `over` id to a drop target. A widget id maps to its owning
/// column and position; a column id (degenerate targets: headers, empty
/// column space) maps to that column's end. Anything else is unresolvable.
/// Only columns listed in `columns_order` qualify — an orphaned column
/// entry left behind by a layout switch must not swallow widgets.
#[must_use]
pub fn resolve_drop_target(board: &BoardState, over_id: &str) -> Option<DropTarget> {
    if board.columns_order.iter().any(|id| id == over_id) {
        if let Some(column) = board.column(over_id) {
            return Some(DropTarget { column_id: column.id.clone(), index: column.items.len() });
        }
    }

    let column = crate::services::model::locate_column_of_widget(board, over_id)?;
    let index = column.items.iter().position(|id| id == over_id)?;
    Some(DropTarget { column_id: column.id.clone(), index })
}

// =============================================================================
// LIFECYCLE
// =============================================================================

impl DragCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The dragged widget's captured value, for preview rendering.
    #[must_use]
    pub fn preview(&self) -> Option<&Widget> {
        self.active.as_ref().and_then(|drag| drag.preview.as_ref())
    }

    /// Enter Dragging: capture the widget's value for the preview. No model
    /// mutation happens here.
    pub fn on_drag_start(&mut self, board: &BoardState, active_id: &str) {
        self.active = Some(ActiveDrag {
            widget_id: active_id.to_string(),
            preview: board.widgets.get(active_id).cloned(),
        });
    }

    /// Hover: commit a cross-column move immediately so feedback is live.
    /// Same-column hovers change nothing; reordering waits for drag-end.
    /// Returns whether the board was mutated.
    pub fn on_drag_over(&mut self, board: &mut BoardState, active_id: &str, over_id: Option<&str>) -> bool {
        if !self.matches(active_id) {
            debug!(active_id, "drag-over without matching drag state; ignoring");
            return false;
        }
        let Some(over_id) = over_id else {
            return false;
        };
        if over_id == active_id {
            return false;
        }

        let Some(target) = resolve_drop_target(board, over_id) else {
            return false;
        };
        let Some(current_column) = locate_column_id_of_widget(board, active_id) else {
            return false;
        };

        if target.column_id == current_column {
            return false;
        }
        move_between_columns(board, active_id, &current_column, &target.column_id, target.index)
    }

    /// Drop: clear the preview, then settle the final position. Cross-column
    /// if the final container differs; within-column reorder if it matches
    /// and the indices differ; nothing when the target is unresolvable.
    /// Returns whether the board was mutated.
    pub fn on_drag_end(&mut self, board: &mut BoardState, active_id: &str, over_id: Option<&str>) -> bool {
        let was_dragging = self.matches(active_id);
        self.active = None;
        if !was_dragging {
            debug!(active_id, "drag-end without matching drag state; ignoring");
            return false;
        }

        let Some(over_id) = over_id else {
            return false;
        };
        let Some(target) = resolve_drop_target(board, over_id) else {
            return false;
        };
        let Some(current_column) = locate_column_id_of_widget(board, active_id) else {
            return false;
        };

        if target.column_id != current_column {
            return move_between_columns(board, active_id, &current_column, &target.column_id, target.index);
        }

        let Some(column) = board.column(&current_column) else {
            return false;
        };
        let Some(from_index) = column.items.iter().position(|id| id == active_id) else {
            return false;
        };
        // A drop on the column itself means "end of column".
        let to_index = target.index.min(column.items.len().saturating_sub(1));
        if from_index == to_index {
            return false;
        }
        move_within_column(board, &current_column, from_index, to_index)
    }

    fn matches(&self, active_id: &str) -> bool {
        self.active.as_ref().is_some_and(|drag| drag.widget_id == active_id)
    }
}

#[cfg(test)]
#[path = "drag_test.rs"]
mod tests;
