//! Layout mode switcher — 3↔4 column reflow.
//!
//! DESIGN
//! ======
//! `col-1..col-3` are permanent; `col-4` exists only while in 4-column
//! mode. Going to 4 columns creates (or re-registers) an empty `col-4`;
//! going back to 3 drains its items onto the end of `col-3` so no widget
//! placement is ever lost. The drained `Column` value may stay behind in
//! `columns` unreferenced; rendering only iterates `columns_order`, so an
//! orphaned entry is harmless.

use tracing::info;

use crate::state::{BoardState, COL_3, COL_4, Column, LayoutMode};

/// Switch the board between 3- and 4-column layout. Idempotent (returns
/// `false`) when the mode already matches.
pub fn switch_layout_mode(board: &mut BoardState, new_mode: LayoutMode) -> bool {
    if board.layout_mode == new_mode {
        return false;
    }

    match new_mode {
        LayoutMode::Four => {
            if !board.columns_order.iter().any(|id| id == COL_4) {
                board.columns.entry(COL_4.to_string()).or_insert_with(|| Column::empty(COL_4));
                board.columns_order.push(COL_4.to_string());
            }
        }
        LayoutMode::Three => {
            // col-3 keeps its own order; col-4's items follow in theirs.
            let migrated = board.column_mut(COL_4).map(|col| std::mem::take(&mut col.items)).unwrap_or_default();
            if !migrated.is_empty() {
                match board.column_mut(COL_3) {
                    Some(col3) => {
                        info!(count = migrated.len(), "migrating col-4 items into col-3");
                        col3.items.extend(migrated);
                    }
                    // col-3 is permanent; if it is somehow gone, leave the
                    // items where they were rather than lose them.
                    None => {
                        if let Some(col4) = board.column_mut(COL_4) {
                            col4.items = migrated;
                        }
                        return false;
                    }
                }
            }
            board.columns_order.retain(|id| id != COL_4);
        }
    }

    board.layout_mode = new_mode;
    true
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
