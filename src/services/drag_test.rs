use super::*;
use crate::state::test_helpers::{reachable_ids, scenario_board};
use crate::state::{COL_1, COL_2, COL_3};

fn items(board: &BoardState, column_id: &str) -> Vec<String> {
    board.column(column_id).expect("column should exist").items.clone()
}

// =============================================================================
// Target resolution
// =============================================================================

#[test]
fn resolve_widget_id_maps_to_owning_column_and_position() {
    let board = scenario_board();
    let target = resolve_drop_target(&board, "w-links").unwrap();
    assert_eq!(target, DropTarget { column_id: COL_1.to_string(), index: 1 });
}

#[test]
fn resolve_column_id_maps_to_column_end() {
    let board = scenario_board();
    let target = resolve_drop_target(&board, COL_2).unwrap();
    assert_eq!(target, DropTarget { column_id: COL_2.to_string(), index: 1 });

    // Degenerate target on an empty column.
    let target = resolve_drop_target(&board, COL_3).unwrap();
    assert_eq!(target, DropTarget { column_id: COL_3.to_string(), index: 0 });
}

#[test]
fn resolve_unknown_id_is_none() {
    let board = scenario_board();
    assert!(resolve_drop_target(&board, "nonsense").is_none());
}

#[test]
fn resolve_orphaned_column_is_none() {
    let mut board = scenario_board();
    // Leftover from a 4->3 switch: in `columns` but not `columns_order`.
    board.columns.insert("col-4".to_string(), crate::state::Column::empty("col-4"));
    assert!(resolve_drop_target(&board, "col-4").is_none());
}

// =============================================================================
// Drag start
// =============================================================================

#[test]
fn drag_start_captures_preview_without_mutating() {
    let mut drag = DragCoordinator::new();
    let board = scenario_board();
    let before = board.clone();

    drag.on_drag_start(&board, "w-links");

    assert!(drag.is_dragging());
    assert_eq!(drag.preview().map(|w| w.id.as_str()), Some("w-links"));
    assert_eq!(board, before);
}

#[test]
fn drag_start_on_unknown_widget_still_enters_dragging() {
    let mut drag = DragCoordinator::new();
    let board = scenario_board();

    drag.on_drag_start(&board, "w-ghost");
    assert!(drag.is_dragging());
    assert!(drag.preview().is_none());
}

// =============================================================================
// Drag over
// =============================================================================

#[test]
fn drag_over_other_column_commits_move_live() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-links");
    drag.on_drag_over(&mut board, "w-links", Some("w-weather"));

    assert_eq!(items(&board, COL_1), vec!["w-news"]);
    assert_eq!(items(&board, COL_2), vec!["w-links", "w-weather"]);
    assert!(drag.is_dragging(), "drag continues after live migration");
}

#[test]
fn drag_over_same_column_defers_reorder() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-links");
    drag.on_drag_over(&mut board, "w-links", Some("w-news"));

    assert_eq!(items(&board, COL_1), vec!["w-news", "w-links"]);
}

#[test]
fn drag_over_is_idempotent_under_repeated_events() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-links");
    for _ in 0..10 {
        drag.on_drag_over(&mut board, "w-links", Some(COL_2));
    }

    assert_eq!(items(&board, COL_2), vec!["w-weather", "w-links"]);
    let mut ids = reachable_ids(&board);
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before, "repeated hovers must not duplicate");
}

#[test]
fn drag_over_column_header_resolves_to_column() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-news");
    drag.on_drag_over(&mut board, "w-news", Some(COL_3));

    assert_eq!(items(&board, COL_3), vec!["w-news"]);
}

#[test]
fn drag_over_unresolvable_target_is_noop() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-links");
    let before = board.clone();
    drag.on_drag_over(&mut board, "w-links", Some("garbage"));
    drag.on_drag_over(&mut board, "w-links", None);
    assert_eq!(board, before);
}

#[test]
fn drag_over_without_start_is_ignored() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();
    let before = board.clone();

    drag.on_drag_over(&mut board, "w-links", Some(COL_2));
    assert_eq!(board, before);
}

#[test]
fn drag_over_hovering_self_is_noop() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-links");
    let before = board.clone();
    drag.on_drag_over(&mut board, "w-links", Some("w-links"));
    assert_eq!(board, before);
}

// =============================================================================
// Drag end
// =============================================================================

#[test]
fn drag_end_same_column_applies_reorder() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-links");
    drag.on_drag_over(&mut board, "w-links", Some("w-news"));
    drag.on_drag_end(&mut board, "w-links", Some("w-news"));

    assert_eq!(items(&board, COL_1), vec!["w-links", "w-news"]);
    assert!(!drag.is_dragging());
    assert!(drag.preview().is_none());
}

#[test]
fn drag_end_same_position_changes_nothing() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-links");
    let before = board.clone();
    drag.on_drag_end(&mut board, "w-links", Some("w-links"));
    assert_eq!(board, before);
}

#[test]
fn drag_end_with_no_target_keeps_committed_moves() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-links");
    drag.on_drag_over(&mut board, "w-links", Some(COL_2));
    drag.on_drag_end(&mut board, "w-links", None);

    // The live cross-column migration stands; nothing is rolled back.
    assert_eq!(items(&board, COL_1), vec!["w-news"]);
    assert_eq!(items(&board, COL_2), vec!["w-weather", "w-links"]);
    assert!(!drag.is_dragging());
}

#[test]
fn drag_end_commits_final_container_when_it_differs() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    // The sensor skipped the hover over col-3; the drop still lands there.
    drag.on_drag_start(&board, "w-links");
    drag.on_drag_over(&mut board, "w-links", Some(COL_2));
    drag.on_drag_end(&mut board, "w-links", Some(COL_3));

    assert_eq!(items(&board, COL_2), vec!["w-weather"]);
    assert_eq!(items(&board, COL_3), vec!["w-links"]);
}

#[test]
fn drag_end_on_own_column_moves_to_end() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();

    drag.on_drag_start(&board, "w-news");
    drag.on_drag_end(&mut board, "w-news", Some(COL_1));

    assert_eq!(items(&board, COL_1), vec!["w-links", "w-news"]);
}

#[test]
fn drag_end_without_start_is_ignored() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();
    let before = board.clone();

    drag.on_drag_end(&mut board, "w-links", Some(COL_2));
    assert_eq!(board, before);
}

#[test]
fn full_lifecycle_conserves_widget_ids() {
    let mut drag = DragCoordinator::new();
    let mut board = scenario_board();
    let before = reachable_ids(&board);

    drag.on_drag_start(&board, "w-links");
    drag.on_drag_over(&mut board, "w-links", Some("w-weather"));
    drag.on_drag_over(&mut board, "w-links", Some(COL_3));
    drag.on_drag_over(&mut board, "w-links", Some("w-news"));
    drag.on_drag_end(&mut board, "w-links", Some("w-news"));

    assert_eq!(reachable_ids(&board), before);
}
