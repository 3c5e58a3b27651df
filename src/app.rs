//! Board application — wires user actions to the model and the save pipeline.
//!
//! DESIGN
//! ======
//! `BoardApp` owns the shared board, the drag coordinator, and the
//! persistence gateway. Every user action (drag events from the input
//! capture component, toolbar buttons for add/remove/resize and layout
//! switching) goes through here: take the write lock, apply the mutation,
//! release, then tell the gateway a change happened so the debounce timer
//! restarts. Actions that turn out to be no-ops schedule nothing.

use std::sync::Arc;

use tokio::sync::watch;

use crate::registry::WidgetRegistry;
use crate::services::drag::DragCoordinator;
use crate::services::layout::switch_layout_mode;
use crate::services::lifecycle::{add_widget, remove_widget, resize_widget};
use crate::services::model::resolve_items;
use crate::services::persistence::{PersistenceConfig, PersistenceGateway, SaveStatus};
use crate::state::{LayoutMode, SharedBoard, Widget, WidgetKind, shared};
use crate::store::{BoardStore, load_or_seed};

pub struct BoardApp {
    board: SharedBoard,
    registry: WidgetRegistry,
    drag: DragCoordinator,
    gateway: PersistenceGateway,
}

impl BoardApp {
    /// Load the persisted board (or the default seed) and start the save
    /// worker.
    pub async fn load(store: Arc<dyn BoardStore>, registry: WidgetRegistry, config: PersistenceConfig) -> Self {
        let board = shared(load_or_seed(store.as_ref()).await);
        let gateway = PersistenceGateway::spawn(board.clone(), store, config);
        Self { board, registry, drag: DragCoordinator::new(), gateway }
    }

    #[must_use]
    pub fn board(&self) -> &SharedBoard {
        &self.board
    }

    #[must_use]
    pub fn save_status(&self) -> SaveStatus {
        self.gateway.status()
    }

    #[must_use]
    pub fn subscribe_save_status(&self) -> watch::Receiver<SaveStatus> {
        self.gateway.subscribe()
    }

    /// The dragged widget's captured value, for preview rendering.
    #[must_use]
    pub fn drag_preview(&self) -> Option<&Widget> {
        self.drag.preview()
    }

    // =========================================================================
    // DRAG EVENTS (from the input-capture component)
    // =========================================================================

    pub async fn drag_started(&mut self, active_id: &str) {
        let board = self.board.read().await;
        self.drag.on_drag_start(&board, active_id);
    }

    pub async fn dragged_over(&mut self, active_id: &str, over_id: Option<&str>) {
        let changed = {
            let mut board = self.board.write().await;
            self.drag.on_drag_over(&mut board, active_id, over_id)
        };
        if changed {
            self.gateway.notify_change();
        }
    }

    pub async fn drag_ended(&mut self, active_id: &str, over_id: Option<&str>) {
        let changed = {
            let mut board = self.board.write().await;
            self.drag.on_drag_end(&mut board, active_id, over_id)
        };
        if changed {
            self.gateway.notify_change();
        }
    }

    // =========================================================================
    // BUTTON ACTIONS
    // =========================================================================

    pub async fn add_widget(&self, column_id: &str, kind: WidgetKind) -> Option<Widget> {
        let created = {
            let mut board = self.board.write().await;
            add_widget(&mut board, &self.registry, column_id, kind)
        };
        if created.is_some() {
            self.gateway.notify_change();
        }
        created
    }

    pub async fn remove_widget(&self, widget_id: &str) {
        let changed = {
            let mut board = self.board.write().await;
            remove_widget(&mut board, widget_id)
        };
        if changed {
            self.gateway.notify_change();
        }
    }

    pub async fn resize_widget(&self, widget_id: &str, min_height: u32) {
        let changed = {
            let mut board = self.board.write().await;
            resize_widget(&mut board, widget_id, min_height)
        };
        if changed {
            self.gateway.notify_change();
        }
    }

    pub async fn set_layout_mode(&self, mode: LayoutMode) {
        let changed = {
            let mut board = self.board.write().await;
            switch_layout_mode(&mut board, mode)
        };
        if changed {
            self.gateway.notify_change();
        }
    }

    /// Explicit user save, bypassing the debounce.
    pub fn save_now(&self) {
        self.gateway.save_now();
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    /// Render each visible column through the registry: one line per widget,
    /// dangling references filtered out.
    pub async fn render_columns(&self) -> Vec<(String, Vec<String>)> {
        let board = self.board.read().await;
        board
            .rendered_columns()
            .map(|column_id| {
                let views = resolve_items(&board, column_id)
                    .into_iter()
                    .map(|widget| self.registry.render(widget))
                    .collect();
                (column_id.to_string(), views)
            })
            .collect()
    }

    /// Stop the save worker; a pending debounced write is cancelled.
    pub async fn shutdown(self) {
        self.gateway.shutdown().await;
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
