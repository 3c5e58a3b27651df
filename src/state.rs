//! Board data model and shared state.
//!
//! DESIGN
//! ======
//! `BoardState` is the whole persisted record: layout mode, column order,
//! columns, and widgets. It lives behind an `Arc<RwLock<_>>` so user-action
//! entry points and the persistence worker share one copy. Mutations are
//! short synchronous critical sections; the persistence worker snapshots
//! the state at write time.
//!
//! Column `items` hold widget ids, not widgets — placement and content are
//! deliberately separate maps, and `items` order is meaningful (top to
//! bottom within a column).

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

// =============================================================================
// COLUMN IDS
// =============================================================================

/// Permanent columns, present in every board.
pub const COL_1: &str = "col-1";
pub const COL_2: &str = "col-2";
pub const COL_3: &str = "col-3";
/// Exists only while the board is in 4-column mode.
pub const COL_4: &str = "col-4";

// =============================================================================
// WIDGET
// =============================================================================

/// Closed set of widget kinds the board can host.
///
/// Content rendering for each kind lives outside this crate; the core only
/// needs a stable tag for registry lookups and id generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    News,
    Weather,
    Clock,
    Timer,
    Search,
    Bookmarks,
    Notes,
    Todo,
}

impl WidgetKind {
    /// Short tag used as the id prefix for generated widget ids.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Weather => "weather",
            Self::Clock => "clock",
            Self::Timer => "timer",
            Self::Search => "search",
            Self::Bookmarks => "bookmarks",
            Self::Notes => "notes",
            Self::Todo => "todo",
        }
    }
}

/// A typed, titled unit of content identified by an opaque string id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub kind: WidgetKind,
    pub title: String,
    /// Widget-specific payload, opaque to the layout engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Layout hint in pixels; `None` means the renderer's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
}

// =============================================================================
// COLUMN
// =============================================================================

/// An ordered container of widget ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Widget ids top-to-bottom. Order defines placement.
    pub items: Vec<String>,
}

impl Column {
    #[must_use]
    pub fn empty(id: &str) -> Self {
        Self { id: id.to_string(), title: None, items: Vec::new() }
    }
}

// =============================================================================
// LAYOUT MODE
// =============================================================================

/// Count of simultaneously visible columns. Persisted as the number 3 or 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LayoutMode {
    Three,
    Four,
}

impl LayoutMode {
    #[must_use]
    pub fn column_count(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl From<LayoutMode> for u8 {
    fn from(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Three => 3,
            LayoutMode::Four => 4,
        }
    }
}

impl TryFrom<u8> for LayoutMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(format!("invalid layout mode: {other}")),
        }
    }
}

// =============================================================================
// BOARD STATE
// =============================================================================

/// The whole board. Serialized as a single record; loaded and saved whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub layout_mode: LayoutMode,
    /// Column ids left to right. Rendering shows the first
    /// `layout_mode.column_count()` entries.
    pub columns_order: Vec<String>,
    pub columns: HashMap<String, Column>,
    pub widgets: HashMap<String, Widget>,
}

impl BoardState {
    #[must_use]
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.get(column_id)
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.get_mut(column_id)
    }

    /// Column ids actually rendered under the current layout mode.
    pub fn rendered_columns(&self) -> impl Iterator<Item = &str> {
        self.columns_order
            .iter()
            .take(self.layout_mode.column_count())
            .map(String::as_str)
    }
}

/// Shared handle to the live board.
pub type SharedBoard = Arc<RwLock<BoardState>>;

#[must_use]
pub fn shared(board: BoardState) -> SharedBoard {
    Arc::new(RwLock::new(board))
}

// =============================================================================
// DEFAULT SEED
// =============================================================================

/// Fixed starter board used when no persisted record exists or the record
/// fails to parse: 3 columns, 8 sample widgets.
#[must_use]
pub fn default_seed() -> BoardState {
    fn widget(id: &str, kind: WidgetKind, title: &str) -> (String, Widget) {
        (
            id.to_string(),
            Widget { id: id.to_string(), kind, title: title.to_string(), data: None, min_height: None },
        )
    }

    fn column(id: &str, items: &[&str]) -> (String, Column) {
        (
            id.to_string(),
            Column { id: id.to_string(), title: None, items: items.iter().map(ToString::to_string).collect() },
        )
    }

    BoardState {
        layout_mode: LayoutMode::Three,
        columns_order: vec![COL_1.to_string(), COL_2.to_string(), COL_3.to_string()],
        columns: HashMap::from([
            column(COL_1, &["w-news", "w-bookmarks", "w-todo"]),
            column(COL_2, &["w-weather", "w-search", "w-notes"]),
            column(COL_3, &["w-clock", "w-timer"]),
        ]),
        widgets: HashMap::from([
            widget("w-news", WidgetKind::News, "News"),
            widget("w-bookmarks", WidgetKind::Bookmarks, "Bookmarks"),
            widget("w-todo", WidgetKind::Todo, "To-do"),
            widget("w-weather", WidgetKind::Weather, "Weather"),
            widget("w-search", WidgetKind::Search, "Search"),
            widget("w-notes", WidgetKind::Notes, "Notes"),
            widget("w-clock", WidgetKind::Clock, "Clock"),
            widget("w-timer", WidgetKind::Timer, "Timer"),
        ]),
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
