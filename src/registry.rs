//! Widget registry — kind to `{label, renderer}` mapping.
//!
//! DESIGN
//! ======
//! The registry is composed at startup and injected wherever a widget kind
//! needs a display label (new-widget titles) or a view (board rendering).
//! This keeps the layout engine free of per-widget presentation logic: the
//! core hands over `(id, kind, title, data, min_height)` and the registered
//! renderer does the rest.
//!
//! Kinds without a registered entry fall back to a generic label and a
//! neutral placeholder view rather than failing.

use std::collections::HashMap;

use crate::state::{Widget, WidgetKind};

/// Label used for kinds with no registered entry.
pub const GENERIC_LABEL: &str = "Widget";

/// Produces a view for a widget. The engine treats the output as opaque.
pub type RenderFn = Box<dyn Fn(&Widget) -> String + Send + Sync>;

pub struct RegistryEntry {
    pub label: String,
    pub renderer: RenderFn,
}

#[derive(Default)]
pub struct WidgetRegistry {
    entries: HashMap<WidgetKind, RegistryEntry>,
}

impl WidgetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a label and a plain-text renderer for every kind.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (kind, label) in [
            (WidgetKind::News, "News"),
            (WidgetKind::Weather, "Weather"),
            (WidgetKind::Clock, "Clock"),
            (WidgetKind::Timer, "Timer"),
            (WidgetKind::Search, "Search"),
            (WidgetKind::Bookmarks, "Bookmarks"),
            (WidgetKind::Notes, "Notes"),
            (WidgetKind::Todo, "To-do"),
        ] {
            registry.register(kind, label, Box::new(|widget: &Widget| format!("[{}] {}", widget.id, widget.title)));
        }
        registry
    }

    pub fn register(&mut self, kind: WidgetKind, label: &str, renderer: RenderFn) {
        self.entries.insert(kind, RegistryEntry { label: label.to_string(), renderer });
    }

    /// Display label for a kind; unknown kinds get the generic fallback.
    #[must_use]
    pub fn label_for(&self, kind: WidgetKind) -> &str {
        self.entries.get(&kind).map_or(GENERIC_LABEL, |entry| entry.label.as_str())
    }

    /// Render a widget via its registered renderer, or a neutral placeholder
    /// when the kind has no entry.
    #[must_use]
    pub fn render(&self, widget: &Widget) -> String {
        match self.entries.get(&widget.kind) {
            Some(entry) => (entry.renderer)(widget),
            None => format!("[{}] {}", widget.id, GENERIC_LABEL),
        }
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
