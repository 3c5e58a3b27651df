//! Layout-engine services.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the board's mutation logic and the persistence
//! pipeline so composition code (`app.rs`, `main.rs`) can stay focused on
//! wiring user actions to the shared state.

pub mod drag;
pub mod layout;
pub mod lifecycle;
pub mod model;
pub mod persistence;
