mod app;
mod registry;
mod services;
mod state;
mod store;

use std::sync::Arc;

use app::BoardApp;
use registry::WidgetRegistry;
use services::persistence::PersistenceConfig;
use store::JsonFileStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state_path = std::env::var("BOARD_STATE_PATH").unwrap_or_else(|_| "board.json".into());
    let store = Arc::new(JsonFileStore::new(&state_path));

    let app = BoardApp::load(store, WidgetRegistry::with_defaults(), PersistenceConfig::from_env()).await;

    for (column_id, views) in app.render_columns().await {
        tracing::info!(column = %column_id, widgets = views.len(), "column loaded");
        for view in views {
            tracing::debug!(%view, "widget");
        }
    }

    tracing::info!(%state_path, "startboard running; ctrl-c to exit");
    tokio::signal::ctrl_c().await.expect("failed to listen for ctrl-c");

    // Teardown cancels any pending debounced write.
    app.shutdown().await;
}
