use crate::completion::CompletionClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Chat-completions client, constructed once at startup.
    pub completion: CompletionClient,
}
