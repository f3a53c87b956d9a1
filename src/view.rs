use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// A lookup is in flight
    pub loading: bool,
    /// The card list should be shown
    pub results_visible: bool,
    /// Inline message for the city field
    pub field_message: Option<String>,
    /// Why the most recent lookup failed, cleared by the next success
    pub last_error: Option<String>,
}

/// Flags and messages a presentation layer reads alongside the store
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    inner: Arc<RwLock<ViewSnapshot>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.inner.read().await.clone()
    }

    pub(crate) async fn show_field_message(&self, message: String) {
        self.inner.write().await.field_message = Some(message);
    }

    /// Loader on, results hidden, field message cleared
    pub(crate) async fn begin_lookup(&self) {
        let mut view = self.inner.write().await;
        view.loading = true;
        view.results_visible = false;
        view.field_message = None;
    }

    pub(crate) async fn record_success(&self) {
        self.inner.write().await.last_error = None;
    }

    pub(crate) async fn record_failure(&self, message: String) {
        self.inner.write().await.last_error = Some(message);
    }

    /// Runs after every lookup, successful or not
    pub(crate) async fn finish_lookup(&self) {
        let mut view = self.inner.write().await;
        view.loading = false;
        view.results_visible = true;
    }
}
