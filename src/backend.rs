//! Async network backend (runs in a separate thread).
//!
//! Owns a Tokio runtime and a reqwest client, drains actions from the UI,
//! fetches the conversation history on demand and on a periodic refresh,
//! and reports results back as `GuiEvent`s. The UI thread never blocks on
//! the network.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;

use crate::protocol::{BackendAction, GuiEvent};
use crate::record::ConversationRecord;

/// HTTP timeout for a single history fetch
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    initial_url: String,
    initial_refresh_secs: u64,
) {
    // Create a Tokio runtime for this thread
    let rt = Runtime::new().expect("Failed to create Tokio runtime");

    rt.block_on(async move {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        let mut backend_url = initial_url;
        let refresh_secs = initial_refresh_secs;
        let mut last_fetch: Option<Instant> = None;

        loop {
            // Check for actions from the UI (non-blocking)
            let mut fetch_now = false;
            while let Ok(action) = action_rx.try_recv() {
                match action {
                    BackendAction::FetchConversations => {
                        fetch_now = true;
                    }
                    BackendAction::SetBackendUrl(url) => {
                        backend_url = url;
                        fetch_now = true;
                    }
                }
            }

            // Periodic refresh; the first pass through the loop always
            // fetches, even with polling disabled
            let refresh_due = match last_fetch {
                None => true,
                Some(t) => refresh_secs > 0 && t.elapsed().as_secs() >= refresh_secs,
            };

            if fetch_now || refresh_due {
                last_fetch = Some(Instant::now());
                match fetch_conversations(&client, &backend_url).await {
                    Ok(records) => {
                        let _ = event_tx.send(GuiEvent::Conversations(records));
                    }
                    Err(e) => {
                        let _ = event_tx.send(GuiEvent::FetchFailed(e));
                    }
                }
            }

            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });
}

pub(crate) fn conversations_url(backend_url: &str) -> String {
    format!("{}/api/conversations", backend_url.trim_end_matches('/'))
}

/// GET /api/conversations and decode the JSON array. The server returns
/// records ordered newest first; that order is preserved.
async fn fetch_conversations(
    client: &reqwest::Client,
    backend_url: &str,
) -> Result<Vec<ConversationRecord>, String> {
    let url = conversations_url(backend_url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Request to {} failed: {}", url, e))?;

    let response = response
        .error_for_status()
        .map_err(|e| format!("Server error: {}", e))?;

    response
        .json::<Vec<ConversationRecord>>()
        .await
        .map_err(|e| format!("Failed to decode conversations: {}", e))
}
