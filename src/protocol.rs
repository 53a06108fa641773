//! Channel protocol between the UI thread and the network backend.

use crate::record::ConversationRecord;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendAction {
    /// Fetch the conversation history now
    FetchConversations,
    /// Point the backend at a different FarmAssist server
    SetBackendUrl(String),
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum GuiEvent {
    /// A fetch completed; full snapshot of the history, newest first
    Conversations(Vec<ConversationRecord>),
    /// A fetch failed; the UI keeps its last good snapshot
    FetchFailed(String),
}
