//! UI rendering modules for the history viewer, organized by component:
//! - `toolbar`: Top bar with refresh, backend address, and fetch status
//! - `history`: Conversation list (loading/empty states, record cards)
//! - `theme`: Color schemes and styling utilities

pub mod history;
pub mod theme;
pub mod toolbar;

pub use history::render_history;
pub use toolbar::{render_toolbar, ToolbarAction};
