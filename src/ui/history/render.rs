//! Central history panel: loading state, empty state, or the card list.

use eframe::egui::{self, RichText};

use crate::record::ConversationRecord;
use crate::ui::theme::FarmTheme;

use super::card;

/// What the history panel shows for a given input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewState {
    Loading,
    Empty,
    List,
}

/// Loading wins over everything; an empty list is a state of its own.
pub(crate) fn view_state(records: &[ConversationRecord], loading: bool) -> ViewState {
    if loading {
        ViewState::Loading
    } else if records.is_empty() {
        ViewState::Empty
    } else {
        ViewState::List
    }
}

/// Render the conversation history panel.
///
/// This is a pure function of `(records, loading)` plus the injected
/// backend base URL (needed only to build audio links): the caller owns
/// all state, this module only maps a snapshot to widgets, in input order.
pub fn render_history(
    ui: &mut egui::Ui,
    records: &[ConversationRecord],
    loading: bool,
    backend_url: &str,
) {
    let theme = FarmTheme::for_ui(ui);

    match view_state(records, loading) {
        ViewState::Loading => render_loading(ui, &theme),
        ViewState::Empty => render_empty(ui, &theme),
        ViewState::List => {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    for record in records {
                        // Widget ids are scoped per record id, which is
                        // unique within a snapshot
                        ui.push_id(record.id, |ui| {
                            card::render_card(ui, record, &theme, backend_url);
                        });
                        ui.add_space(10.0);
                    }
                    ui.add_space(8.0);
                });
        }
    }
}

fn render_loading(ui: &mut egui::Ui, theme: &FarmTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.add(egui::Spinner::new().size(28.0).color(theme.accent));
        ui.add_space(12.0);
        ui.label(
            RichText::new("Loading conversations...")
                .size(14.0)
                .color(theme.text_secondary),
        );
    });
}

fn render_empty(ui: &mut egui::Ui, theme: &FarmTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(
            RichText::new("📭 No conversations yet.")
                .size(16.0)
                .color(theme.text_primary),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new("Start by recording your first question!")
                .size(13.0)
                .color(theme.text_muted),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> ConversationRecord {
        serde_json::from_str(&format!(r#"{{"id": {}}}"#, id)).unwrap()
    }

    #[test]
    fn test_loading_wins_regardless_of_records() {
        assert_eq!(view_state(&[], true), ViewState::Loading);
        assert_eq!(view_state(&[record(1)], true), ViewState::Loading);
    }

    #[test]
    fn test_empty_and_list_states() {
        assert_eq!(view_state(&[], false), ViewState::Empty);
        assert_eq!(view_state(&[record(1), record(2)], false), ViewState::List);
    }
}
