//! Top toolbar rendering: refresh control, backend address, fetch status.

use crossbeam_channel::Sender;
use eframe::egui::{self, Color32, RichText, Stroke};

use crate::protocol::BackendAction;
use crate::ui::theme::FarmTheme;

/// Actions that the toolbar can request
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    /// User clicked Refresh
    Refresh,
    /// User committed a new backend URL (already sent to the backend;
    /// the app persists it)
    BackendUrlChanged(String),
    /// User toggled dark/light theme
    ToggleTheme,
}

/// Render the top toolbar.
/// Returns Some(ToolbarAction) if an action was requested.
pub fn render_toolbar(
    ui: &mut egui::Ui,
    backend_url_input: &mut String,
    loading: bool,
    record_count: usize,
    last_error: Option<&str>,
    action_tx: &Sender<BackendAction>,
) -> Option<ToolbarAction> {
    let mut toolbar_action: Option<ToolbarAction> = None;
    let theme = FarmTheme::for_ui(ui);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.spacing_mut().button_padding = egui::vec2(8.0, 4.0);

        ui.label(
            RichText::new("🌾 FarmAssist History")
                .size(14.0)
                .strong()
                .color(theme.accent),
        );

        ui.separator();

        let response = ui.add(
            egui::TextEdit::singleline(backend_url_input)
                .hint_text("http://localhost:8000")
                .desired_width(220.0),
        );
        if response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter))
            && !backend_url_input.trim().is_empty()
        {
            let url = backend_url_input.trim().to_string();
            let _ = action_tx.send(BackendAction::SetBackendUrl(url.clone()));
            toolbar_action = Some(ToolbarAction::BackendUrlChanged(url));
        }

        if ui.add_enabled(!loading, egui::Button::new("⟳ Refresh")).clicked() {
            toolbar_action = Some(ToolbarAction::Refresh);
        }

        if ui.button("🌓").on_hover_text("Toggle theme").clicked() {
            toolbar_action = Some(ToolbarAction::ToggleTheme);
        }

        // Right side - fetch status indicator
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            let center = rect.center();
            match last_error {
                Some(err) => {
                    // Red dot with the failure message on hover
                    ui.painter().circle_filled(center, 4.0, theme.error);
                    response.on_hover_text(err.to_string());
                }
                None if loading => {
                    ui.painter()
                        .circle_stroke(center, 4.0, Stroke::new(1.5, theme.warning));
                }
                None => {
                    // Green glowing dot for a healthy last fetch
                    ui.painter().circle_filled(
                        center,
                        6.0,
                        Color32::from_rgba_unmultiplied(34, 197, 94, 40),
                    );
                    ui.painter().circle_filled(center, 4.0, Color32::from_rgb(34, 197, 94));
                }
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} conversations", record_count))
                    .color(theme.text_secondary)
                    .small(),
            );
        });
    });

    toolbar_action
}
