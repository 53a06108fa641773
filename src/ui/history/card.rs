//! Single conversation card: header row plus one block per present field.

use eframe::egui::{self, RichText};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::format;
use crate::record::ConversationRecord;
use crate::ui::theme::{self, FarmTheme};

pub(crate) fn render_card(
    ui: &mut egui::Ui,
    record: &ConversationRecord,
    theme: &FarmTheme,
    backend_url: &str,
) {
    egui::Frame::new()
        .fill(theme.surface[2])
        .stroke(egui::Stroke::new(1.0, theme.border_subtle))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            render_header(ui, record, theme);

            if let Some(transcript) = record.transcript() {
                block(ui, theme, "👤 Your Question:", |ui| {
                    render_transcript_text(ui, transcript, theme);
                });
            }

            if let Some(crop) = record.crop() {
                block(ui, theme, "🌾 Crop:", |ui| {
                    ui.horizontal(|ui| {
                        theme::badge(ui, crop, theme::crop_color(crop));
                    });
                });
            }

            if let Some(code) = record.language() {
                block(ui, theme, "🌐 Language:", |ui| {
                    ui.horizontal(|ui| {
                        theme::badge(ui, format::language_label(code), theme.info);
                    });
                });
            }

            if let Some((disease, confidence)) = record.vision() {
                block(ui, theme, "🔍 Vision Analysis:", |ui| {
                    ui.label(
                        RichText::new(format::vision_label(disease, confidence))
                            .size(14.0)
                            .color(theme.text_primary),
                    );
                });
            }

            if let Some(temperature) = record.first_temperature() {
                block(ui, theme, "🌤 Weather:", |ui| {
                    ui.label(
                        RichText::new(format::temperature_label(temperature))
                            .size(14.0)
                            .color(theme.text_primary),
                    );
                });
            }

            if let Some((lat, lon)) = record.gps_coords() {
                block(ui, theme, "📍 Location:", |ui| {
                    ui.label(
                        RichText::new(format::gps_label(lat, lon))
                            .size(14.0)
                            .color(theme.text_primary),
                    );
                });
            }

            if let Some(url) = record.media_url() {
                block(ui, theme, "🖼 Image:", |ui| {
                    // Opens in the system browser; an external open sends
                    // no referrer and shares no window handle
                    ui.hyperlink_to(
                        RichText::new("View Image").size(14.0).color(theme.info),
                        url.to_string(),
                    );
                });
            }

            if let Some(path) = record.tts_path() {
                // Suppressed entirely when the base URL is unparseable
                if let Some(url) = format::tts_url(backend_url, path) {
                    block(ui, theme, "🔊 Audio Response:", |ui| {
                        ui.hyperlink_to(
                            RichText::new("▶ Play response").size(14.0).color(theme.accent),
                            url,
                        );
                    });
                }
            }
        });
}

fn render_header(ui: &mut egui::Ui, record: &ConversationRecord, theme: &FarmTheme) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("#{}", record.id))
                .size(14.0)
                .strong()
                .color(theme.accent),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(format::format_date(record.created_at.as_deref()))
                .size(11.0)
                .color(theme.text_muted),
        );

        if let Some(confidence) = record.confidence {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                theme::badge(ui, &format::confidence_label(confidence), theme.success);
            });
        }
    });
}

/// One labelled block: muted label row, indented content below it
fn block(
    ui: &mut egui::Ui,
    theme: &FarmTheme,
    label: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    ui.add_space(6.0);
    ui.label(RichText::new(label).size(12.0).color(theme.text_muted));
    ui.indent(label, add_contents);
}

/// Render transcript text, turning bare URLs into hyperlinks
fn render_transcript_text(ui: &mut egui::Ui, text: &str, theme: &FarmTheme) {
    static URL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(https?://[^\s]+)").expect("URL regex pattern is valid"));

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        for word in text.split_inclusive(char::is_whitespace) {
            if URL_RE.is_match(word.trim()) {
                let url = word.trim();
                ui.hyperlink_to(RichText::new(url).size(14.0).color(theme.info), url.to_string());
                if word.ends_with(char::is_whitespace) {
                    ui.label(" ");
                }
            } else {
                ui.label(RichText::new(word).size(14.0).color(theme.text_primary));
            }
        }
    });
}
