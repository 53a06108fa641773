//! Color themes and styling utilities for the history viewer.
//!
//! Surface hierarchy (5 levels):
//!
//! - `surface[0]`: App background
//! - `surface[1]`: Toolbar/panel backgrounds
//! - `surface[2]`: Card background
//! - `surface[3]`: Hover state
//! - `surface[4]`: Elevated panels
//!
//! Semantic colors cover fetch status (success/warning/error/info); text
//! comes in three emphasis tiers (primary/secondary/muted). Field metadata
//! like timestamps and block labels always uses `text_muted`.

use eframe::egui::{self, Color32};

/// Theme with semantic color system
#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct FarmTheme {
    pub name: String,
    pub surface: [Color32; 5],
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_subtle: Color32,
    pub border_medium: Color32,
}

impl FarmTheme {
    /// Dark theme (default) - warm earthy greens over near-black surfaces
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(12, 14, 11),   // surface_0: App background
                Color32::from_rgb(20, 24, 18),   // surface_1: Toolbar background
                Color32::from_rgb(28, 33, 26),   // surface_2: Card background
                Color32::from_rgb(38, 45, 35),   // surface_3: Hover state
                Color32::from_rgb(48, 57, 44),   // surface_4: Elevated panels
            ],
            accent: Color32::from_rgb(102, 187, 106),
            success: Color32::from_rgb(67, 181, 129),
            warning: Color32::from_rgb(250, 166, 26),
            error: Color32::from_rgb(240, 71, 71),
            info: Color32::from_rgb(79, 163, 244),
            text_primary: Color32::from_rgb(236, 239, 233),
            text_secondary: Color32::from_rgb(180, 188, 175),
            text_muted: Color32::from_rgb(120, 128, 115),
            border_subtle: Color32::from_rgb(38, 43, 36),
            border_medium: Color32::from_rgb(54, 61, 51),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(250, 251, 248), // surface_0: App background
                Color32::from_rgb(241, 244, 238), // surface_1: Toolbar background
                Color32::from_rgb(255, 255, 255), // surface_2: Card background
                Color32::from_rgb(229, 234, 224), // surface_3: Hover state
                Color32::from_rgb(214, 221, 208), // surface_4: Elevated panels
            ],
            accent: Color32::from_rgb(46, 125, 50),
            success: Color32::from_rgb(46, 125, 50),
            warning: Color32::from_rgb(230, 129, 0),
            error: Color32::from_rgb(198, 40, 40),
            info: Color32::from_rgb(21, 101, 192),
            text_primary: Color32::from_rgb(28, 32, 26),
            text_secondary: Color32::from_rgb(75, 84, 71),
            text_muted: Color32::from_rgb(125, 133, 120),
            border_subtle: Color32::from_rgb(226, 231, 221),
            border_medium: Color32::from_rgb(203, 210, 197),
        }
    }

    /// Pick the theme matching the current egui visuals
    pub fn for_ui(ui: &egui::Ui) -> Self {
        if ui.style().visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Deterministic badge color for a crop name (FNV-1a over a fixed palette),
/// so the same crop always gets the same color across records and sessions.
pub fn crop_color(crop: &str) -> Color32 {
    const COLORS: [Color32; 8] = [
        Color32::from_rgb(0x99, 0xCC, 0x66), // young leaf
        Color32::from_rgb(0xD4, 0xA8, 0x5A), // wheat
        Color32::from_rgb(0x66, 0xB2, 0x8F), // paddy
        Color32::from_rgb(0xC9, 0x8A, 0x6B), // jute
        Color32::from_rgb(0x8F, 0xB2, 0xD4), // water
        Color32::from_rgb(0xCC, 0x99, 0xCC), // brinjal
        Color32::from_rgb(0xE0, 0x9A, 0x4A), // mustard
        Color32::from_rgb(0x7F, 0xC2, 0x6E), // field
    ];
    let mut hash: u64 = 1469598103934665603u64;
    for b in crop.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    COLORS[(hash as usize) % COLORS.len()]
}

/// Render a small pill badge
pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    let fill = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 38);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(color));
        });
}
