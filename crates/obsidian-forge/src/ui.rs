//! UI helper components

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(140, 100, 255);
const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(110, 70, 230);

/// Etherscan page for an address.
pub fn explorer_address_url(address: &str) -> String {
    format!("https://etherscan.io/address/{}", address)
}

/// Open URL in a new browser tab
#[cfg(target_arch = "wasm32")]
pub fn open_url_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_url_new_tab(url: &str) {
    if let Err(err) = open::that(url) {
        tracing::warn!(url, error = %err, "failed to open browser");
    }
}

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Monospace value with a copy button and, for addresses, an explorer link.
/// Returns true when the copy button was clicked.
pub fn value_row(ui: &mut egui::Ui, label: &str, value: &str, explorer: bool) -> bool {
    let mut copy = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}:", label)).strong());
        ui.label(egui::RichText::new(value).monospace());
        if ui
            .small_button("📋")
            .on_hover_text("Copy to clipboard")
            .clicked()
        {
            copy = true;
        }
        if explorer
            && ui
                .small_button("🔗")
                .on_hover_text("Open in block explorer")
                .clicked()
        {
            open_url_new_tab(&explorer_address_url(value));
        }
    });
    copy
}

/// Single-line labeled text input
pub fn text_input(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> egui::Response {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(360.0),
    )
}

/// Multiline text edit with fixed height and internal scrolling
pub fn multiline_input(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    rows: usize,
) -> egui::Response {
    let row_height = ui.text_style_height(&egui::TextStyle::Body);
    let height = row_height * rows as f32 + ui.spacing().item_spacing.y * 5.0;

    egui::ScrollArea::vertical()
        .id_salt(hint)
        .max_height(height)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(value)
                    .hint_text(hint)
                    .desired_rows(rows)
                    .desired_width(f32::INFINITY),
            )
        })
        .inner
}

/// Read-only, scrollable source listing
pub fn code_block(ui: &mut egui::Ui, id_salt: &str, code: &str) {
    let mut view = code;
    egui::ScrollArea::vertical()
        .id_salt(id_salt)
        .max_height(360.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut view)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
}

/// Spinner with a caption
pub fn loading_spinner(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(text);
    });
}

/// Warning message display
pub fn warning_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("⚠️").size(14.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(220, 180, 50)));
    });
}

/// Success message display
pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(80, 200, 120)));
    });
}

// =============================================================================
// STYLED BUTTONS
// =============================================================================

/// Primary button with enabled state
pub fn primary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(140.0, 34.0))
        .fill(BUTTON_FILL);
    ui.add_enabled(enabled, btn)
}

/// Secondary action button - subdued, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 34.0));
    ui.add(btn)
}

// =============================================================================
// VISUAL GROUPING
// =============================================================================

/// Render content in a subtle card/frame
pub fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents);
}
