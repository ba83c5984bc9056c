use eframe::egui;
use obsidian_forge_core::controllers::token_creator::{format_supply, TOKEN_FEATURES};
use obsidian_forge_core::{CopyTarget, TokenCreatorController, WorkflowId};

use super::Intent;
use crate::ui;

pub fn render(ui: &mut egui::Ui, ctl: &mut TokenCreatorController, intents: &mut Vec<Intent>) {
    ui::styled_heading(ui, "Token Creator");
    ui.label("Generate a ready-to-deploy ERC-20 contract.");
    ui.add_space(15.0);

    if let Some(token) = ctl.generated() {
        ui::success_message(ui, "Token contract generated");
        ui::card(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("{} ({})", token.name, token.symbol))
                    .strong()
                    .size(15.0),
            );
            ui.label(format!(
                "Supply: {}   Decimals: {}",
                format_supply(token.total_supply),
                token.decimals
            ));
        });
        ui::section_header(ui, "Contract Code");
        ui::code_block(ui, "token_contract_code", &token.contract_code);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui::secondary_button(ui, "📋 Copy Code").clicked() {
                intents.push(Intent::Copy(CopyTarget::TokenContract));
            }
            if ui::secondary_button(ui, "Create Another").clicked() {
                intents.push(Intent::Reset(WorkflowId::TokenCreator));
            }
        });
        return;
    }

    ui.columns(2, |columns| {
        render_form(&mut columns[0], ctl, intents);
        render_preview(&mut columns[1], ctl);
    });
}

fn render_form(ui: &mut egui::Ui, ctl: &mut TokenCreatorController, intents: &mut Vec<Intent>) {
    let submitting = ctl.is_submitting();
    ui.add_enabled_ui(!submitting, |ui| {
        ui::text_input(ui, "Token Name", ctl.name_mut(), "My Token");
        ui.add_space(6.0);

        let mut symbol = ctl.symbol().to_owned();
        if ui::text_input(ui, "Symbol", &mut symbol, "MTK").changed() {
            ctl.set_symbol(&symbol);
        }
        ui.add_space(6.0);
        ui::text_input(ui, "Total Supply", ctl.total_supply_mut(), "1000000");
        ui.add_space(6.0);
        ui::text_input(ui, "Decimals", ctl.decimals_mut(), "18");
    });
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui::primary_button_enabled(ui, "Generate Token", !submitting).clicked() {
            intents.push(Intent::Submit(WorkflowId::TokenCreator));
        }
        if submitting {
            ui::loading_spinner(ui, "Generating...");
        }
    });
}

fn render_preview(ui: &mut egui::Ui, ctl: &TokenCreatorController) {
    let preview = ctl.preview();
    ui::card(ui, |ui| {
        ui.label(egui::RichText::new("Preview").weak());
        ui.label(egui::RichText::new(&preview.name).strong().size(18.0));
        ui.label(egui::RichText::new(&preview.symbol).color(ui::ACCENT).monospace());
        ui.add_space(6.0);
        ui.label(format!("Total Supply: {}", preview.total_supply));
        ui.add_space(6.0);
        for feature in TOKEN_FEATURES {
            ui.label(format!("✔ {feature}"));
        }
    });
}
