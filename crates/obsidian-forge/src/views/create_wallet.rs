use eframe::egui;
use obsidian_forge_core::{CopyTarget, CreateWalletController, WorkflowId};

use super::Intent;
use crate::ui;

pub fn render(ui: &mut egui::Ui, ctl: &mut CreateWalletController, intents: &mut Vec<Intent>) {
    ui::styled_heading(ui, "Create Wallet");
    ui.label("Generate a fresh Ethereum wallet on the forge backend.");
    ui.add_space(15.0);

    match ctl.created() {
        Some(wallet) => {
            ui::success_message(ui, "Wallet created");
            ui::card(ui, |ui| {
                ui.label(egui::RichText::new(&wallet.name).strong().size(15.0));
                if ui::value_row(ui, "Address", &wallet.address.to_string(), true) {
                    intents.push(Intent::Copy(CopyTarget::CreatedAddress));
                }
                if let Some(display) = ctl.private_key_display() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("Private Key:").strong());
                        ui.label(egui::RichText::new(display).monospace());
                        let toggle = if ctl.is_revealed() { "🙈 Hide" } else { "👁 Show" };
                        if ui.small_button(toggle).clicked() {
                            intents.push(Intent::ToggleReveal);
                        }
                        if ui
                            .small_button("📋")
                            .on_hover_text("Copy to clipboard")
                            .clicked()
                        {
                            intents.push(Intent::Copy(CopyTarget::CreatedPrivateKey));
                        }
                    });
                }
            });
            ui.add_space(8.0);
            ui::warning_message(
                ui,
                "Save your private key somewhere safe. It is not shown again once you leave.",
            );
            ui.add_space(10.0);
            if ui::secondary_button(ui, "Create Another").clicked() {
                intents.push(Intent::Reset(WorkflowId::CreateWallet));
            }
        }
        None => render_form(ui, ctl, intents),
    }
}

fn render_form(ui: &mut egui::Ui, ctl: &mut CreateWalletController, intents: &mut Vec<Intent>) {
    let submitting = ctl.state().is_submitting();
    ui.add_enabled_ui(!submitting, |ui| {
        ui::text_input(ui, "Wallet Name", ctl.name_mut(), "My Wallet");
    });
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui::primary_button_enabled(ui, "Create Wallet", ctl.can_submit()).clicked() {
            intents.push(Intent::Submit(WorkflowId::CreateWallet));
        }
        if submitting {
            ui::loading_spinner(ui, "Creating...");
        }
    });
}
