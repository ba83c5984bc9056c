use eframe::egui;
use obsidian_forge_core::{CopyTarget, ImportWalletController, WorkflowId};

use super::Intent;
use crate::ui;

pub fn render(ui: &mut egui::Ui, ctl: &mut ImportWalletController, intents: &mut Vec<Intent>) {
    ui::styled_heading(ui, "Import Wallet");
    ui.label("Import an existing wallet from its private key.");
    ui.add_space(15.0);

    if let Some(wallet) = ctl.imported() {
        ui::success_message(ui, "Wallet imported");
        ui::card(ui, |ui| {
            ui.label(egui::RichText::new(&wallet.name).strong().size(15.0));
            if ui::value_row(ui, "Address", &wallet.address.to_string(), true) {
                intents.push(Intent::Copy(CopyTarget::ImportedAddress));
            }
        });
        ui.add_space(10.0);
        if ui::secondary_button(ui, "Import Another").clicked() {
            intents.push(Intent::Reset(WorkflowId::ImportWallet));
        }
        return;
    }

    let submitting = ctl.state().is_submitting();
    ui.add_enabled_ui(!submitting, |ui| {
        ui.label("Private Key");
        ui.add(
            egui::TextEdit::singleline(ctl.private_key_input_mut())
                .password(true)
                .hint_text("0x...")
                .desired_width(360.0)
                .font(egui::TextStyle::Monospace),
        );
        ui.add_space(6.0);
        ui::text_input(ui, "Wallet Name", ctl.name_mut(), "Imported Wallet");
    });
    ui.add_space(6.0);
    ui::warning_message(ui, "Your private key is sent to the forge backend over this connection.");
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui::primary_button_enabled(ui, "Import Wallet", ctl.can_submit()).clicked() {
            intents.push(Intent::Submit(WorkflowId::ImportWallet));
        }
        if submitting {
            ui::loading_spinner(ui, "Importing...");
        }
    });
}
