use eframe::egui;
use obsidian_forge_core::{CopyTarget, Panel, Screen, WorkflowId};

use super::Intent;
use crate::ui;

const QUICK_ACTIONS: &[(Screen, &str, &str)] = &[
    (Screen::CreateWallet, "➕ Create Wallet", "Generate a new Ethereum wallet"),
    (Screen::ImportWallet, "📥 Import Wallet", "Import an existing private key"),
    (Screen::TokenCreator, "🪙 Create Token", "Generate an ERC-20 token contract"),
    (Screen::ContractWriter, "🤖 AI Contract Writer", "Describe a contract, get Solidity"),
];

pub fn render(ui: &mut egui::Ui, panel: &Panel, intents: &mut Vec<Intent>) {
    ui::styled_heading(ui, "Dashboard");
    ui.label("Create wallets, mint tokens and generate smart contracts.");
    ui.add_space(15.0);

    ui.horizontal_wrapped(|ui| {
        for (screen, title, blurb) in QUICK_ACTIONS {
            ui::card(ui, |ui| {
                ui.set_width(200.0);
                ui.vertical(|ui| {
                    if ui::secondary_button(ui, title).clicked() {
                        intents.push(Intent::Navigate(*screen));
                    }
                    ui.label(egui::RichText::new(*blurb).weak().small());
                });
            });
        }
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Your Wallets").strong().size(14.0));
        let list = &panel.wallet_list;
        if ui
            .add_enabled(!list.is_loading(), egui::Button::new("⟳").small())
            .on_hover_text("Reload wallets")
            .clicked()
        {
            intents.push(Intent::Submit(WorkflowId::WalletList));
        }
    });
    ui.separator();

    let list = &panel.wallet_list;
    if list.is_loading() {
        ui::loading_spinner(ui, "Loading wallets...");
        return;
    }
    if list.wallets().is_empty() {
        ui.label(
            egui::RichText::new("No wallets yet. Create or import one to get started.").weak(),
        );
        return;
    }

    for (index, wallet) in list.wallets().iter().enumerate() {
        ui::card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&wallet.name).strong());
                if let Some(created_at) = wallet.created_at {
                    ui.label(
                        egui::RichText::new(created_at.format("%Y-%m-%d %H:%M UTC").to_string())
                            .weak()
                            .small(),
                    );
                }
            });
            if ui::value_row(ui, "Address", &wallet.address.to_string(), true) {
                intents.push(Intent::Copy(CopyTarget::ListedAddress(index)));
            }
        });
        ui.add_space(6.0);
    }
}
