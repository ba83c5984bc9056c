use eframe::egui;
use obsidian_forge_core::{ContractWriterController, CopyTarget, WorkflowId, EXAMPLE_PROMPTS};

use super::Intent;
use crate::ui;

pub fn render(ui: &mut egui::Ui, ctl: &mut ContractWriterController, intents: &mut Vec<Intent>) {
    ui::styled_heading(ui, "AI Contract Writer");
    ui.label("Describe the contract you want and get Solidity back.");
    ui.add_space(15.0);

    if let Some(contract) = ctl.generated() {
        ui::success_message(ui, "Smart contract generated");
        ui::section_header(ui, "Explanation");
        ui.label(&contract.explanation);
        ui::section_header(ui, "Contract Code");
        ui::code_block(ui, "generated_contract_code", &contract.contract_code);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui::secondary_button(ui, "📋 Copy Code").clicked() {
                intents.push(Intent::Copy(CopyTarget::GeneratedContract));
            }
            if ui::secondary_button(ui, "Generate Another").clicked() {
                intents.push(Intent::Reset(WorkflowId::ContractWriter));
            }
        });
        return;
    }

    let submitting = ctl.state().is_submitting();
    ui.add_enabled_ui(!submitting, |ui| {
        ui::multiline_input(
            ui,
            ctl.description_mut(),
            "e.g. An ERC-721 collection with a public mint and a max supply",
            6,
        );
        ui::section_header(ui, "Examples");
        for (index, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
            if ui.link(*prompt).clicked() {
                intents.push(Intent::SelectExample(index));
            }
        }
    });
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui::primary_button_enabled(ui, "Generate Contract", ctl.can_submit()).clicked() {
            intents.push(Intent::Submit(WorkflowId::ContractWriter));
        }
        if submitting {
            ui::loading_spinner(ui, "Generating...");
        }
    });
}
