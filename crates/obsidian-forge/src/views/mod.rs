//! Screen renderers. Each reads controller state, edits form fields in
//! place and reports user actions as [`Intent`]s for the app to carry out.

mod contract_writer;
mod create_wallet;
mod dashboard;
mod import_wallet;
mod token_creator;

use eframe::egui;
use obsidian_forge_core::{CopyTarget, Panel, Screen, WorkflowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Navigate(Screen),
    Submit(WorkflowId),
    Reset(WorkflowId),
    Copy(CopyTarget),
    ToggleReveal,
    SelectExample(usize),
}

pub fn render(ui: &mut egui::Ui, panel: &mut Panel, intents: &mut Vec<Intent>) {
    match panel.screen() {
        Screen::Dashboard => dashboard::render(ui, panel, intents),
        Screen::CreateWallet => create_wallet::render(ui, &mut panel.create_wallet, intents),
        Screen::ImportWallet => import_wallet::render(ui, &mut panel.import_wallet, intents),
        Screen::TokenCreator => token_creator::render(ui, &mut panel.token_creator, intents),
        Screen::ContractWriter => contract_writer::render(ui, &mut panel.contract_writer, intents),
    }
}
