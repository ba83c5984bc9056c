//! Main application state and update loop

use eframe::egui;
use obsidian_forge_adapters::{default_clipboard, HttpRemoteClient};
use obsidian_forge_core::{
    Dispatch, NotificationReader, NotificationSink, Panel, Screen, WorkflowId,
};
use web_time::Instant;

use crate::executor::Executor;
use crate::toasts::Toasts;
use crate::views::{self, Intent};

const NAV: &[(Screen, &str)] = &[
    (Screen::Dashboard, "🏠 Dashboard"),
    (Screen::CreateWallet, "➕ Create Wallet"),
    (Screen::ImportWallet, "📥 Import Wallet"),
    (Screen::TokenCreator, "🪙 Token Creator"),
    (Screen::ContractWriter, "🤖 Contract Writer"),
];

/// The main application state
pub struct App {
    panel: Panel,
    /// Cursor into the notification log for toasts
    notices: NotificationReader,
    toasts: Toasts,
    executor: Executor,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> eyre::Result<Self> {
        let remote = HttpRemoteClient::from_env();
        tracing::info!(backend = %remote.config().backend_url, "using forge backend");

        let sink = NotificationSink::new();
        let notices = sink.reader();
        let mut app = Self {
            panel: Panel::new(sink),
            notices,
            toasts: Toasts::default(),
            executor: Executor::new(remote, default_clipboard())?,
        };
        let initial = app.panel.start();
        app.dispatch(initial, &cc.egui_ctx);
        Ok(app)
    }

    fn dispatch(&self, dispatch: Option<Dispatch>, ctx: &egui::Context) {
        if let Some(dispatch) = dispatch {
            self.executor.spawn(dispatch, ctx);
        }
    }

    fn apply_completions(&mut self) {
        for completion in self.executor.drain() {
            self.panel.apply(completion);
        }
        for outcome in self.executor.drain_copies() {
            self.panel.finish_copy(outcome);
        }
    }

    fn handle(&mut self, intent: Intent, ctx: &egui::Context) {
        match intent {
            Intent::Navigate(screen) => {
                let dispatch = self.panel.navigate(screen);
                self.dispatch(dispatch, ctx);
            }
            Intent::Submit(workflow) => {
                let dispatch = self.panel.submit(workflow);
                self.dispatch(dispatch, ctx);
            }
            Intent::Reset(workflow) => match workflow {
                WorkflowId::CreateWallet => self.panel.create_wallet.reset(),
                WorkflowId::ImportWallet => self.panel.import_wallet.reset(),
                WorkflowId::WalletList => self.panel.wallet_list.unmount(),
                WorkflowId::TokenCreator => self.panel.token_creator.reset(),
                WorkflowId::ContractWriter => self.panel.contract_writer.reset(),
            },
            Intent::Copy(target) => {
                if let Some(job) = self.panel.copy(target) {
                    self.executor.copy(job, ctx);
                }
            }
            Intent::ToggleReveal => {
                self.panel.create_wallet.toggle_reveal();
            }
            Intent::SelectExample(index) => {
                self.panel.contract_writer.select_example(index);
            }
        }
    }

    fn collect_notices(&mut self) {
        let now = Instant::now();
        for notice in self.notices.drain_new() {
            self.toasts.push(notice, now);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.apply_completions();

        let mut intents = Vec::new();
        let current = self.panel.screen();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("⚒ Obsidian Forge")
                        .size(22.0)
                        .color(crate::ui::ACCENT),
                );
                ui.add_space(30.0);
                ui.separator();
                ui.add_space(10.0);
                for (screen, label) in NAV {
                    if ui.selectable_label(current == *screen, *label).clicked() {
                        intents.push(Intent::Navigate(*screen));
                    }
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                views::render(ui, &mut self.panel, &mut intents);
                ui.add_space(20.0);
            });
        });

        for intent in intents {
            self.handle(intent, ctx);
        }

        self.collect_notices();
        self.toasts.show(ctx);
    }
}
