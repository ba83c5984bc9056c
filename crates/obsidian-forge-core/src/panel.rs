use crate::controllers::{
    ContractWriterController, CreateWalletController, ImportWalletController,
    TokenCreatorController, WalletListController,
};
use crate::dispatch::{Completion, Dispatch, RemoteReply, WorkflowId};
use crate::notify::NotificationSink;
use crate::ports::{Clipboard, ClipboardError};
use crate::state_machine::Resolution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    CreateWallet,
    ImportWallet,
    TokenCreator,
    ContractWriter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    CreatedAddress,
    CreatedPrivateKey,
    ImportedAddress,
    ListedAddress(usize),
    TokenContract,
    GeneratedContract,
}

impl CopyTarget {
    fn label(&self) -> &'static str {
        match self {
            CopyTarget::CreatedAddress
            | CopyTarget::ImportedAddress
            | CopyTarget::ListedAddress(_) => "Address",
            CopyTarget::CreatedPrivateKey => "Private Key",
            CopyTarget::TokenContract | CopyTarget::GeneratedContract => "Contract code",
        }
    }
}

/// A copy of one displayed value, run by the shell like a remote call.
#[derive(Clone, PartialEq, Eq)]
pub struct CopyJob {
    pub target: CopyTarget,
    text: String,
}

impl std::fmt::Debug for CopyJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyJob")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl CopyJob {
    /// Copy the text and wait until the clipboard has settled.
    pub async fn run<C: Clipboard>(self, clipboard: &C) -> CopyOutcome {
        CopyOutcome {
            target: self.target,
            result: clipboard.copy(&self.text).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub target: CopyTarget,
    pub result: Result<(), ClipboardError>,
}

/// Owns every controller plus the shared sink, and routes view intents and
/// remote completions to the controller they belong to.
pub struct Panel {
    screen: Screen,
    sink: NotificationSink,
    pub create_wallet: CreateWalletController,
    pub import_wallet: ImportWalletController,
    pub wallet_list: WalletListController,
    pub token_creator: TokenCreatorController,
    pub contract_writer: ContractWriterController,
}

impl Panel {
    pub fn new(sink: NotificationSink) -> Self {
        Self {
            screen: Screen::Dashboard,
            create_wallet: CreateWalletController::new(sink.clone()),
            import_wallet: ImportWalletController::new(sink.clone()),
            wallet_list: WalletListController::new(sink.clone()),
            token_creator: TokenCreatorController::new(sink.clone()),
            contract_writer: ContractWriterController::new(sink.clone()),
            sink,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn sink(&self) -> &NotificationSink {
        &self.sink
    }

    /// Mount the initial screen.
    pub fn start(&mut self) -> Option<Dispatch> {
        self.enter(self.screen)
    }

    /// Leave the current screen (dropping its result and any secret) and
    /// enter `screen`. Re-selecting the dashboard reloads the wallet list
    /// unless a load is already in flight.
    pub fn navigate(&mut self, screen: Screen) -> Option<Dispatch> {
        if screen == self.screen {
            return match screen {
                Screen::Dashboard => self.wallet_list.mount(),
                _ => None,
            };
        }
        tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
        self.leave(self.screen);
        self.screen = screen;
        self.enter(screen)
    }

    fn leave(&mut self, screen: Screen) {
        match screen {
            Screen::Dashboard => self.wallet_list.unmount(),
            Screen::CreateWallet => self.create_wallet.reset(),
            Screen::ImportWallet => self.import_wallet.reset(),
            Screen::TokenCreator => self.token_creator.reset(),
            Screen::ContractWriter => self.contract_writer.reset(),
        }
    }

    fn enter(&mut self, screen: Screen) -> Option<Dispatch> {
        match screen {
            Screen::Dashboard => self.wallet_list.mount(),
            _ => None,
        }
    }

    pub fn submit(&mut self, workflow: WorkflowId) -> Option<Dispatch> {
        match workflow {
            WorkflowId::CreateWallet => self.create_wallet.submit(),
            WorkflowId::ImportWallet => self.import_wallet.submit(),
            WorkflowId::WalletList => self.wallet_list.mount(),
            WorkflowId::TokenCreator => self.token_creator.submit(),
            WorkflowId::ContractWriter => self.contract_writer.submit(),
        }
    }

    pub fn apply(&mut self, completion: Completion) -> Resolution {
        let Completion {
            workflow,
            ticket,
            reply,
        } = completion;
        match (workflow, reply) {
            (WorkflowId::CreateWallet, RemoteReply::CreatedWallet(result)) => {
                self.create_wallet.complete(ticket, result)
            }
            (WorkflowId::ImportWallet, RemoteReply::ImportedWallet(result)) => {
                self.import_wallet.complete(ticket, result)
            }
            (WorkflowId::WalletList, RemoteReply::Wallets(result)) => {
                self.wallet_list.complete(ticket, result)
            }
            (WorkflowId::TokenCreator, RemoteReply::Token(result)) => {
                self.token_creator.complete(ticket, result)
            }
            (WorkflowId::ContractWriter, RemoteReply::Contract(result)) => {
                self.contract_writer.complete(ticket, result)
            }
            (workflow, reply) => {
                tracing::error!(?workflow, reply = reply_kind(&reply), "reply routed to wrong workflow");
                Resolution::Stale
            }
        }
    }

    fn copy_text(&self, target: CopyTarget) -> Option<String> {
        match target {
            CopyTarget::CreatedAddress => {
                self.create_wallet.created().map(|w| w.address.to_string())
            }
            CopyTarget::CreatedPrivateKey => self
                .create_wallet
                .private_key()
                .map(|k| k.expose().to_owned()),
            CopyTarget::ImportedAddress => {
                self.import_wallet.imported().map(|w| w.address.to_string())
            }
            CopyTarget::ListedAddress(index) => self
                .wallet_list
                .wallets()
                .get(index)
                .map(|w| w.address.to_string()),
            CopyTarget::TokenContract => self
                .token_creator
                .generated()
                .map(|t| t.contract_code.clone()),
            CopyTarget::GeneratedContract => self
                .contract_writer
                .generated()
                .map(|c| c.contract_code.clone()),
        }
    }

    /// Start copying a displayed value. Returns `None` (and notifies nothing)
    /// when the target has no value on screen.
    pub fn copy(&self, target: CopyTarget) -> Option<CopyJob> {
        let Some(text) = self.copy_text(target) else {
            tracing::debug!(?target, "nothing to copy");
            return None;
        };
        Some(CopyJob { target, text })
    }

    /// Report a settled copy. Emits exactly one notification and never
    /// touches workflow state. Returns whether the copy went through.
    pub fn finish_copy(&self, outcome: CopyOutcome) -> bool {
        match outcome.result {
            Ok(()) => {
                self.sink
                    .success(format!("{} copied to clipboard!", outcome.target.label()));
                true
            }
            Err(err) => {
                tracing::debug!(copy_target = ?outcome.target, error = %err, "copy failed");
                self.sink.error("Failed to copy. Please copy manually.");
                false
            }
        }
    }
}

fn reply_kind(reply: &RemoteReply) -> &'static str {
    match reply {
        RemoteReply::CreatedWallet(_) => "created_wallet",
        RemoteReply::ImportedWallet(_) => "imported_wallet",
        RemoteReply::Wallets(_) => "wallets",
        RemoteReply::Token(_) => "token",
        RemoteReply::Contract(_) => "contract",
    }
}
