use crate::controllers::{begin_submit, settle, Outcome, ValidationError};
use crate::dispatch::{Dispatch, RemoteCall, WorkflowId};
use crate::domain::{CreateWalletRequest, CreatedWallet, PrivateKey, WalletRecord};
use crate::notify::NotificationSink;
use crate::ports::RemoteError;
use crate::state_machine::{Phase, Resolution, Ticket, Workflow, WorkflowState};

pub const DEFAULT_WALLET_NAME: &str = "My Wallet";

const OUTCOME: Outcome = Outcome {
    success: "Wallet created successfully!",
    failure: "Failed to create wallet",
};

/// Create-wallet flow. The generated key lives only inside the
/// `Succeeded` state and is masked unless the reveal toggle is on.
#[derive(Debug)]
pub struct CreateWalletController {
    name: String,
    revealed: bool,
    workflow: Workflow<CreatedWallet>,
    sink: NotificationSink,
}

impl CreateWalletController {
    pub fn new(sink: NotificationSink) -> Self {
        Self {
            name: DEFAULT_WALLET_NAME.to_owned(),
            revealed: false,
            workflow: Workflow::new("create_wallet"),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn state(&self) -> &WorkflowState<CreatedWallet> {
        self.workflow.state()
    }

    pub fn phase(&self) -> Phase {
        self.workflow.phase()
    }

    pub fn can_submit(&self) -> bool {
        !self.workflow.state().is_submitting() && !self.name.trim().is_empty()
    }

    pub fn submit(&mut self) -> Option<Dispatch> {
        let name = self.name.clone();
        begin_submit(WorkflowId::CreateWallet, &mut self.workflow, &self.sink, || {
            if name.trim().is_empty() {
                return Err(ValidationError::MissingWalletName);
            }
            Ok(RemoteCall::CreateWallet(CreateWalletRequest { name }))
        })
    }

    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<CreatedWallet, RemoteError>,
    ) -> Resolution {
        let resolution = settle(&mut self.workflow, &self.sink, ticket, result, OUTCOME);
        if resolution == Resolution::Succeeded {
            self.revealed = false;
        }
        resolution
    }

    pub fn created(&self) -> Option<&WalletRecord> {
        self.workflow.state().succeeded().map(|w| &w.record)
    }

    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.workflow.state().succeeded().map(|w| &w.private_key)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flip the reveal toggle. Only meaningful once a wallet exists.
    pub fn toggle_reveal(&mut self) -> bool {
        if self.private_key().is_some() {
            self.revealed = !self.revealed;
        }
        self.revealed
    }

    /// Text for the key field: cleartext only while revealed.
    pub fn private_key_display(&self) -> Option<&str> {
        self.private_key().map(|key| {
            if self.revealed {
                key.expose()
            } else {
                PrivateKey::MASK
            }
        })
    }

    /// Drop the created wallet and its key. The typed name is kept.
    pub fn reset(&mut self) {
        self.revealed = false;
        self.workflow.reset();
    }
}
