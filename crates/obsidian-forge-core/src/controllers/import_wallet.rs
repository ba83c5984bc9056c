use crate::controllers::{begin_submit, settle, Outcome, ValidationError};
use crate::dispatch::{Dispatch, RemoteCall, WorkflowId};
use crate::domain::{ImportWalletRequest, PrivateKey, WalletRecord};
use crate::notify::NotificationSink;
use crate::ports::RemoteError;
use crate::state_machine::{Phase, Resolution, Ticket, Workflow, WorkflowState};

pub const DEFAULT_IMPORT_NAME: &str = "Imported Wallet";

const OUTCOME: Outcome = Outcome {
    success: "Wallet imported successfully!",
    failure: "Failed to import wallet. Check your private key.",
};

/// Import-wallet flow. The key input is write-only: it is sent once, cleared
/// on success, and the result type has no secret field at all.
#[derive(Debug)]
pub struct ImportWalletController {
    name: String,
    private_key: String,
    workflow: Workflow<WalletRecord>,
    sink: NotificationSink,
}

impl ImportWalletController {
    pub fn new(sink: NotificationSink) -> Self {
        Self {
            name: DEFAULT_IMPORT_NAME.to_owned(),
            private_key: String::new(),
            workflow: Workflow::new("import_wallet"),
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

    pub fn private_key_input_mut(&mut self) -> &mut String {
        &mut self.private_key
    }

    pub fn set_private_key(&mut self, key: impl Into<String>) {
        self.private_key = key.into();
    }

    pub fn has_private_key_input(&self) -> bool {
        !self.private_key.trim().is_empty()
    }

    pub fn state(&self) -> &WorkflowState<WalletRecord> {
        self.workflow.state()
    }

    pub fn phase(&self) -> Phase {
        self.workflow.phase()
    }

    pub fn can_submit(&self) -> bool {
        !self.workflow.state().is_submitting()
            && self.has_private_key_input()
            && !self.name.trim().is_empty()
    }

    pub fn submit(&mut self) -> Option<Dispatch> {
        let key = self.private_key.trim().to_owned();
        let name = self.name.clone();
        begin_submit(WorkflowId::ImportWallet, &mut self.workflow, &self.sink, || {
            if key.is_empty() {
                return Err(ValidationError::MissingPrivateKey);
            }
            if name.trim().is_empty() {
                return Err(ValidationError::MissingWalletName);
            }
            Ok(RemoteCall::ImportWallet(ImportWalletRequest {
                private_key: PrivateKey::new(key),
                name,
            }))
        })
    }

    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<WalletRecord, RemoteError>,
    ) -> Resolution {
        let resolution = settle(&mut self.workflow, &self.sink, ticket, result, OUTCOME);
        if resolution == Resolution::Succeeded {
            self.private_key.clear();
        }
        resolution
    }

    pub fn imported(&self) -> Option<&WalletRecord> {
        self.workflow.state().succeeded()
    }

    pub fn reset(&mut self) {
        self.private_key.clear();
        self.workflow.reset();
    }
}
