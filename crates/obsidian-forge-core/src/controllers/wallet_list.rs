use crate::controllers::{begin_submit, settle, Outcome};
use crate::dispatch::{Dispatch, RemoteCall, WorkflowId};
use crate::domain::WalletRecord;
use crate::notify::NotificationSink;
use crate::ports::RemoteError;
use crate::state_machine::{Phase, Resolution, Ticket, Workflow, WorkflowState};

const OUTCOME: Outcome = Outcome {
    success: "Wallets loaded",
    failure: "Failed to load wallets",
};

/// Dashboard wallet list. Loads on mount; a failure notifies and renders an
/// empty list instead of blocking the view.
#[derive(Debug)]
pub struct WalletListController {
    workflow: Workflow<Vec<WalletRecord>>,
    sink: NotificationSink,
}

impl WalletListController {
    pub fn new(sink: NotificationSink) -> Self {
        Self {
            workflow: Workflow::new("wallet_list"),
            sink,
        }
    }

    pub fn state(&self) -> &WorkflowState<Vec<WalletRecord>> {
        self.workflow.state()
    }

    pub fn phase(&self) -> Phase {
        self.workflow.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.workflow.state().is_submitting()
    }

    /// Start loading. Any previous list is discarded first.
    pub fn mount(&mut self) -> Option<Dispatch> {
        if self.is_loading() {
            return None;
        }
        self.workflow.reset();
        begin_submit(WorkflowId::WalletList, &mut self.workflow, &self.sink, || {
            Ok(RemoteCall::ListWallets)
        })
    }

    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<WalletRecord>, RemoteError>,
    ) -> Resolution {
        settle(&mut self.workflow, &self.sink, ticket, result, OUTCOME)
    }

    /// Wallets in backend order; empty unless the last load succeeded.
    pub fn wallets(&self) -> &[WalletRecord] {
        self.workflow
            .state()
            .succeeded()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn unmount(&mut self) {
        self.workflow.reset();
    }
}
