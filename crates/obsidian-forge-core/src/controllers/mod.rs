//! One controller per user action. Each owns its form input, a
//! [`Workflow`] and a handle to the notification sink; none of them sees
//! another controller's state.

pub mod contract_writer;
pub mod create_wallet;
pub mod import_wallet;
pub mod token_creator;
pub mod wallet_list;

use thiserror::Error;

use crate::dispatch::{Dispatch, RemoteCall, WorkflowId};
use crate::notify::NotificationSink;
use crate::ports::RemoteError;
use crate::state_machine::{Resolution, Ticket, Workflow};

pub use contract_writer::{ContractWriterController, EXAMPLE_PROMPTS};
pub use create_wallet::CreateWalletController;
pub use import_wallet::ImportWalletController;
pub use token_creator::{TokenCreatorController, TokenPreview};
pub use wallet_list::WalletListController;

/// Local input problem, caught before any remote call. The display string is
/// the user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a wallet name")]
    MissingWalletName,
    #[error("Please enter a private key")]
    MissingPrivateKey,
    #[error("Please fill in all fields")]
    MissingTokenFields,
    #[error("Total supply must be a whole number")]
    InvalidTotalSupply,
    #[error("Total supply must be greater than zero")]
    ZeroTotalSupply,
    #[error("Decimals must be a whole number between 0 and 255")]
    InvalidDecimals,
    #[error("Please describe what you want to build")]
    MissingDescription,
}

/// User-facing messages for the two remote outcomes of a workflow.
pub(crate) struct Outcome {
    pub success: &'static str,
    pub failure: &'static str,
}

/// Guard, validate and begin a submission.
///
/// While `Submitting` the call is ignored without a notification (the view
/// disables the affordance). A validation failure notifies once and leaves
/// the phase unchanged.
pub(crate) fn begin_submit<T>(
    id: WorkflowId,
    workflow: &mut Workflow<T>,
    sink: &NotificationSink,
    validate: impl FnOnce() -> Result<RemoteCall, ValidationError>,
) -> Option<Dispatch> {
    if workflow.state().is_submitting() {
        tracing::debug!(workflow = ?id, "submit ignored while submitting");
        return None;
    }
    let call = match validate() {
        Ok(call) => call,
        Err(err) => {
            tracing::debug!(workflow = ?id, error = ?err, "local validation failed");
            sink.error(err.to_string());
            return None;
        }
    };
    match workflow.begin() {
        Ok(ticket) => {
            tracing::info!(workflow = ?id, operation = call.operation(), "dispatching");
            Some(Dispatch {
                workflow: id,
                ticket,
                call,
            })
        }
        Err(err) => {
            tracing::debug!(workflow = ?id, error = %err, "submit rejected");
            None
        }
    }
}

/// Apply a completion and emit exactly one notification for a fresh result.
pub(crate) fn settle<T>(
    workflow: &mut Workflow<T>,
    sink: &NotificationSink,
    ticket: Ticket,
    result: Result<T, RemoteError>,
    outcome: Outcome,
) -> Resolution {
    let resolution = workflow.resolve(ticket, result);
    match resolution {
        Resolution::Succeeded => sink.success(outcome.success),
        Resolution::Failed => sink.error(outcome.failure),
        Resolution::Stale => {}
    }
    resolution
}
