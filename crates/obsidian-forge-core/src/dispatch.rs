//! Remote calls as data: controllers emit a [`Dispatch`], the shell runs it
//! with [`execute`] off the UI thread and feeds the [`Completion`] back.

use crate::domain::{
    ContractRequest, CreateWalletRequest, CreatedWallet, GeneratedContract, GeneratedToken,
    ImportWalletRequest, TokenSpec, WalletRecord,
};
use crate::ports::{RemoteError, RemotePort};
use crate::state_machine::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowId {
    CreateWallet,
    ImportWallet,
    WalletList,
    TokenCreator,
    ContractWriter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    CreateWallet(CreateWalletRequest),
    ImportWallet(ImportWalletRequest),
    ListWallets,
    CreateToken(TokenSpec),
    GenerateContract(ContractRequest),
}

impl RemoteCall {
    pub fn operation(&self) -> &'static str {
        match self {
            RemoteCall::CreateWallet(_) => "create_wallet",
            RemoteCall::ImportWallet(_) => "import_wallet",
            RemoteCall::ListWallets => "list_wallets",
            RemoteCall::CreateToken(_) => "create_token",
            RemoteCall::GenerateContract(_) => "generate_contract",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteReply {
    CreatedWallet(Result<CreatedWallet, RemoteError>),
    ImportedWallet(Result<WalletRecord, RemoteError>),
    Wallets(Result<Vec<WalletRecord>, RemoteError>),
    Token(Result<GeneratedToken, RemoteError>),
    Contract(Result<GeneratedContract, RemoteError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub workflow: WorkflowId,
    pub ticket: Ticket,
    pub call: RemoteCall,
}

impl Dispatch {
    pub fn complete(&self, reply: RemoteReply) -> Completion {
        Completion {
            workflow: self.workflow,
            ticket: self.ticket,
            reply,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub workflow: WorkflowId,
    pub ticket: Ticket,
    pub reply: RemoteReply,
}

pub async fn execute<R: RemotePort>(remote: &R, call: &RemoteCall) -> RemoteReply {
    tracing::debug!(operation = call.operation(), "executing remote call");
    match call {
        RemoteCall::CreateWallet(req) => {
            RemoteReply::CreatedWallet(remote.create_wallet(&req.name).await)
        }
        RemoteCall::ImportWallet(req) => RemoteReply::ImportedWallet(
            remote.import_wallet(&req.private_key, &req.name).await,
        ),
        RemoteCall::ListWallets => RemoteReply::Wallets(remote.list_wallets().await),
        RemoteCall::CreateToken(spec) => RemoteReply::Token(remote.create_token(spec).await),
        RemoteCall::GenerateContract(req) => {
            RemoteReply::Contract(remote.generate_contract(req).await)
        }
    }
}

/// Run `dispatch` and wrap the reply into its completion.
pub async fn run<R: RemotePort>(remote: &R, dispatch: &Dispatch) -> Completion {
    dispatch.complete(execute(remote, &dispatch.call).await)
}
