pub mod clipboard;
pub mod controllers;
pub mod dispatch;
pub mod domain;
pub mod notify;
pub mod panel;
pub mod ports;
pub mod state_machine;

pub use clipboard::ClipboardService;
pub use controllers::{
    ContractWriterController, CreateWalletController, ImportWalletController,
    TokenCreatorController, TokenPreview, ValidationError, WalletListController, EXAMPLE_PROMPTS,
};
pub use dispatch::{execute, run, Completion, Dispatch, RemoteCall, RemoteReply, WorkflowId};
pub use domain::{
    ContractRequest, CreateWalletRequest, CreatedWallet, GeneratedContract, GeneratedToken,
    ImportWalletRequest, PrivateKey, TokenSpec, WalletRecord,
};
pub use notify::{Notice, NoticeKind, NotificationReader, NotificationSink};
pub use panel::{CopyJob, CopyOutcome, CopyTarget, Panel, Screen};
pub use ports::{
    Clipboard, ClipboardError, FallbackSurface, PrimaryClipboard, RemoteError, RemotePort,
};
pub use state_machine::{
    workflow_transition, Phase, Resolution, StateTransition, Ticket, TransitionError, Workflow,
    WorkflowAction, WorkflowState,
};
