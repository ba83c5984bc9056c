use thiserror::Error;

use crate::domain::{
    ContractRequest, CreatedWallet, GeneratedContract, GeneratedToken, PrivateKey, TokenSpec,
    WalletRecord,
};

/// Uniform failure of any backend call.
///
/// The string is diagnostic only: it is logged, never shown or matched on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("remote call failed: {0}")]
pub struct RemoteError(pub String);

impl RemoteError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard rejected write: {0}")]
    Rejected(String),
}

/// The five backend operations. Implementations must not retry and must map
/// any non-2xx status, transport failure or payload shape mismatch to
/// [`RemoteError`].
#[allow(async_fn_in_trait)]
pub trait RemotePort {
    async fn create_wallet(&self, name: &str) -> Result<CreatedWallet, RemoteError>;
    async fn import_wallet(
        &self,
        private_key: &PrivateKey,
        name: &str,
    ) -> Result<WalletRecord, RemoteError>;
    async fn list_wallets(&self) -> Result<Vec<WalletRecord>, RemoteError>;
    async fn create_token(&self, spec: &TokenSpec) -> Result<GeneratedToken, RemoteError>;
    async fn generate_contract(
        &self,
        request: &ContractRequest,
    ) -> Result<GeneratedContract, RemoteError>;
}

/// Platform clipboard API (async clipboard in a secure browser context,
/// system clipboard natively). `write_text` resolves only once the platform
/// has accepted or rejected the write.
#[allow(async_fn_in_trait)]
pub trait PrimaryClipboard {
    fn is_available(&self) -> bool;
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Legacy copy path: an off-screen editable element that is filled, selected
/// and copied with the platform copy command.
pub trait FallbackSurface {
    type Element;

    fn create_scratch(&self) -> Result<Self::Element, ClipboardError>;
    fn fill_and_select(&self, element: &Self::Element, text: &str) -> Result<(), ClipboardError>;
    fn exec_copy(&self) -> Result<(), ClipboardError>;
    fn remove_scratch(&self, element: Self::Element);
}

/// Copy service that runs a [`crate::panel::CopyJob`] to a settled outcome.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}
