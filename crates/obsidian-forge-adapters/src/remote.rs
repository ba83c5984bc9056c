//! HTTP implementation of [`RemotePort`] against the forge backend.
//!
//! Every failure (transport, non-2xx status, body that does not decode into
//! the expected shape) collapses into a single [`RemoteError`]. Structured
//! error bodies are not parsed and no timeout or retry is applied.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use obsidian_forge_core::{
    ContractRequest, CreateWalletRequest, CreatedWallet, GeneratedContract, GeneratedToken,
    ImportWalletRequest, PrivateKey, RemoteError, RemotePort, TokenSpec, WalletRecord,
};

use crate::config::ForgeClientConfig;

const CREATE_WALLET_PATH: &str = "/wallet/create";
const IMPORT_WALLET_PATH: &str = "/wallet/import";
const LIST_WALLETS_PATH: &str = "/wallets";
const CREATE_TOKEN_PATH: &str = "/token/create";
const GENERATE_CONTRACT_PATH: &str = "/contract/generate";

#[derive(Debug, Clone)]
pub struct HttpRemoteClient {
    http: Client,
    config: ForgeClientConfig,
}

impl Default for HttpRemoteClient {
    fn default() -> Self {
        Self::new(ForgeClientConfig::default())
    }
}

impl HttpRemoteClient {
    pub fn new(config: ForgeClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ForgeClientConfig::from_env())
    }

    pub fn config(&self) -> &ForgeClientConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let url = self.config.api_url(path);
        self.send(path, self.http.get(url)).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        self.send(path, self.http.post(url).json(body)).await
    }

    /// Request bodies may hold a private key, so only the path is ever logged.
    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, RemoteError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "backend unreachable");
            RemoteError::new(format!("{path}: transport error: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "backend returned error status");
            return Err(RemoteError::new(format!("{path}: HTTP {status}")));
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!(path, error = %e, "failed to read response body");
            RemoteError::new(format!("{path}: failed to read body: {e}"))
        })?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(path, error = %e, "unexpected response shape");
            RemoteError::new(format!("{path}: unexpected response shape: {e}"))
        })
    }
}

impl RemotePort for HttpRemoteClient {
    async fn create_wallet(&self, name: &str) -> Result<CreatedWallet, RemoteError> {
        let body = CreateWalletRequest {
            name: name.to_owned(),
        };
        self.post(CREATE_WALLET_PATH, &body).await
    }

    async fn import_wallet(
        &self,
        private_key: &PrivateKey,
        name: &str,
    ) -> Result<WalletRecord, RemoteError> {
        let body = ImportWalletRequest {
            private_key: private_key.clone(),
            name: name.to_owned(),
        };
        self.post(IMPORT_WALLET_PATH, &body).await
    }

    async fn list_wallets(&self) -> Result<Vec<WalletRecord>, RemoteError> {
        self.get(LIST_WALLETS_PATH).await
    }

    async fn create_token(&self, spec: &TokenSpec) -> Result<GeneratedToken, RemoteError> {
        self.post(CREATE_TOKEN_PATH, spec).await
    }

    async fn generate_contract(
        &self,
        request: &ContractRequest,
    ) -> Result<GeneratedContract, RemoteError> {
        self.post(GENERATE_CONTRACT_PATH, request).await
    }
}
