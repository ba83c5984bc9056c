#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use obsidian_forge_core::{
    Clipboard, ClipboardError, ContractRequest, CreatedWallet, FallbackSurface, GeneratedContract,
    GeneratedToken, PrimaryClipboard, PrivateKey, RemoteError, RemotePort, TokenSpec,
    WalletRecord,
};

pub const ADDRESS_A: &str = "0x1000000000000000000000000000000000000001";
pub const ADDRESS_B: &str = "0x2000000000000000000000000000000000000002";
pub const TEST_KEY: &str = "0xabc0000000000000000000000000000000000000000000000000000000000001";

pub fn record(name: &str, address: &str) -> WalletRecord {
    WalletRecord {
        name: name.to_owned(),
        address: address.parse().expect("valid address"),
        created_at: None,
    }
}

/// Remote double that counts calls and records the last request of each kind.
#[derive(Debug, Default)]
pub struct MockRemote {
    pub fail: bool,
    calls: AtomicUsize,
    pub last_token: Mutex<Option<TokenSpec>>,
    pub last_import_name: Mutex<Option<String>>,
}

impl MockRemote {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) -> Result<(), RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(RemoteError::new("HTTP 500"))
        } else {
            Ok(())
        }
    }
}

impl RemotePort for MockRemote {
    async fn create_wallet(&self, name: &str) -> Result<CreatedWallet, RemoteError> {
        self.hit()?;
        Ok(CreatedWallet {
            record: record(name, ADDRESS_A),
            private_key: PrivateKey::new(TEST_KEY),
        })
    }

    async fn import_wallet(
        &self,
        _private_key: &PrivateKey,
        name: &str,
    ) -> Result<WalletRecord, RemoteError> {
        self.hit()?;
        *self.last_import_name.lock().expect("lock") = Some(name.to_owned());
        Ok(record(name, ADDRESS_B))
    }

    async fn list_wallets(&self) -> Result<Vec<WalletRecord>, RemoteError> {
        self.hit()?;
        Ok(vec![record("first", ADDRESS_A), record("second", ADDRESS_B)])
    }

    async fn create_token(&self, spec: &TokenSpec) -> Result<GeneratedToken, RemoteError> {
        self.hit()?;
        *self.last_token.lock().expect("lock") = Some(spec.clone());
        Ok(GeneratedToken {
            name: spec.name.clone(),
            symbol: spec.symbol.clone(),
            total_supply: spec.total_supply,
            decimals: spec.decimals,
            contract_code: format!("contract {}Token {{}}", spec.symbol),
        })
    }

    async fn generate_contract(
        &self,
        request: &ContractRequest,
    ) -> Result<GeneratedContract, RemoteError> {
        self.hit()?;
        Ok(GeneratedContract {
            contract_code: "pragma solidity ^0.8.20;".to_owned(),
            explanation: format!("Smart contract generated for: {}", request.description),
        })
    }
}

/// Primary clipboard double. With `delayed` set, the outcome only arrives
/// after the task has yielded, like a browser clipboard promise.
#[derive(Debug, Default)]
pub struct FakePrimary {
    pub available: bool,
    pub fail: bool,
    pub delayed: bool,
    pub written: RefCell<Vec<String>>,
}

impl PrimaryClipboard for FakePrimary {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.delayed {
            tokio::task::yield_now().await;
        }
        if self.fail {
            return Err(ClipboardError::Rejected("denied".to_owned()));
        }
        self.written.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

/// Fallback surface double that records the order of DOM-like operations and
/// how many scratch elements are still attached.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub copy_fails: bool,
    pub fill_fails: bool,
    pub live: Cell<usize>,
    pub next_id: Cell<u32>,
    pub ops: RefCell<Vec<String>>,
    pub copied: RefCell<Option<String>>,
    pub pending: RefCell<Option<String>>,
}

impl RecordingSurface {
    pub fn ops(&self) -> Vec<String> {
        self.ops.borrow().clone()
    }
}

impl FallbackSurface for RecordingSurface {
    type Element = u32;

    fn create_scratch(&self) -> Result<u32, ClipboardError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.set(self.live.get() + 1);
        self.ops.borrow_mut().push("create".to_owned());
        Ok(id)
    }

    fn fill_and_select(&self, _element: &u32, text: &str) -> Result<(), ClipboardError> {
        self.ops.borrow_mut().push("fill_select".to_owned());
        if self.fill_fails {
            return Err(ClipboardError::Rejected("select failed".to_owned()));
        }
        *self.pending.borrow_mut() = Some(text.to_owned());
        Ok(())
    }

    fn exec_copy(&self) -> Result<(), ClipboardError> {
        self.ops.borrow_mut().push("exec_copy".to_owned());
        if self.copy_fails {
            return Err(ClipboardError::Rejected("execCommand threw".to_owned()));
        }
        *self.copied.borrow_mut() = self.pending.borrow_mut().take();
        Ok(())
    }

    fn remove_scratch(&self, _element: u32) {
        self.live.set(self.live.get() - 1);
        self.ops.borrow_mut().push("remove".to_owned());
    }
}

/// Clipboard double for panel tests. Clones share the copy log.
#[derive(Debug, Default, Clone)]
pub struct StubClipboard {
    pub fail: bool,
    pub copied: Rc<RefCell<Vec<String>>>,
}

impl StubClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl Clipboard for StubClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable);
        }
        self.copied.borrow_mut().push(text.to_owned());
        Ok(())
    }
}
