//! Runs remote calls and clipboard copies off the UI thread and hands their
//! outcomes back to it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eframe::egui;
#[cfg(not(target_arch = "wasm32"))]
use eyre::WrapErr;
use obsidian_forge_adapters::{HttpRemoteClient, PlatformClipboard};
use obsidian_forge_core::{run, Completion, CopyJob, CopyOutcome, Dispatch};

type Inbox<T> = Arc<Mutex<Vec<T>>>;

pub struct Executor {
    remote: HttpRemoteClient,
    clipboard: PlatformClipboard,
    completions: Inbox<Completion>,
    copies: Inbox<CopyOutcome>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Runtime,
}

impl Executor {
    pub fn new(remote: HttpRemoteClient, clipboard: PlatformClipboard) -> eyre::Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .wrap_err("failed to start async runtime")?;

        Ok(Self {
            remote,
            clipboard,
            completions: Arc::new(Mutex::new(Vec::new())),
            copies: Arc::new(Mutex::new(Vec::new())),
            #[cfg(not(target_arch = "wasm32"))]
            runtime,
        })
    }

    /// Run `dispatch` in the background. The completion lands in the inbox
    /// and a repaint is requested so the next frame picks it up.
    pub fn spawn(&self, dispatch: Dispatch, ctx: &egui::Context) {
        tracing::debug!(
            workflow = ?dispatch.workflow,
            operation = dispatch.call.operation(),
            "dispatching remote call"
        );
        let remote = self.remote.clone();
        let inbox = Arc::clone(&self.completions);
        let ctx = ctx.clone();
        self.background(async move {
            let completion = run(&remote, &dispatch).await;
            lock(&inbox).push(completion);
            ctx.request_repaint();
        });
    }

    /// Run a copy until the clipboard has accepted or rejected it.
    pub fn copy(&self, job: CopyJob, ctx: &egui::Context) {
        tracing::debug!(copy_target = ?job.target, "copying to clipboard");
        let clipboard = self.clipboard.clone();
        let inbox = Arc::clone(&self.copies);
        let ctx = ctx.clone();
        self.background(async move {
            let outcome = job.run(&clipboard).await;
            lock(&inbox).push(outcome);
            ctx.request_repaint();
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn background(&self, task: impl std::future::Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn background(&self, task: impl std::future::Future<Output = ()> + Send + 'static) {
        self.runtime.spawn(task);
    }

    /// Completions received since the last call, in arrival order.
    pub fn drain(&self) -> Vec<Completion> {
        std::mem::take(&mut *lock(&self.completions))
    }

    /// Settled copies since the last call, in arrival order.
    pub fn drain_copies(&self) -> Vec<CopyOutcome> {
        std::mem::take(&mut *lock(&self.copies))
    }
}

fn lock<T>(inbox: &Inbox<T>) -> MutexGuard<'_, Vec<T>> {
    inbox.lock().unwrap_or_else(PoisonError::into_inner)
}
