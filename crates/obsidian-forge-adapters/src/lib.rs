pub mod clipboard;
pub mod config;
pub mod remote;

pub use clipboard::{default_clipboard, PlatformClipboard, SystemClipboard, SystemSurface};
pub use config::ForgeClientConfig;
pub use remote::HttpRemoteClient;
