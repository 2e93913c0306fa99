//! Capability seam between the handlers and the operating system.

mod host;

pub use host::HostPlatform;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::BridgeError;

/// The OS capabilities handlers need. Injected into the dispatcher so tests
/// can substitute fakes; nothing here is a process-wide singleton.
#[async_trait]
pub trait Platform: Send + Sync {
    /// The user's pictures directory, resolved on every call.
    fn pictures_dir(&self) -> Result<PathBuf, BridgeError>;

    /// Hands `url` to the OS default opener. `true` iff the OS accepted it.
    async fn open_url(&self, url: &str) -> bool;
}
