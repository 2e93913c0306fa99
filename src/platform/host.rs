use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use super::Platform;
use crate::error::BridgeError;

/// Production implementation backed by the real OS.
pub struct HostPlatform;

#[async_trait]
impl Platform for HostPlatform {
    fn pictures_dir(&self) -> Result<PathBuf, BridgeError> {
        dirs::picture_dir().ok_or(BridgeError::NoPicturesDirectory)
    }

    async fn open_url(&self, url: &str) -> bool {
        let url = url.to_string();
        // open::that blocks on the launcher process; keep it off the runtime.
        match tokio::task::spawn_blocking(move || open::that(&url)).await {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                warn!(%err, "OS opener rejected url");
                false
            }
            Err(_) => false,
        }
    }
}
