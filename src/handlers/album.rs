use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::BridgeError;
use crate::outcome::Outcome;
use crate::platform::Platform;
use crate::request::{methods, FileArgs};

/// Whether this process can write into the user's pictures directory.
/// A missing directory or denied permission both come back as `false`.
pub async fn is_authorized(platform: &dyn Platform) -> Result<Outcome, BridgeError> {
    let dir = match platform.pictures_dir() {
        Ok(dir) => dir,
        Err(_) => return Ok(Outcome::bool(false)),
    };
    Ok(Outcome::bool(dir_is_writable(&dir).await))
}

/// Moves the file into the pictures directory, keeping its base name.
/// Name collisions follow the platform default; nothing is guarded here.
pub async fn sync(platform: &dyn Platform, args: FileArgs) -> Result<Outcome, BridgeError> {
    let source = PathBuf::from(&args.file);
    let base_name = source.file_name().ok_or_else(|| BridgeError::BadArguments {
        method: methods::SYNC_ALBUM,
        reason: format!("path has no base name: {}", args.file),
    })?;
    let destination = platform.pictures_dir()?.join(base_name);
    fs::rename(&source, &destination).await?;
    Ok(Outcome::null())
}

// Creates and removes a throwaway file; any error reads as not writable.
async fn dir_is_writable(dir: &Path) -> bool {
    let probe = dir.join(format!(".album-write-probe-{}", std::process::id()));
    match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&probe)
        .await
    {
        Ok(file) => {
            drop(file);
            let _ = fs::remove_file(&probe).await;
            true
        }
        Err(_) => false,
    }
}
