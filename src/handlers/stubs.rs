//! Methods the bridge acknowledges but does not implement yet. Each still
//! resolves its request with an explicit outcome.

use crate::error::BridgeError;
use crate::outcome::Outcome;
use crate::request::FileArgs;

// TODO: hand the file to the system share sheet.
pub async fn share(_args: FileArgs) -> Result<Outcome, BridgeError> {
    Ok(Outcome::null())
}

/// No sanctioned API path for setting the desktop picture.
pub async fn use_as_wallpaper(_path: String) -> Result<Outcome, BridgeError> {
    Ok(Outcome::NotImplemented)
}

pub async fn open_app_settings() -> Result<Outcome, BridgeError> {
    Ok(Outcome::NotImplemented)
}
