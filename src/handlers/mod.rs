//! One handler per channel method. Handlers are single-shot and stateless;
//! retry policy belongs to the shell.

pub mod album;
pub mod review;
pub mod stubs;

use crate::error::BridgeError;
use crate::outcome::Outcome;
use crate::platform::Platform;
use crate::request::MethodCall;

/// Invokes the one handler matching `call`.
pub async fn run(platform: &dyn Platform, call: MethodCall) -> Result<Outcome, BridgeError> {
    match call {
        MethodCall::Share(args) => stubs::share(args).await,
        MethodCall::UseAsWallpaper(path) => stubs::use_as_wallpaper(path).await,
        MethodCall::RequestReview { in_app } => review::request_review(platform, in_app).await,
        MethodCall::IsAlbumAuthorized => album::is_authorized(platform).await,
        MethodCall::OpenAppSettings => stubs::open_app_settings().await,
        MethodCall::SyncAlbum(args) => album::sync(platform, args).await,
    }
}
