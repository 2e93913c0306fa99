use crate::error::BridgeError;
use crate::outcome::Outcome;
use crate::platform::Platform;

/// Store page for the app, opened in write-review mode.
pub const REVIEW_URL: &str = "itms-apps://itunes.apple.com/app/id1457009047?action=write-review";

/// Asks the OS to open the review page. The result is whether navigation was
/// accepted; a refusal is `false`, never a `Failure`. There is no in-app
/// review sheet on this platform, so both values of `in_app` land on the
/// store page.
pub async fn request_review(
    platform: &dyn Platform,
    _in_app: bool,
) -> Result<Outcome, BridgeError> {
    Ok(Outcome::bool(platform.open_url(REVIEW_URL).await))
}
