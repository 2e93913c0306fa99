use serde::Deserialize;

/// The channel's method names, exhaustive and case-sensitive.
pub mod methods {
    pub const SHARE: &str = "share";
    pub const USE_AS_WALLPAPER: &str = "useAsWallpaper";
    pub const REQUEST_REVIEW: &str = "requestReview";
    pub const IS_ALBUM_AUTHORIZED: &str = "isAlbumAuthorized";
    pub const OPEN_APP_SETTINGS: &str = "openAppSettings";
    pub const SYNC_ALBUM: &str = "syncAlbum";
}

/// Arguments for methods that operate on a single file path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileArgs {
    pub file: String,
}

/// One variant per channel method, carrying its typed argument record.
/// Decoded once at the dispatch boundary; handlers never see raw payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodCall {
    Share(FileArgs),
    UseAsWallpaper(String),
    RequestReview { in_app: bool },
    IsAlbumAuthorized,
    OpenAppSettings,
    SyncAlbum(FileArgs),
}

impl MethodCall {
    pub fn method(&self) -> &'static str {
        match self {
            MethodCall::Share(_) => methods::SHARE,
            MethodCall::UseAsWallpaper(_) => methods::USE_AS_WALLPAPER,
            MethodCall::RequestReview { .. } => methods::REQUEST_REVIEW,
            MethodCall::IsAlbumAuthorized => methods::IS_ALBUM_AUTHORIZED,
            MethodCall::OpenAppSettings => methods::OPEN_APP_SETTINGS,
            MethodCall::SyncAlbum(_) => methods::SYNC_ALBUM,
        }
    }
}
