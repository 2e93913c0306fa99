use std::collections::HashMap;

use serde_json::Value;

use crate::error::BridgeError;
use crate::request::{methods, FileArgs, MethodCall};

/// Turns a raw argument payload into the typed call for one method.
pub type Decoder = fn(Value) -> Result<MethodCall, BridgeError>;

/// Fixed mapping from method name to its argument decoder. Built once at
/// construction and immutable afterwards; there is no dynamic registration.
pub struct MethodRegistry {
    entries: HashMap<&'static str, Decoder>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        let mut entries: HashMap<&'static str, Decoder> = HashMap::new();
        entries.insert(methods::SHARE, decode_share);
        entries.insert(methods::USE_AS_WALLPAPER, decode_use_as_wallpaper);
        entries.insert(methods::REQUEST_REVIEW, decode_request_review);
        entries.insert(methods::IS_ALBUM_AUTHORIZED, decode_is_album_authorized);
        entries.insert(methods::OPEN_APP_SETTINGS, decode_open_app_settings);
        entries.insert(methods::SYNC_ALBUM, decode_sync_album);
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<Decoder> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_share(arguments: Value) -> Result<MethodCall, BridgeError> {
    file_args(methods::SHARE, arguments).map(MethodCall::Share)
}

fn decode_use_as_wallpaper(arguments: Value) -> Result<MethodCall, BridgeError> {
    match arguments {
        Value::String(path) => Ok(MethodCall::UseAsWallpaper(path)),
        other => Err(BridgeError::BadArguments {
            method: methods::USE_AS_WALLPAPER,
            reason: format!("expected a path string, got {other}"),
        }),
    }
}

fn decode_request_review(arguments: Value) -> Result<MethodCall, BridgeError> {
    match arguments {
        Value::Bool(in_app) => Ok(MethodCall::RequestReview { in_app }),
        other => Err(BridgeError::BadArguments {
            method: methods::REQUEST_REVIEW,
            reason: format!("expected a boolean, got {other}"),
        }),
    }
}

// The two no-argument methods ignore whatever payload came along.
fn decode_is_album_authorized(_arguments: Value) -> Result<MethodCall, BridgeError> {
    Ok(MethodCall::IsAlbumAuthorized)
}

fn decode_open_app_settings(_arguments: Value) -> Result<MethodCall, BridgeError> {
    Ok(MethodCall::OpenAppSettings)
}

fn decode_sync_album(arguments: Value) -> Result<MethodCall, BridgeError> {
    file_args(methods::SYNC_ALBUM, arguments).map(MethodCall::SyncAlbum)
}

fn file_args(method: &'static str, arguments: Value) -> Result<FileArgs, BridgeError> {
    serde_json::from_value(arguments).map_err(|err| BridgeError::BadArguments {
        method,
        reason: err.to_string(),
    })
}
