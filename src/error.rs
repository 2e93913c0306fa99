use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("invalid arguments for {method}: {reason}")]
    BadArguments {
        method: &'static str,
        reason: String,
    },

    #[error("no pictures directory is available for this user")]
    NoPicturesDirectory,

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
