use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::dispatcher::{Dispatcher, CHANNEL_NAME};
use crate::outcome::Outcome;

/// One request submitted over the channel, paired with its reply slot.
struct IncomingCall {
    method: String,
    arguments: Value,
    reply: oneshot::Sender<Outcome>,
}

/// The named request/response conduit between the shell and the bridge.
/// Requests are served one at a time in submission order; each receives
/// exactly one outcome, on the same call that submitted it.
#[derive(Clone)]
pub struct MethodChannel {
    tx: mpsc::Sender<IncomingCall>,
}

impl MethodChannel {
    /// Spawns the serve loop that owns `dispatcher` and returns the endpoint.
    /// The loop ends when every `MethodChannel` clone has been dropped.
    pub fn spawn(dispatcher: Dispatcher, capacity: usize) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<IncomingCall>(capacity);
        let handle = tokio::spawn(async move {
            debug!(channel = CHANNEL_NAME, "method channel serving");
            while let Some(call) = rx.recv().await {
                let outcome = dispatcher.handle(&call.method, call.arguments).await;
                // The caller may have given up waiting; nothing to do then.
                let _ = call.reply.send(outcome);
            }
            debug!(channel = CHANNEL_NAME, "method channel closed");
        });
        (Self { tx }, handle)
    }

    pub fn name(&self) -> &'static str {
        CHANNEL_NAME
    }

    /// Submits one call and waits for its single outcome.
    pub async fn invoke(&self, method: impl Into<String>, arguments: Value) -> Outcome {
        let (reply, rx) = oneshot::channel();
        let call = IncomingCall {
            method: method.into(),
            arguments,
            reply,
        };
        if self.tx.send(call).await.is_err() {
            return Outcome::failure("method channel is closed");
        }
        match rx.await {
            Ok(outcome) => outcome,
            Err(_) => Outcome::failure("method channel dropped the reply"),
        }
    }
}
