use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::handlers;
use crate::outcome::Outcome;
use crate::platform::Platform;
use crate::registry::MethodRegistry;

/// Channel identifier shared with the shell; all methods multiplex over it.
pub const CHANNEL_NAME: &str = "ml.cerasus.pics";

/// Routes each incoming method call to exactly one handler and returns its
/// single outcome. Has no side effects of its own.
pub struct Dispatcher {
    registry: MethodRegistry,
    platform: Arc<dyn Platform>,
}

impl Dispatcher {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self {
            registry: MethodRegistry::new(),
            platform,
        }
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    /// Handles one `(method, arguments)` pair. Never panics the caller:
    /// unknown names come back as `NotImplemented`, shape mismatches and
    /// handler faults as `Failure("0", _)`.
    pub async fn handle(&self, method: &str, arguments: Value) -> Outcome {
        debug!(%method, "dispatching method call");

        let Some(decode) = self.registry.get(method) else {
            warn!(%method, "unknown method");
            return Outcome::NotImplemented;
        };

        let call = match decode(arguments) {
            Ok(call) => call,
            Err(err) => {
                warn!(%method, %err, "argument shape mismatch");
                return err.into();
            }
        };

        // Handlers may block on OS calls; run them off the submitting thread
        // and keep their panics contained.
        let platform = Arc::clone(&self.platform);
        let task = tokio::spawn(async move { handlers::run(platform.as_ref(), call).await });

        match task.await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => {
                error!(%method, %err, "handler failed");
                err.into()
            }
            Err(join_err) if join_err.is_panic() => {
                error!(%method, "handler panicked");
                Outcome::failure("method handler panicked")
            }
            Err(_) => {
                error!(%method, "handler cancelled");
                Outcome::failure("method handler cancelled")
            }
        }
    }
}
