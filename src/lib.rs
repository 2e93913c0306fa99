//! Native bridge for the pics shell: one named method channel, six
//! OS-capability methods, one outcome per request.
//!
//! The shell submits `(method, arguments)` pairs over a [`MethodChannel`];
//! the [`Dispatcher`] decodes each into a typed [`MethodCall`], routes it to
//! exactly one handler, and returns a single [`Outcome`]. All OS access goes
//! through the injected [`Platform`] seam so tests can run against fakes.

pub mod channel;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod outcome;
pub mod platform;
pub mod registry;
pub mod request;

pub use channel::MethodChannel;
pub use dispatcher::{Dispatcher, CHANNEL_NAME};
pub use error::BridgeError;
pub use handlers::review::REVIEW_URL;
pub use outcome::{Outcome, FAILURE_CODE};
pub use platform::{HostPlatform, Platform};
pub use registry::MethodRegistry;
pub use request::{methods, FileArgs, MethodCall};
