//! Device session abstraction.
//!
//! [`DeviceSession`] is the narrow interface the reconciler drives: one
//! staging-share query, one mount operation, and the pair of SNMP
//! configuration calls. The crate ships [`RedfishSession`] for real
//! controllers; tests substitute scripted implementations.

mod redfish;

pub use redfish::{RedfishSession, SessionBuilder};

use std::future::Future;
use std::pin::Pin;

use crate::config::{ShareLocation, TrapFormat};
use crate::error::Result;
use crate::status::StructuredStatus;

/// Type alias for boxed async return type (dyn-compatible).
///
/// Async trait methods cannot be object-safe, and the reconciler takes the
/// session as `&mut dyn DeviceSession` so tests can inject mocks. All
/// session methods therefore return `BoxFuture`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// An authenticated connection to a management controller.
///
/// The session is owned by the caller: it is acquired before a
/// reconciliation run and released after, and is not reused across
/// unrelated operations. Implementations perform the actual remote calls;
/// the reconciler only sequences them.
///
/// # Errors
///
/// Methods return `Err` for faults (connectivity loss, credential
/// rejection, malformed responses). A controller that accepts the call but
/// declines the operation reports that through the return value instead:
/// `Ok(false)` from [`mount_share`](DeviceSession::mount_share), or a
/// non-success [`StructuredStatus`] from the configuration calls.
pub trait DeviceSession: Send {
    /// Whether a staging network share is already registered on this
    /// session.
    fn has_liaison_share(&self) -> bool;

    /// Register `share` as the staging share for configuration operations.
    ///
    /// Returns `Ok(false)` when the share is refused (for example, a
    /// required field is missing).
    fn mount_share<'a>(&'a mut self, share: &'a ShareLocation) -> BoxFuture<'a, Result<bool>>;

    /// Enable the SNMP agent with the given parameters.
    fn enable_snmp<'a>(
        &'a mut self,
        community: &'a str,
        discovery_port: u16,
        trap_port: u16,
        trap_format: TrapFormat,
    ) -> BoxFuture<'a, Result<StructuredStatus>>;

    /// Disable the SNMP agent.
    fn disable_snmp<'a>(&'a mut self) -> BoxFuture<'a, Result<StructuredStatus>>;
}
