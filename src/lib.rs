//! Idempotent SNMP agent configuration for Dell iDRAC management
//! controllers.
//!
//! Given a desired SNMP agent state and credentials for the controller and
//! a staging network share, [`reconcile`] drives the controller's
//! configuration to match and reports whether a change occurred. The
//! routine talks to the controller through the narrow [`DeviceSession`]
//! trait; [`RedfishSession`] is the shipped implementation for real
//! hardware, and tests substitute scripted sessions.
//!
//! This crate toggles configuration on a remote device — it is not an SNMP
//! client, agent, or protocol implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use idrac_snmp::prelude::*;
//!
//! # async fn example() -> idrac_snmp::Result<()> {
//! let mut session = RedfishSession::builder("192.168.10.120", "root", "calvin")
//!     .accept_invalid_certs(true)
//!     .connect()
//!     .await?;
//!
//! let desired = SnmpConfig::default();
//! let share = ShareLocation::new("\\\\10.0.0.5\\share", "user1", "password", "/mnt/share");
//!
//! let result = reconcile(&mut session, &desired, &share, false).await;
//! if result.failed {
//!     eprintln!("reconciliation failed: {:?}", result.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Check mode
//!
//! Passing `check_mode = true` to [`reconcile`] reports what a real run
//! would change without touching the device.
//!
//! # Features
//!
//! - `cli` — argument parsing and result rendering for the
//!   `idrac-snmp-config` binary.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod prelude;
pub mod reconcile;
pub mod session;
pub mod status;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{AgentState, DesiredState, ProtocolSupport, ShareLocation, SnmpConfig, TrapFormat};
pub use error::{Error, Result};
pub use reconcile::{Message, Reconciliation, reconcile};
pub use session::{BoxFuture, DeviceSession, RedfishSession};
pub use status::StructuredStatus;
