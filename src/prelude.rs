//! Prelude module for convenient imports.
//!
//! This module provides a convenient set of commonly-used types and traits
//! for working with the idrac-snmp library.
//!
//! # Usage
//!
//! ```rust,no_run
//! use idrac_snmp::prelude::*;
//! ```
//!
//! This imports:
//! - Configuration records: [`SnmpConfig`], [`ShareLocation`] and their enums
//! - The session seam: [`DeviceSession`], [`RedfishSession`]
//! - The routine and its result: [`reconcile`], [`Reconciliation`]
//! - Error handling: [`Error`], [`Result`]

pub use crate::config::{
    AgentState, DesiredState, ProtocolSupport, ShareLocation, SnmpConfig, TrapFormat,
};
pub use crate::error::{Error, Result};
pub use crate::reconcile::{Message, Reconciliation, reconcile};
pub use crate::session::{DeviceSession, RedfishSession};
pub use crate::status::StructuredStatus;
