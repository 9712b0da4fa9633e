//! CLI utilities for idrac-snmp.
//!
//! This module provides command-line argument parsing and result rendering
//! for the `idrac-snmp-config` binary: the thin adapter between a CLI
//! invocation and the typed records the reconciler consumes.
//!
//! This module is only available with the `cli` feature.

pub mod args;
pub mod output;
