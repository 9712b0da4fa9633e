//! The SNMP reconciliation routine.
//!
//! One run sequences at most two remote calls: register the staging share
//! if the session has none, then enable or disable the agent according to
//! the desired state. Everything the run learns is reported through a
//! [`Reconciliation`] record; collaborator faults never escape to the
//! caller.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{DesiredState, ShareLocation, SnmpConfig};
use crate::error::Result;
use crate::session::DeviceSession;
use crate::status::{STATUS_SUCCESS, StructuredStatus};

/// Message payload of a [`Reconciliation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    /// Free-text diagnostic.
    Text(String),
    /// Status mapping captured from a controller call.
    Status(StructuredStatus),
}

/// Outcome of one reconciliation run.
///
/// Serializes with the result keys the configuration-management caller
/// expects: `changed`, `failed` and `msg`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    /// Whether the device configuration was (or, in check mode, would be)
    /// modified.
    pub changed: bool,
    /// Whether the run failed.
    pub failed: bool,
    /// Diagnostic or controller status payload, when there is one.
    #[serde(rename = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl Reconciliation {
    fn unchanged() -> Self {
        Self {
            changed: false,
            failed: false,
            message: None,
        }
    }

    fn fault(text: String) -> Self {
        Self {
            changed: false,
            failed: true,
            message: Some(Message::Text(text)),
        }
    }
}

/// Reconcile the controller's SNMP agent configuration with `desired`.
///
/// In check mode the device is never touched; the record reports what a
/// real run would change. Faults raised by the session are folded into the
/// record with `failed` set and a message prefixed `Error:` — this function
/// never returns an error to the caller.
pub async fn reconcile(
    session: &mut dyn DeviceSession,
    desired: &SnmpConfig,
    share: &ShareLocation,
    check_mode: bool,
) -> Reconciliation {
    match run(session, desired, share, check_mode).await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(error = %err, "reconciliation aborted by collaborator fault");
            Reconciliation::fault(format!("Error: {}", err))
        }
    }
}

async fn run(
    session: &mut dyn DeviceSession,
    desired: &SnmpConfig,
    share: &ShareLocation,
    check_mode: bool,
) -> Result<Reconciliation> {
    let mut outcome = Reconciliation::unchanged();

    // The controller stages configuration jobs on a network share; nothing
    // can be applied until one is registered.
    if !session.has_liaison_share() {
        debug!(share = %share.name, "no staging share on session, registering");
        if !session.mount_share(share).await? {
            outcome.failed = true;
            outcome.message = Some(Message::Text(
                "Failed to set up the local mount point for the network share".to_string(),
            ));
            return Ok(outcome);
        }
    }

    let exists = current_config_matches(desired);

    match desired.state {
        DesiredState::Present => {
            if check_mode || exists {
                outcome.changed = !exists;
            } else {
                debug!(community = %desired.community, port = desired.discovery_port, "enabling SNMP agent");
                let status = session
                    .enable_snmp(
                        &desired.community,
                        desired.discovery_port,
                        desired.trap_port,
                        desired.trap_format,
                    )
                    .await?;
                outcome.message = Some(Message::Status(status));
            }
        }
        DesiredState::Absent => {
            if check_mode || !exists {
                outcome.changed = exists;
            } else {
                debug!("disabling SNMP agent");
                let status = session.disable_snmp().await?;
                outcome.message = Some(Message::Status(status));
            }
        }
    }

    if let Some(Message::Status(status)) = &outcome.message {
        match status.status() {
            Some(STATUS_SUCCESS) => outcome.changed = true,
            Some(_) => outcome.failed = true,
            None => {}
        }
    }

    Ok(outcome)
}

/// Whether the device already carries the desired configuration.
///
/// The session contract has no read path for the applied SNMP settings, so
/// this cannot compare against the device and reports every run as a
/// pending change. Callers relying on `changed` for idempotence will see a
/// change reported on every apply until this is closed.
///
/// TODO: compare against the device once `DeviceSession` grows a read
/// operation for the current SNMP configuration.
fn current_config_matches(_desired: &SnmpConfig) -> bool {
    false
}
