//! Shared test utilities for idrac-snmp integration tests.

// Allow dead code since not all test files use all utilities
#![allow(dead_code)]

use std::collections::VecDeque;

use idrac_snmp::BoxFuture;
use idrac_snmp::prelude::*;

/// A call the reconciler made against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    MountShare {
        name: String,
    },
    EnableSnmp {
        community: String,
        discovery_port: u16,
        trap_port: u16,
        trap_format: TrapFormat,
    },
    DisableSnmp,
}

/// Scripted device session: queued responses, recorded calls.
///
/// A call with no queued response panics, so every test doubles as an
/// assertion that the device is only invoked where expected.
#[derive(Default)]
pub struct MockSession {
    share_mounted: bool,
    mount_responses: VecDeque<Result<bool>>,
    enable_responses: VecDeque<Result<StructuredStatus>>,
    disable_responses: VecDeque<Result<StructuredStatus>>,
    /// Calls in the order the reconciler made them.
    pub calls: Vec<Call>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that already has a staging share registered.
    pub fn with_share_mounted() -> Self {
        Self {
            share_mounted: true,
            ..Self::default()
        }
    }

    /// Queue a response for the next `mount_share` call.
    pub fn on_mount(mut self, response: Result<bool>) -> Self {
        self.mount_responses.push_back(response);
        self
    }

    /// Queue a response for the next `enable_snmp` call.
    pub fn on_enable(mut self, response: Result<StructuredStatus>) -> Self {
        self.enable_responses.push_back(response);
        self
    }

    /// Queue a response for the next `disable_snmp` call.
    pub fn on_disable(mut self, response: Result<StructuredStatus>) -> Self {
        self.disable_responses.push_back(response);
        self
    }
}

impl DeviceSession for MockSession {
    fn has_liaison_share(&self) -> bool {
        self.share_mounted
    }

    fn mount_share<'a>(&'a mut self, share: &'a ShareLocation) -> BoxFuture<'a, Result<bool>> {
        self.calls.push(Call::MountShare {
            name: share.name.clone(),
        });
        let response = self
            .mount_responses
            .pop_front()
            .expect("unexpected mount_share call");
        if matches!(response, Ok(true)) {
            self.share_mounted = true;
        }
        Box::pin(async move { response })
    }

    fn enable_snmp<'a>(
        &'a mut self,
        community: &'a str,
        discovery_port: u16,
        trap_port: u16,
        trap_format: TrapFormat,
    ) -> BoxFuture<'a, Result<StructuredStatus>> {
        self.calls.push(Call::EnableSnmp {
            community: community.to_string(),
            discovery_port,
            trap_port,
            trap_format,
        });
        let response = self
            .enable_responses
            .pop_front()
            .expect("unexpected enable_snmp call");
        Box::pin(async move { response })
    }

    fn disable_snmp<'a>(&'a mut self) -> BoxFuture<'a, Result<StructuredStatus>> {
        self.calls.push(Call::DisableSnmp);
        let response = self
            .disable_responses
            .pop_front()
            .expect("unexpected disable_snmp call");
        Box::pin(async move { response })
    }
}

/// Route reconciler diagnostics to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Share location used across the tests.
pub fn test_share() -> ShareLocation {
    ShareLocation::new("\\\\10.20.30.40\\share", "user1", "password", "/mnt/share")
}
