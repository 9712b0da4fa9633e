//! Redfish-backed device session for iDRAC controllers.
//!
//! SNMP agent settings live in the manager's attribute registry
//! (`SNMP.1.*`), applied with a PATCH of the `Attributes` resource. An HTTP
//! response that reaches the controller is folded into a
//! [`StructuredStatus`]; only transport faults and credential rejection
//! surface as errors.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{Value, json};
use zeroize::Zeroize;

use crate::config::{AgentState, ShareLocation, TrapFormat};
use crate::error::{Error, Result};
use crate::session::{BoxFuture, DeviceSession};
use crate::status::StructuredStatus;

const DEFAULT_PORT: u16 = 443;
const DEFAULT_MANAGER_ID: &str = "iDRAC.Embedded.1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`RedfishSession`].
///
/// # Example
///
/// ```rust,no_run
/// # use idrac_snmp::session::RedfishSession;
/// # async fn example() -> idrac_snmp::Result<()> {
/// let session = RedfishSession::builder("192.168.10.120", "root", "calvin")
///     .accept_invalid_certs(true)
///     .connect()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SessionBuilder {
    host: String,
    port: u16,
    username: String,
    password: String,
    manager_id: String,
    timeout: Duration,
    accept_invalid_certs: bool,
}

impl SessionBuilder {
    fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: username.into(),
            password: password.into(),
            manager_id: DEFAULT_MANAGER_ID.to_string(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }

    /// Set the HTTPS port of the Redfish service.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the manager resource identifier.
    pub fn manager_id(mut self, manager_id: impl Into<String>) -> Self {
        self.manager_id = manager_id.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accept self-signed controller certificates.
    ///
    /// Factory-provisioned controllers ship with self-signed certificates,
    /// so most deployments need this until a CA-signed certificate is
    /// installed.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Connect to the controller.
    ///
    /// Performs a GET of the manager resource to verify reachability and
    /// credentials before the session is handed out.
    pub async fn connect(self) -> Result<RedfishSession> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .map_err(|e| Error::http(None::<&str>, e))?;

        let session = RedfishSession {
            http,
            base: format!("https://{}:{}", self.host, self.port),
            manager_id: self.manager_id,
            username: self.username,
            password: self.password,
            liaison_share: None,
        };
        session.verify().await?;
        Ok(session)
    }
}

/// Device session speaking Redfish to an iDRAC controller.
///
/// Authentication is HTTP basic per request; dropping the session releases
/// it. The staging share registered through
/// [`mount_share`](DeviceSession::mount_share) is held for the lifetime of
/// the session and consumed by the controller's configuration jobs.
pub struct RedfishSession {
    http: reqwest::Client,
    base: String,
    manager_id: String,
    username: String,
    password: String,
    liaison_share: Option<ShareLocation>,
}

impl RedfishSession {
    /// Start building a session for `host`.
    pub fn builder(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> SessionBuilder {
        SessionBuilder::new(host, username, password)
    }

    fn manager_url(&self) -> String {
        format!("{}/redfish/v1/Managers/{}", self.base, self.manager_id)
    }

    fn attributes_url(&self) -> String {
        format!("{}/Attributes", self.manager_url())
    }

    async fn verify(&self) -> Result<()> {
        let url = self.manager_url();
        tracing::debug!(endpoint = %url, "verifying controller session");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| Error::http(Some(url.as_str()), e))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::AuthRejected {
                endpoint: url.into(),
            });
        }
        response
            .error_for_status()
            .map_err(|e| Error::http(Some(url.as_str()), e))?;
        Ok(())
    }

    async fn patch_attributes(
        &self,
        attributes: Value,
        success_message: &str,
    ) -> Result<StructuredStatus> {
        let url = self.attributes_url();
        tracing::debug!(endpoint = %url, "applying controller attributes");

        let response = self
            .http
            .patch(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&json!({ "Attributes": attributes }))
            .send()
            .await
            .map_err(|e| Error::http(Some(url.as_str()), e))?;

        let code = response.status();
        if code == StatusCode::UNAUTHORIZED {
            return Err(Error::AuthRejected {
                endpoint: url.into(),
            });
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        if code.is_success() {
            let message =
                extended_info_message(&body).unwrap_or_else(|| success_message.to_string());
            Ok(StructuredStatus::success(message))
        } else {
            tracing::warn!(endpoint = %url, status = code.as_u16(), "controller rejected attribute update");
            let message = extended_info_message(&body)
                .unwrap_or_else(|| format!("controller returned HTTP {}", code.as_u16()));
            Ok(StructuredStatus::failure(message).with_detail("HttpStatus", code.as_u16()))
        }
    }
}

impl DeviceSession for RedfishSession {
    fn has_liaison_share(&self) -> bool {
        self.liaison_share.is_some()
    }

    fn mount_share<'a>(&'a mut self, share: &'a ShareLocation) -> BoxFuture<'a, Result<bool>> {
        Box::pin(async move {
            if let Err(kind) = share.validate() {
                tracing::warn!(%kind, "staging share refused");
                return Ok(false);
            }
            tracing::debug!(share = %share.name, mount_point = %share.mount_point, "staging share registered");
            self.liaison_share = Some(share.clone());
            Ok(true)
        })
    }

    fn enable_snmp<'a>(
        &'a mut self,
        community: &'a str,
        discovery_port: u16,
        trap_port: u16,
        trap_format: TrapFormat,
    ) -> BoxFuture<'a, Result<StructuredStatus>> {
        Box::pin(async move {
            let attributes =
                snmp_enable_attributes(community, discovery_port, trap_port, trap_format);
            self.patch_attributes(attributes, "SNMP agent enabled").await
        })
    }

    fn disable_snmp<'a>(&'a mut self) -> BoxFuture<'a, Result<StructuredStatus>> {
        Box::pin(async move {
            let attributes = json!({
                "SNMP.1.AgentEnable": AgentState::Disabled.as_attribute(),
            });
            self.patch_attributes(attributes, "SNMP agent disabled").await
        })
    }
}

impl fmt::Debug for RedfishSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedfishSession")
            .field("base", &self.base)
            .field("manager_id", &self.manager_id)
            .field("username", &self.username)
            .field("liaison_share", &self.liaison_share)
            .finish_non_exhaustive()
    }
}

impl Drop for RedfishSession {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Attribute registry entries for an enabled SNMP agent.
fn snmp_enable_attributes(
    community: &str,
    discovery_port: u16,
    trap_port: u16,
    trap_format: TrapFormat,
) -> Value {
    json!({
        "SNMP.1.AgentEnable": AgentState::Enabled.as_attribute(),
        "SNMP.1.AgentCommunity": community,
        "SNMP.1.DiscoveryPort": discovery_port,
        "SNMP.1.AlertPort": trap_port,
        "SNMP.1.TrapFormat": trap_format.as_attribute(),
    })
}

/// First `Message` from a Redfish `@Message.ExtendedInfo` array, whether it
/// appears at the top level or nested under `error`.
fn extended_info_message(body: &Value) -> Option<String> {
    let info = body
        .get("@Message.ExtendedInfo")
        .or_else(|| body.get("error").and_then(|e| e.get("@Message.ExtendedInfo")))?;
    info.as_array()?
        .iter()
        .find_map(|entry| entry.get("Message").and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_attributes_cover_agent_ports_and_trap_format() {
        let attrs = snmp_enable_attributes("public", 161, 162, TrapFormat::V2);
        assert_eq!(attrs["SNMP.1.AgentEnable"], "Enabled");
        assert_eq!(attrs["SNMP.1.AgentCommunity"], "public");
        assert_eq!(attrs["SNMP.1.DiscoveryPort"], 161);
        assert_eq!(attrs["SNMP.1.AlertPort"], 162);
        assert_eq!(attrs["SNMP.1.TrapFormat"], "SNMPv2");
    }

    #[test]
    fn extended_info_message_reads_top_level_array() {
        let body = json!({
            "@Message.ExtendedInfo": [
                { "MessageId": "IDRAC.2.8.SYS413", "Message": "The operation completed." }
            ]
        });
        assert_eq!(
            extended_info_message(&body).as_deref(),
            Some("The operation completed.")
        );
    }

    #[test]
    fn extended_info_message_reads_error_envelope() {
        let body = json!({
            "error": {
                "code": "Base.1.12.GeneralError",
                "@Message.ExtendedInfo": [
                    { "Message": "AgentCommunity is read-only while a job runs." }
                ]
            }
        });
        assert_eq!(
            extended_info_message(&body).as_deref(),
            Some("AgentCommunity is read-only while a job runs.")
        );
    }

    #[test]
    fn extended_info_message_absent_when_body_has_none() {
        assert_eq!(extended_info_message(&Value::Null), None);
        assert_eq!(extended_info_message(&json!({ "ok": true })), None);
    }
}
