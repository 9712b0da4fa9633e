//! Desired-state records for the SNMP agent and the staging network share.
//!
//! Field defaults mirror the controller's factory configuration: agent
//! enabled, all protocol versions, community `"public"`, ports 161/162,
//! SNMPv1 traps.

use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, ShareErrorKind};

/// SNMP agent administrative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgentState {
    /// Agent accepts SNMP requests.
    #[default]
    Enabled,
    /// Agent is switched off.
    Disabled,
}

impl AgentState {
    /// Attribute value understood by the controller.
    pub const fn as_attribute(self) -> &'static str {
        match self {
            AgentState::Enabled => "Enabled",
            AgentState::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentState::Enabled => write!(f, "enabled"),
            AgentState::Disabled => write!(f, "disabled"),
        }
    }
}

impl FromStr for AgentState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enabled" => Ok(AgentState::Enabled),
            "disabled" => Ok(AgentState::Disabled),
            _ => Err(Error::invalid_choice(
                "snmp_agent_enable",
                s,
                "enabled, disabled",
            )),
        }
    }
}

/// Protocol family the agent accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProtocolSupport {
    /// SNMPv1, v2 and v3.
    #[default]
    All,
    /// SNMPv3 only.
    V3Only,
}

impl fmt::Display for ProtocolSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolSupport::All => write!(f, "all"),
            ProtocolSupport::V3Only => write!(f, "SNMPv3"),
        }
    }
}

impl FromStr for ProtocolSupport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ProtocolSupport::All),
            "snmpv3" | "v3" => Ok(ProtocolSupport::V3Only),
            _ => Err(Error::invalid_choice("snmp_protocol", s, "all, SNMPv3")),
        }
    }
}

/// Trap notification format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrapFormat {
    /// SNMPv1 traps.
    #[default]
    V1,
    /// SNMPv2 traps.
    V2,
    /// SNMPv3 traps.
    V3,
}

impl TrapFormat {
    /// Attribute value understood by the controller.
    pub const fn as_attribute(self) -> &'static str {
        match self {
            TrapFormat::V1 => "SNMPv1",
            TrapFormat::V2 => "SNMPv2",
            TrapFormat::V3 => "SNMPv3",
        }
    }
}

impl fmt::Display for TrapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attribute())
    }
}

impl FromStr for TrapFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snmpv1" | "v1" => Ok(TrapFormat::V1),
            "snmpv2" | "v2" => Ok(TrapFormat::V2),
            "snmpv3" | "v3" => Ok(TrapFormat::V3),
            _ => Err(Error::invalid_choice(
                "snmp_trap_format",
                s,
                "SNMPv1, SNMPv2, SNMPv3",
            )),
        }
    }
}

/// Whether the SNMP configuration should be applied or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DesiredState {
    /// Apply the configuration (enable the agent).
    #[default]
    Present,
    /// Remove the configuration (disable the agent).
    Absent,
}

impl fmt::Display for DesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesiredState::Present => write!(f, "present"),
            DesiredState::Absent => write!(f, "absent"),
        }
    }
}

impl FromStr for DesiredState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "present" => Ok(DesiredState::Present),
            "absent" => Ok(DesiredState::Absent),
            _ => Err(Error::invalid_choice("state", s, "present, absent")),
        }
    }
}

/// Desired SNMP agent configuration for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnmpConfig {
    /// Agent administrative state.
    pub agent: AgentState,
    /// Protocol family the agent accepts. Carried for the configuration
    /// surface; the enable operation does not take it.
    pub protocol: ProtocolSupport,
    /// Community string.
    pub community: String,
    /// Agent discovery (listen) port.
    pub discovery_port: u16,
    /// Trap destination port.
    pub trap_port: u16,
    /// Trap notification format.
    pub trap_format: TrapFormat,
    /// Apply or remove the configuration.
    pub state: DesiredState,
}

impl Default for SnmpConfig {
    fn default() -> Self {
        Self {
            agent: AgentState::Enabled,
            protocol: ProtocolSupport::All,
            community: "public".to_string(),
            discovery_port: 161,
            trap_port: 162,
            trap_format: TrapFormat::V1,
            state: DesiredState::Present,
        }
    }
}

/// Network file share the controller stages configuration jobs on.
///
/// All four fields are required together; there is no valid partial form.
/// The password is wiped from memory on drop and redacted from `Debug`
/// output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ShareLocation {
    /// UNC or NFS path of the share.
    pub name: String,
    /// Share user, `user@domain` form for CIFS.
    pub user: String,
    /// Share password.
    pub password: String,
    /// Local mount point with read-write permission.
    pub mount_point: String,
}

impl ShareLocation {
    /// Create a share location from its four required parts.
    pub fn new(
        name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        mount_point: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            user: user.into(),
            password: password.into(),
            mount_point: mount_point.into(),
        }
    }

    /// Check that no required field is empty.
    pub fn validate(&self) -> Result<(), ShareErrorKind> {
        if self.name.trim().is_empty() {
            return Err(ShareErrorKind::EmptyPath);
        }
        if self.mount_point.trim().is_empty() {
            return Err(ShareErrorKind::EmptyMountPoint);
        }
        if self.user.is_empty() {
            return Err(ShareErrorKind::EmptyUser);
        }
        if self.password.is_empty() {
            return Err(ShareErrorKind::EmptyPassword);
        }
        Ok(())
    }
}

impl fmt::Debug for ShareLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareLocation")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("mount_point", &self.mount_point)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_factory_configuration() {
        let cfg = SnmpConfig::default();
        assert_eq!(cfg.agent, AgentState::Enabled);
        assert_eq!(cfg.protocol, ProtocolSupport::All);
        assert_eq!(cfg.community, "public");
        assert_eq!(cfg.discovery_port, 161);
        assert_eq!(cfg.trap_port, 162);
        assert_eq!(cfg.trap_format, TrapFormat::V1);
        assert_eq!(cfg.state, DesiredState::Present);
    }

    #[test]
    fn enums_parse_module_vocabulary() {
        assert_eq!("enabled".parse::<AgentState>().unwrap(), AgentState::Enabled);
        assert_eq!(
            "Disabled".parse::<AgentState>().unwrap(),
            AgentState::Disabled
        );
        assert_eq!("all".parse::<ProtocolSupport>().unwrap(), ProtocolSupport::All);
        assert_eq!(
            "SNMPv3".parse::<ProtocolSupport>().unwrap(),
            ProtocolSupport::V3Only
        );
        assert_eq!("v3".parse::<ProtocolSupport>().unwrap(), ProtocolSupport::V3Only);
        assert_eq!("SNMPv1".parse::<TrapFormat>().unwrap(), TrapFormat::V1);
        assert_eq!("v2".parse::<TrapFormat>().unwrap(), TrapFormat::V2);
        assert_eq!("absent".parse::<DesiredState>().unwrap(), DesiredState::Absent);
    }

    #[test]
    fn enums_reject_unknown_values() {
        assert!("on".parse::<AgentState>().is_err());
        assert!("snmpv2".parse::<ProtocolSupport>().is_err());
        assert!("SNMPv4".parse::<TrapFormat>().is_err());
        assert!("latest".parse::<DesiredState>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for state in [DesiredState::Present, DesiredState::Absent] {
            assert_eq!(state.to_string().parse::<DesiredState>().unwrap(), state);
        }
        for format in [TrapFormat::V1, TrapFormat::V2, TrapFormat::V3] {
            assert_eq!(format.to_string().parse::<TrapFormat>().unwrap(), format);
        }
    }

    #[test]
    fn share_validation_flags_each_missing_field() {
        let share = ShareLocation::new("\\\\10.0.0.5\\share", "user1", "pw", "/mnt/share");
        assert!(share.validate().is_ok());

        let no_path = ShareLocation::new("", "user1", "pw", "/mnt/share");
        assert_eq!(no_path.validate(), Err(ShareErrorKind::EmptyPath));

        let no_mount = ShareLocation::new("\\\\10.0.0.5\\share", "user1", "pw", " ");
        assert_eq!(no_mount.validate(), Err(ShareErrorKind::EmptyMountPoint));

        let no_user = ShareLocation::new("\\\\10.0.0.5\\share", "", "pw", "/mnt/share");
        assert_eq!(no_user.validate(), Err(ShareErrorKind::EmptyUser));

        let no_password = ShareLocation::new("\\\\10.0.0.5\\share", "user1", "", "/mnt/share");
        assert_eq!(no_password.validate(), Err(ShareErrorKind::EmptyPassword));
    }

    #[test]
    fn share_debug_redacts_password() {
        let share = ShareLocation::new("\\\\10.0.0.5\\share", "user1", "secret", "/mnt/share");
        let rendered = format!("{:?}", share);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret"));
    }
}
