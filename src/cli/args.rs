//! Argument groups for the CLI binary.
//!
//! The groups translate flags and environment variables into the typed
//! records the reconciler consumes. Enum-valued flags parse the same
//! vocabulary the configuration records accept (`enabled`, `SNMPv3`,
//! `present`, …).

use clap::Args;

use crate::config::{
    AgentState, DesiredState, ProtocolSupport, ShareLocation, SnmpConfig, TrapFormat,
};
use crate::error::Result;
use crate::session::RedfishSession;

use super::output::OutputFormat;

/// Controller connection arguments.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Controller hostname or IP address.
    #[arg(long = "idrac-address", value_name = "HOST", env = "IDRAC_ADDRESS")]
    pub address: String,

    /// Controller user name.
    #[arg(long = "idrac-user", value_name = "USER", env = "IDRAC_USER")]
    pub user: String,

    /// Controller password.
    #[arg(
        long = "idrac-password",
        value_name = "PASSWORD",
        env = "IDRAC_PASSWORD",
        hide_env_values = true
    )]
    pub password: String,

    /// HTTPS port of the Redfish service.
    #[arg(long = "idrac-port", value_name = "PORT", default_value_t = 443)]
    pub port: u16,

    /// Accept self-signed controller certificates.
    #[arg(long)]
    pub insecure: bool,
}

impl ConnectionArgs {
    /// Open an authenticated session to the controller.
    pub async fn connect(&self) -> Result<RedfishSession> {
        RedfishSession::builder(
            self.address.as_str(),
            self.user.as_str(),
            self.password.as_str(),
        )
        .port(self.port)
        .accept_invalid_certs(self.insecure)
        .connect()
        .await
    }
}

/// Network share arguments. The controller stages configuration jobs on
/// this share; all four are required together.
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// CIFS or NFS share path.
    #[arg(long = "share-name", value_name = "PATH")]
    pub name: String,

    /// Share user, `user@domain` form for CIFS.
    #[arg(long = "share-user", value_name = "USER")]
    pub user: String,

    /// Share password.
    #[arg(
        long = "share-password",
        value_name = "PASSWORD",
        env = "SHARE_PASSWORD",
        hide_env_values = true
    )]
    pub password: String,

    /// Local mount point with read-write permission.
    #[arg(long = "share-mount", value_name = "DIR")]
    pub mount_point: String,
}

impl ShareArgs {
    /// Build the share location record.
    pub fn to_share(&self) -> ShareLocation {
        ShareLocation::new(
            self.name.clone(),
            self.user.clone(),
            self.password.clone(),
            self.mount_point.clone(),
        )
    }
}

/// SNMP agent settings.
#[derive(Debug, Args)]
pub struct SnmpArgs {
    /// SNMP agent administrative state.
    #[arg(long = "agent", value_name = "STATE", default_value = "enabled")]
    pub agent: AgentState,

    /// Protocol family the agent accepts.
    #[arg(long = "protocol", value_name = "PROTOCOL", default_value = "all")]
    pub protocol: ProtocolSupport,

    /// Community string.
    #[arg(long = "community", value_name = "COMMUNITY", default_value = "public")]
    pub community: String,

    /// Agent discovery (listen) port.
    #[arg(long = "discovery-port", value_name = "PORT", default_value_t = 161)]
    pub discovery_port: u16,

    /// Trap destination port.
    #[arg(long = "trap-port", value_name = "PORT", default_value_t = 162)]
    pub trap_port: u16,

    /// Trap notification format.
    #[arg(long = "trap-format", value_name = "FORMAT", default_value = "SNMPv1")]
    pub trap_format: TrapFormat,

    /// Apply or remove the SNMP configuration.
    #[arg(long = "state", value_name = "STATE", default_value = "present")]
    pub state: DesiredState,
}

impl SnmpArgs {
    /// Build the desired-configuration record.
    pub fn to_config(&self) -> SnmpConfig {
        SnmpConfig {
            agent: self.agent,
            protocol: self.protocol,
            community: self.community.clone(),
            discovery_port: self.discovery_port,
            trap_port: self.trap_port,
            trap_format: self.trap_format,
            state: self.state,
        }
    }
}

/// Output and diagnostics arguments.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Verbose diagnostics on stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl OutputArgs {
    /// Initialize tracing. `RUST_LOG` wins over the verbosity flags.
    pub fn init_tracing(&self) {
        let default_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        snmp: SnmpArgs,
    }

    #[test]
    fn snmp_args_apply_module_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.snmp.to_config(), SnmpConfig::default());
    }

    #[test]
    fn snmp_args_parse_choice_strings() {
        let cli = TestCli::try_parse_from([
            "test",
            "--agent",
            "disabled",
            "--protocol",
            "SNMPv3",
            "--trap-format",
            "SNMPv2",
            "--state",
            "absent",
        ])
        .unwrap();
        let config = cli.snmp.to_config();
        assert_eq!(config.agent, AgentState::Disabled);
        assert_eq!(config.protocol, ProtocolSupport::V3Only);
        assert_eq!(config.trap_format, TrapFormat::V2);
        assert_eq!(config.state, DesiredState::Absent);
    }

    #[test]
    fn snmp_args_reject_unknown_choices() {
        assert!(TestCli::try_parse_from(["test", "--state", "gone"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--trap-format", "SNMPv4"]).is_err());
    }
}
