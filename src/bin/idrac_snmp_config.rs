//! idrac-snmp-config: Reconcile SNMP agent settings on an iDRAC controller.
//!
//! Part of the idrac-snmp CLI utilities.

use clap::Parser;
use std::process::ExitCode;

use idrac_snmp::Error;
use idrac_snmp::cli::args::{ConnectionArgs, OutputArgs, ShareArgs, SnmpArgs};
use idrac_snmp::cli::output::{OutputContext, write_error};
use idrac_snmp::reconcile::reconcile;

/// Reconcile SNMP agent settings on an iDRAC controller.
#[derive(Debug, Parser)]
#[command(name = "idrac-snmp-config", version, about)]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(flatten)]
    share: ShareArgs,

    #[command(flatten)]
    snmp: SnmpArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Report what would change without touching the device.
    #[arg(long)]
    check: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    args.output.init_tracing();

    let desired = args.snmp.to_config();
    let share = args.share.to_share();

    // Validate the share quadruple before going anywhere near the network
    if let Err(kind) = share.validate() {
        write_error(&Error::share(kind));
        return ExitCode::FAILURE;
    }

    // Connect to the controller
    let mut session = match args.connection.connect().await {
        Ok(session) => session,
        Err(e) => {
            write_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let result = reconcile(&mut session, &desired, &share, args.check).await;

    let output_ctx = OutputContext {
        format: args.output.format,
    };
    if let Err(e) = output_ctx.write_result(&result) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    if result.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
