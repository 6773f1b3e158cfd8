use std::{path::PathBuf, sync::OnceLock};

use clap::{Parser, Subcommand};
use intraship_client_core::{ClientConfig, Environment};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, prelude::*, registry::Registry, EnvFilter};

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Makes sure a panic ends up in the log file before the process exits.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!("A panic occurred: {}", panic_info);
    }));
}

/// DHL Intraship shipment client
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Intraship user
    #[arg(short, long, env = "INTRASHIP_USER", default_value = "")]
    pub user: String,

    /// Intraship password
    #[arg(
        short = 'P',
        long,
        env = "INTRASHIP_SIGNATURE",
        default_value = "",
        hide_env_values = true
    )]
    pub signature: String,

    /// First part of the DHL account number
    #[arg(short, long, env = "INTRASHIP_EKP", default_value = "")]
    pub ekp: String,

    #[arg(long, default_value = "01", help = "Procedure id")]
    pub procedure_id: String,

    #[arg(long, default_value = "01", help = "Partner id, also the default pickup attendance")]
    pub partner_id: String,

    /// Use the Intraship test system
    #[arg(long)]
    pub test: bool,

    /// Verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase logging verbosity")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the shipments listed in a TOML file and print the first shipment number
    CreateShipment {
        file: PathBuf,
        /// Return the label as XML instead of a download URL
        #[arg(long)]
        xml_label: bool,
    },
    DeleteShipment { shipment_number: String },
    /// Manifest a shipment for today's pickup
    Manifest { shipment_number: String },
    /// Book a pickup described in a TOML file
    BookPickup { file: PathBuf },
}

impl Args {
    /// Credentials are checked when the client is created, not here.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::builder()
            .user(self.user.as_str())
            .signature(self.signature.as_str())
            .ekp(self.ekp.as_str())
            .procedure_id(self.procedure_id.as_str())
            .partner_id(self.partner_id.as_str())
            .build()
    }

    pub const fn environment(&self) -> Environment {
        if self.test {
            Environment::Test
        } else {
            Environment::Production
        }
    }
}

/// Initialize logging to `intraship_client.log`
pub fn init_logging(verbose_level: u8) -> anyhow::Result<()> {
    setup_panic_hook();

    // Bridge logs from the `log` crate to `tracing`
    LogTracer::init().ok();

    let file = std::fs::File::create("intraship_client.log")?;
    let (nb_writer, guard) = tracing_appender::non_blocking(file);

    if LOG_GUARD.set(guard).is_err() {
        tracing::warn!("LOG_GUARD was already set");
    }

    // Request and response XML are only logged from level 1 on.
    let filter_str = match verbose_level {
        0 => "info,ureq=error,native_tls=error",
        1 => "debug,ureq=warn,native_tls=error",
        2 => "trace,ureq=info,native_tls=error",
        _ => "trace",
    };

    let subscriber = Registry::default().with(EnvFilter::new(filter_str)).with(
        fmt::layer()
            .with_writer(nb_writer)
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .with_ansi(false)
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber)?;
    tracing::info!("Logging system initialized.");

    Ok(())
}
