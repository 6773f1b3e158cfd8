mod config;
mod http_client;
mod input;

use anyhow::Context;
use clap::Parser;
use intraship_client_core::{CarrierClient, CreateShipmentOptions, Label};
use tracing::{error, info, instrument};

use config::{init_logging, Args, Command};
use http_client::UreqTransport;
use input::{read_toml, PickupFile, ShipmentFile};

#[instrument(name = "main", level = "info")]
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Without logging there is nowhere to report to.
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run_app(&args) {
        error!("Application failed to run: {:?}", e);
        return Err(e);
    }

    Ok(())
}

fn run_app(args: &Args) -> anyhow::Result<()> {
    let environment = args.environment();
    info!(?environment, user = %args.user, "starting Intraship client");

    let transport = UreqTransport::new(environment)?;
    let client = CarrierClient::new(args.client_config(), environment, transport)
        .context("invalid client configuration")?;

    match &args.command {
        Command::CreateShipment { file, xml_label } => {
            let shipments: ShipmentFile = read_toml(file)?;
            let created = client.create_shipment(
                shipments.into_batch(),
                CreateShipmentOptions {
                    xml_label_response: *xml_label,
                },
            )?;

            println!("{}", created.shipment_number);
            match created.label {
                Label::Url(url) => println!("{url}"),
                Label::Xml(xml) => println!("{xml}"),
            }
        }
        Command::DeleteShipment { shipment_number } => {
            client.delete_shipment(shipment_number)?;
            println!("deleted {shipment_number}");
        }
        Command::Manifest { shipment_number } => {
            client.manifest(shipment_number)?;
            println!("manifested {shipment_number}");
        }
        Command::BookPickup { file } => {
            let pickup: PickupFile = read_toml(file)?;
            let booked = client.book_pickup(
                &pickup.booking,
                &pickup.pickup_address,
                pickup.contact_orderer.as_ref(),
            )?;
            println!("{}", booked.confirmation_number);
        }
    }

    Ok(())
}
