use anyhow::{bail, Context, Result};
use clap::Parser;
use hidtemp_usb::device::{LibUsbOpener, UsbSettings};
use hidtemp_usb::devices::HidTempDevice;
use hidtemp_usb::session::DeviceSession;
use log::{info, warn};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::time::Duration;

use crate::cli::{Cli, DeviceCommand, DeviceLocation};

mod cli;

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    let settings = UsbSettings {
        interface: args.interface,
        timeout: Duration::from_millis(args.timeout_ms),
    };
    let session = DeviceSession::new(LibUsbOpener::new(settings));

    match args.command {
        DeviceCommand::Check { device } => {
            let device = locate(&device);
            if !session.check_reachable(&device) {
                bail!("{} could not be opened", device);
            }
            println!("reachable");
        }
        DeviceCommand::Query { device, json } => {
            let device = locate(&device);
            let outcome = session.query_once(&device);
            if let Some(error) = &outcome.close_error {
                warn!("{} was not released cleanly: {}", device, error);
            }

            let readings = outcome
                .into_result()
                .with_context(|| format!("Querying {} failed", device))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&readings)?);
            } else {
                for reading in readings {
                    info!("{}", reading);
                }
            }
        }
    }

    Ok(())
}

fn locate(location: &DeviceLocation) -> HidTempDevice {
    HidTempDevice::new(location.bus, location.address)
}
