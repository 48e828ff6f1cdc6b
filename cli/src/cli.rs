use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[clap(about, version, author)]
pub struct Cli {
    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,

    /// The USB interface the hub exposes its HID reports on
    #[clap(long, default_value = "0")]
    pub interface: u8,

    /// How long to wait on a single USB transfer before giving up
    #[clap(long, default_value = "1000")]
    pub timeout_ms: u64,

    #[clap(subcommand)]
    pub command: DeviceCommand,
}

#[derive(Subcommand, Debug)]
pub enum DeviceCommand {
    /// Check the hub can be opened, without querying it
    Check {
        #[clap(flatten)]
        device: DeviceLocation,
    },

    /// Read all channels from the hub once
    Query {
        #[clap(flatten)]
        device: DeviceLocation,

        /// Print the readings as JSON instead of logging them
        #[clap(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct DeviceLocation {
    /// Bus number the hub is attached to (as shown by lsusb)
    #[clap(long)]
    pub bus: u8,

    /// Device address of the hub on that bus
    #[clap(long)]
    pub address: u8,
}

#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}

impl From<LevelFilter> for log::LevelFilter {
    fn from(level: LevelFilter) -> Self {
        match level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        }
    }
}
